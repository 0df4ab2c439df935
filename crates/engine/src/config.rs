//! Runtime configuration.
//!
//! Defaults come from the constants in `lunar-lander-types`. Two optional
//! environment variables override them:
//!
//! | Variable | Values | Effect |
//! |----------|--------|--------|
//! | `LANDER_SEED` | `u64` | Reproducible terrain |
//! | `LANDER_ALTITUDE_MODE` | `nearest`, `linear` | Altitude sampling between terrain points |

use crate::core::{RngSource, Terrain, TerrainConfig, TerrainError, TerrainGenerator};
use crate::error::ConfigError;
use crate::game_loop::FrameTiming;
use crate::types::{AltitudeMode, Coordinate};

pub const SEED_VAR: &str = "LANDER_SEED";
pub const ALTITUDE_MODE_VAR: &str = "LANDER_ALTITUDE_MODE";

/// Height at which the lander spawns.
pub const LANDER_START_Y: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameConfig {
    pub terrain: TerrainConfig,
    pub timing: FrameTiming,
    pub altitude_mode: AltitudeMode,
    /// `None` draws terrain from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(SEED_VAR).filter(|v| !v.trim().is_empty()) {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed {
                    key: SEED_VAR,
                    value: value.clone(),
                })?;
            config.seed = Some(seed);
        }

        if let Some(value) = lookup(ALTITUDE_MODE_VAR).filter(|v| !v.trim().is_empty()) {
            config.altitude_mode =
                AltitudeMode::parse(&value).ok_or_else(|| ConfigError::InvalidAltitudeMode {
                    key: ALTITUDE_MODE_VAR,
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate the session's terrain.
    pub fn build_terrain(&self) -> Result<Terrain, TerrainError> {
        let terrain = match self.seed {
            Some(seed) => {
                log::info!("generating terrain from seed {}", seed);
                TerrainGenerator::new(self.terrain, RngSource::seeded(seed)).generate()?
            }
            None => {
                log::info!("generating terrain from entropy");
                TerrainGenerator::new(self.terrain, RngSource::from_entropy()).generate()?
            }
        };
        Ok(terrain.with_altitude_mode(self.altitude_mode))
    }

    /// Spawn point: horizontally centred, near the top.
    pub fn lander_start(&self) -> Coordinate {
        Coordinate::new(self.terrain.screen_width / 2, LANDER_START_Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_lookup_gives_defaults() {
        let config = GameConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.altitude_mode, AltitudeMode::Nearest);
        assert_eq!(config.lander_start(), Coordinate::new(320, 20));
    }

    #[test]
    fn reads_seed_and_mode() {
        let config = GameConfig::from_lookup(lookup(&[
            (SEED_VAR, " 42 "),
            (ALTITUDE_MODE_VAR, "Linear"),
        ]))
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.altitude_mode, AltitudeMode::Linear);
    }

    #[test]
    fn rejects_bad_seed() {
        let err = GameConfig::from_lookup(lookup(&[(SEED_VAR, "-3")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidSeed {
                key: SEED_VAR,
                value: "-3".to_string()
            }
        );
    }

    #[test]
    fn rejects_bad_mode() {
        let err = GameConfig::from_lookup(lookup(&[(ALTITUDE_MODE_VAR, "cubic")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAltitudeMode { .. }));
    }

    #[test]
    fn seeded_terrain_is_reproducible() {
        let config = GameConfig::default().with_seed(1234);
        let a = config.build_terrain().unwrap();
        let b = config.build_terrain().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn terrain_carries_altitude_mode() {
        let config = GameConfig {
            altitude_mode: AltitudeMode::Linear,
            ..GameConfig::default().with_seed(5)
        };
        assert_eq!(config.build_terrain().unwrap().altitude_mode(), AltitudeMode::Linear);
    }
}
