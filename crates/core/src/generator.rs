//! Midpoint-displacement terrain generator.
//!
//! The profile starts as a flat segment across the whole screen. Each segment
//! wider than [`TerrainConfig::min_span`] gets a new point somewhere between a
//! quarter and half of the way along it, nudged up or down by at most the
//! current deviation limit. The limit shrinks by `2^decay` per level, so large
//! features appear first and detail gets finer as the recursion deepens.
//!
//! After subdivision the points are sorted left to right and shifted
//! vertically so that the lowest point sits on `screen_height + bottom_margin`.

use crate::error::TerrainError;
use crate::rng::RandomSource;
use crate::terrain::Terrain;
use crate::types::{
    Coordinate, BOTTOM_MARGIN, MAX_TERRAIN_HEIGHT, MIN_SEGMENT_SPAN, MIN_TERRAIN_HEIGHT,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Parameters of a terrain generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    /// Lowest valley of the starting segment, above the bottom of the screen.
    pub min_height: i32,
    /// Tallest mountain of the starting segment, above the bottom of the screen.
    pub max_height: i32,
    /// Where the lowest point ends up relative to `screen_height`.
    pub bottom_margin: i32,
    /// Segments narrower than this are not subdivided.
    pub min_span: i32,
    /// Initial deviation limit as a fraction of `screen_height`.
    pub initial_deviation: f64,
    /// The deviation limit is divided by `2^decay` on every level.
    pub decay: f64,
    /// Split points are drawn from `[midpoint_min, midpoint_min + midpoint_spread)`.
    pub midpoint_min: f64,
    pub midpoint_spread: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            min_height: MIN_TERRAIN_HEIGHT,
            max_height: MAX_TERRAIN_HEIGHT,
            bottom_margin: BOTTOM_MARGIN,
            min_span: MIN_SEGMENT_SPAN,
            initial_deviation: 0.6,
            decay: 1.2,
            midpoint_min: 0.25,
            midpoint_spread: 0.25,
        }
    }
}

impl TerrainConfig {
    /// Config for a screen of the given size, other parameters at defaults.
    pub fn for_screen(screen_width: i32, screen_height: i32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Self::default()
        }
    }

    pub fn with_heights(mut self, min_height: i32, max_height: i32) -> Self {
        self.min_height = min_height;
        self.max_height = max_height;
        self
    }

    pub fn with_bottom_margin(mut self, bottom_margin: i32) -> Self {
        self.bottom_margin = bottom_margin;
        self
    }

    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(TerrainError::InvalidConfig(format!(
                "screen must be positive, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.max_height < self.min_height {
            return Err(TerrainError::InvalidConfig(format!(
                "max_height ({}) is below min_height ({})",
                self.max_height, self.min_height
            )));
        }
        if self.min_span <= 0 {
            return Err(TerrainError::InvalidConfig(format!(
                "min_span must be positive, got {}",
                self.min_span
            )));
        }
        if !(self.decay > 0.0) {
            return Err(TerrainError::InvalidConfig(format!(
                "decay must be positive, got {}",
                self.decay
            )));
        }
        if !(0.0..1.0).contains(&self.midpoint_min)
            || !(self.midpoint_spread >= 0.0)
            || self.midpoint_min + self.midpoint_spread > 1.0
        {
            return Err(TerrainError::InvalidConfig(format!(
                "split range [{}, {}) must lie within [0, 1]",
                self.midpoint_min,
                self.midpoint_min + self.midpoint_spread
            )));
        }
        // Every split must move x by at least one unit.
        if f64::from(self.min_span) * self.midpoint_min < 1.0 {
            return Err(TerrainError::InvalidConfig(format!(
                "min_span ({}) * midpoint_min ({}) must be at least 1",
                self.min_span, self.midpoint_min
            )));
        }
        Ok(())
    }
}

/// Generates terrain profiles from an injected random source.
#[derive(Debug, Clone)]
pub struct TerrainGenerator<R> {
    config: TerrainConfig,
    rng: R,
}

impl<R: RandomSource> TerrainGenerator<R> {
    pub fn new(config: TerrainConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Generate and publish a validated [`Terrain`].
    pub fn generate(&mut self) -> Result<Terrain, TerrainError> {
        self.config.validate()?;
        let points = self.generate_points();
        let terrain = Terrain::from_points(points)?;
        log::debug!(
            "generated terrain: {} points, span {:?}, lowest y {}",
            terrain.len(),
            terrain.span(),
            terrain.lowest_y()
        );
        Ok(terrain)
    }

    /// Generate a sorted, normalized profile.
    ///
    /// The config is not validated here; see [`TerrainGenerator::generate`].
    /// Splits that would not advance `x` end the recursion, so an unvalidated
    /// config still terminates.
    pub fn generate_points(&mut self) -> Vec<Coordinate> {
        let cfg = self.config;

        // Both ends share the same height.
        let y0 = (f64::from(cfg.screen_height)
            - self.rng.next_f64() * f64::from(cfg.max_height - cfg.min_height)
            - f64::from(cfg.min_height)) as i32;
        let deviation = (f64::from(cfg.screen_height) * cfg.initial_deviation) as i32;

        let mut points = Vec::new();
        self.subdivide(
            &mut points,
            Coordinate::new(0, y0),
            Coordinate::new(cfg.screen_width, y0),
            deviation,
        );

        // Stable, so duplicates keep emission order.
        points.sort_by(Coordinate::cmp_x);
        normalize(&mut points, cfg.screen_height, cfg.bottom_margin);
        points
    }

    fn subdivide(
        &mut self,
        points: &mut Vec<Coordinate>,
        start: Coordinate,
        end: Coordinate,
        deviation: i32,
    ) {
        let cfg = self.config;
        if end.x - start.x < cfg.min_span {
            points.push(start);
            points.push(end);
            return;
        }

        let fraction = self.rng.next_f64() * cfg.midpoint_spread + cfg.midpoint_min;
        let x = (f64::from(end.x - start.x) * fraction) as i32 + start.x;
        if x == start.x {
            points.push(start);
            points.push(end);
            return;
        }
        let y = (f64::from(end.y - start.y) * fraction) as i32 + start.y;

        let shift = (self.rng.next_f64() * 2.0 - 1.0) * f64::from(deviation);
        // No lower clamp: peaks may leave the top of the screen.
        let y = ((f64::from(y) + shift) as i32).min(cfg.screen_height);

        let mid = Coordinate::new(x, y);
        points.push(mid);

        let deviation = (f64::from(deviation) / 2f64.powf(cfg.decay)) as i32;
        self.subdivide(points, start, mid, deviation);
        self.subdivide(points, mid, end, deviation);
    }
}

/// Shift every point so the lowest one lands on `screen_height + bottom_margin`.
pub fn normalize(points: &mut [Coordinate], screen_height: i32, bottom_margin: i32) {
    let Some(lowest) = points.iter().map(|p| p.y).max() else {
        return;
    };
    let shift = screen_height - (lowest - bottom_margin);
    for p in points.iter_mut() {
        p.y += shift;
    }
}
