//! The descending craft.
//!
//! Physics is a placeholder: while the landing legs are above the surface the
//! lander sinks one unit per tick, and once they touch it stays put. Speeds and
//! fuel are carried so that thrust and gravity can be layered on later without
//! changing how altitude is measured.

use std::sync::Arc;

use crate::error::TerrainError;
use crate::terrain::Terrain;
use crate::types::{
    Coordinate, LanderStatus, Telemetry, LANDER_FUEL, LANDER_HEIGHT, LANDER_WIDTH,
    NO_TERRAIN_ALTITUDE,
};

#[derive(Debug, Clone)]
pub struct Lander {
    /// Bottom-centre of the body; the legs hang below it.
    position: Coordinate,
    h_speed: f64,
    v_speed: f64,
    fuel: i32,
    width: i32,
    height: i32,
    terrain: Option<Arc<Terrain>>,
}

impl Lander {
    pub fn new(position: Coordinate) -> Self {
        Self {
            position,
            h_speed: 0.0,
            v_speed: 0.0,
            fuel: LANDER_FUEL,
            width: LANDER_WIDTH,
            height: LANDER_HEIGHT,
            terrain: None,
        }
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fuel(mut self, fuel: i32) -> Self {
        self.fuel = fuel;
        self
    }

    /// Associate the lander with the terrain it descends onto.
    pub fn attach(&mut self, terrain: Arc<Terrain>) {
        self.terrain = Some(terrain);
    }

    pub fn is_attached(&self) -> bool {
        self.terrain.is_some()
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn fuel(&self) -> i32 {
        self.fuel
    }

    pub fn h_speed(&self) -> f64 {
        self.h_speed
    }

    pub fn v_speed(&self) -> f64 {
        self.v_speed
    }

    /// Height of the landing legs above the terrain.
    ///
    /// Returns [`NO_TERRAIN_ALTITUDE`] when no terrain is attached, and
    /// [`TerrainError::OutOfBounds`] when the lander has drifted past the
    /// right end of the terrain. Positions too far from the surface to
    /// measure in an `i32` give [`TerrainError::AltitudeOverflow`].
    pub fn altitude(&self) -> Result<i32, TerrainError> {
        let Some(terrain) = &self.terrain else {
            return Ok(NO_TERRAIN_ALTITUDE);
        };
        terrain
            .altitude_at(self.position)?
            .checked_sub(self.height)
            .ok_or(TerrainError::AltitudeOverflow {
                x: self.position.x,
                y: self.position.y,
            })
    }

    /// Advance one tick.
    pub fn update(&mut self) -> LanderStatus {
        match self.altitude() {
            Ok(altitude) if altitude > 0 => {
                self.position.y += 1;
                LanderStatus::Descending
            }
            Ok(_) => LanderStatus::Grounded,
            Err(e) => {
                log::warn!("lander at ({}, {}): {}", self.position.x, self.position.y, e);
                LanderStatus::OutOfBounds
            }
        }
    }

    pub fn telemetry(&self, status: LanderStatus, frame: u64) -> Telemetry {
        Telemetry {
            altitude: self.altitude().ok().filter(|_| self.is_attached()),
            fuel: self.fuel,
            status,
            frame,
        }
    }
}
