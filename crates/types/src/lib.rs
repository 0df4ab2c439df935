//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (terrain generation, craft simulation, terminal rendering).
//!
//! # World Dimensions
//!
//! The playfield is a fixed 640x480 world. Like most raster systems, `y` grows
//! downward, so the *largest* `y` of the terrain is its lowest point on screen.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 640 | Horizontal span of the terrain |
//! | `SCREEN_HEIGHT` | 480 | Vertical extent of the world |
//! | `BOTTOM_MARGIN` | -50 | Offset of the lowest terrain point from the bottom |
//! | `MIN_TERRAIN_HEIGHT` | 50 | Lowest valley of the starting segment |
//! | `MAX_TERRAIN_HEIGHT` | 96 | Tallest mountain of the starting segment (20% of height) |
//!
//! # Frame Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 17 | Target frame period (~59 FPS) |
//! | `MIN_SLEEP_MS` | 2 | Sleep floor when a frame overruns its budget |
//!
//! # Examples
//!
//! ```
//! use lunar_lander_types::{Coordinate, SCREEN_WIDTH};
//! use std::cmp::Ordering;
//!
//! let left = Coordinate::new(0, 300);
//! let right = Coordinate::new(SCREEN_WIDTH, 120);
//! assert_eq!(left.cmp_x(&right), Ordering::Less);
//!
//! // Only `x` takes part in ordering.
//! assert_eq!(Coordinate::new(5, 1).cmp_x(&Coordinate::new(5, 99)), Ordering::Equal);
//!
//! // Floating point input truncates toward zero.
//! assert_eq!(Coordinate::from_f64(12.9, -3.7), Coordinate::new(12, -3));
//! ```

use std::cmp::Ordering;

/// World width in units (640)
pub const SCREEN_WIDTH: i32 = 640;

/// World height in units (480)
pub const SCREEN_HEIGHT: i32 = 480;

/// Offset of the lowest terrain point relative to the bottom of the screen.
///
/// Negative values lift the terrain above the bottom edge, leaving room for a
/// status line.
pub const BOTTOM_MARGIN: i32 = -50;

/// Lowest valley of the initial flat segment, measured from the bottom.
pub const MIN_TERRAIN_HEIGHT: i32 = 50;

/// Tallest mountain of the initial flat segment (20% of the screen height).
pub const MAX_TERRAIN_HEIGHT: i32 = SCREEN_HEIGHT / 5;

/// Subdivision stops once a segment is narrower than this.
pub const MIN_SEGMENT_SPAN: i32 = 20;

/// Target frame period in milliseconds (17ms ≈ 59 FPS)
pub const FRAME_MS: u64 = 17;

/// Minimum sleep between frames, even when a frame overruns its budget.
pub const MIN_SLEEP_MS: u64 = 2;

/// Default lander body width
pub const LANDER_WIDTH: i32 = 20;

/// Default lander body height
pub const LANDER_HEIGHT: i32 = 20;

/// Default fuel load (arbitrary units)
pub const LANDER_FUEL: i32 = 100;

/// Altitude reported by a lander that has no terrain attached.
pub const NO_TERRAIN_ALTITUDE: i32 = -1;

/// A 2D integer point in world space.
///
/// Terrain profiles are sorted left to right, so the natural ordering of a
/// coordinate is by `x` alone (see [`Coordinate::cmp_x`]). Two coordinates with
/// the same `x` but different `y` compare `Equal` under that ordering. Equality
/// (`==`) is still structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from floating point values, truncating toward zero.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Self {
            x: x as i32,
            y: y as i32,
        }
    }

    /// Compare by horizontal position only.
    pub fn cmp_x(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x)
    }

    /// Same point shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// How altitude is read off a terrain profile between two sample points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AltitudeMode {
    /// Use the first terrain point at or right of the query, no interpolation.
    #[default]
    Nearest,
    /// Interpolate linearly between the two bracketing terrain points.
    Linear,
}

impl AltitudeMode {
    /// Parse an altitude mode (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use lunar_lander_types::AltitudeMode;
    ///
    /// assert_eq!(AltitudeMode::parse("linear"), Some(AltitudeMode::Linear));
    /// assert_eq!(AltitudeMode::parse("NEAREST"), Some(AltitudeMode::Nearest));
    /// assert_eq!(AltitudeMode::parse("cubic"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "nearest" => Some(AltitudeMode::Nearest),
            "linear" => Some(AltitudeMode::Linear),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AltitudeMode::Nearest => "nearest",
            AltitudeMode::Linear => "linear",
        }
    }
}

/// Outcome of a single lander tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanderStatus {
    /// The lander moved down one unit.
    Descending,
    /// The lander is on (or below) the surface, or has no terrain; position is frozen.
    Grounded,
    /// The lander is outside the terrain span (or too far from it to measure); position is frozen.
    OutOfBounds,
}

impl LanderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanderStatus::Descending => "DESCENDING",
            LanderStatus::Grounded => "GROUNDED",
            LanderStatus::OutOfBounds => "OUT OF BOUNDS",
        }
    }
}

/// Per-frame readout handed to renderers alongside the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Telemetry {
    /// Height above the terrain, `None` when it could not be measured.
    pub altitude: Option<i32>,
    pub fuel: i32,
    pub status: LanderStatus,
    pub frame: u64,
}
