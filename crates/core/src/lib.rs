//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the terrain generator, the terrain query surface and
//! the lander. It has **zero dependencies** on UI, threads, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical terrain
//! - **Testable**: Every rule can be exercised with a scripted random source
//! - **Shareable**: A built [`Terrain`] is immutable and can sit behind an `Arc`
//!
//! # Module Structure
//!
//! - [`generator`]: midpoint-displacement terrain generation and normalization
//! - [`terrain`]: sorted terrain profile with altitude queries
//! - [`lander`]: craft state and the per-tick descent rule
//! - [`rng`]: injectable uniform random sources
//! - [`error`]: terrain construction and query errors
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use lunar_lander_core::{Lander, RngSource, TerrainConfig, TerrainGenerator};
//! use lunar_lander_core::types::{Coordinate, LanderStatus};
//!
//! let mut generator = TerrainGenerator::new(TerrainConfig::default(), RngSource::seeded(7));
//! let terrain = Arc::new(generator.generate().unwrap());
//! assert_eq!(terrain.span(), (0, 640));
//!
//! let mut lander = Lander::new(Coordinate::new(320, -2000));
//! lander.attach(terrain);
//! assert_eq!(lander.update(), LanderStatus::Descending);
//! assert_eq!(lander.position().y, -1999);
//! ```

pub mod error;
pub mod generator;
pub mod lander;
pub mod rng;
pub mod terrain;

pub use lunar_lander_types as types;

// Re-export commonly used types for convenience
pub use error::TerrainError;
pub use generator::{normalize, TerrainConfig, TerrainGenerator};
pub use lander::Lander;
pub use rng::{RandomSource, RngSource, SequenceSource};
pub use terrain::Terrain;
