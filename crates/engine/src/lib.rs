//! Engine module - the frame-paced loop that drives a lander session.
//!
//! - [`game_loop`]: dedicated loop thread, frame pacing, cooperative stop
//! - [`session`]: one render pass = lander tick + presenting the frame
//! - [`render`]: the [`Renderer`] seam implemented by front ends
//! - [`config`]: runtime configuration with environment overrides
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use lunar_lander_engine::{FrameTiming, GameConfig, GameLoop, Renderer, Session};
//! use lunar_lander_engine::core::Lander;
//! use lunar_lander_engine::types::Coordinate;
//!
//! struct Discard;
//! impl Renderer for Discard {
//!     fn present_terrain(&mut self, _: &[Coordinate]) -> anyhow::Result<()> { Ok(()) }
//!     fn present_craft(&mut self, _: Coordinate, _: i32, _: i32) -> anyhow::Result<()> { Ok(()) }
//! }
//!
//! let config = GameConfig::default().with_seed(3);
//! let terrain = Arc::new(config.build_terrain().unwrap());
//! let session = Session::new(terrain, Lander::new(config.lander_start()), Discard);
//!
//! let mut game_loop = GameLoop::new(FrameTiming::default());
//! game_loop.start(session).unwrap();
//! std::thread::sleep(Duration::from_millis(40));
//! let report = game_loop.stop_and_join().unwrap();
//! assert!(report.frames > 0);
//! ```

pub mod config;
pub mod error;
pub mod game_loop;
pub mod render;
pub mod session;

pub use lunar_lander_core as core;
pub use lunar_lander_types as types;

pub use config::GameConfig;
pub use error::{ConfigError, EngineError};
pub use game_loop::{FrameTiming, GameLoop, LoopHandle, LoopReport, LoopState, RenderPass};
pub use render::{CraftShape, Renderer};
pub use session::Session;
