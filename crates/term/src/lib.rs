//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. The world (terrain polyline,
//! craft outline, status line) is rasterized into a framebuffer of styled
//! character cells, which is then diffed against the previous frame and
//! flushed with crossterm.
//!
//! - [`scene_view`]: pure world-to-cell rasterization, unit-testable
//! - [`renderer`]: raw-mode terminal session and frame diffing
//! - [`scene`]: [`TerminalScene`], the engine-facing `Renderer`

pub mod fb;
pub mod renderer;
pub mod scene;
pub mod scene_view;

pub use lunar_lander_engine as engine;
pub use lunar_lander_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::TerminalScene;
pub use scene_view::{SceneView, Viewport, STATUS_ROWS};
