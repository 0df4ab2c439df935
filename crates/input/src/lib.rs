//! Terminal input module.
//!
//! The lander has no controls yet, so input is limited to leaving the game:
//! quit keys read on the main thread, and termination signals sent by the OS.
//! The game loop runs on its own thread either way.

pub mod map;
pub mod shutdown;

pub use map::should_quit;
pub use shutdown::ShutdownSignal;
