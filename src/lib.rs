//! Lunar Lander (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so that the binary, the
//! integration tests and the benchmarks can use `lunar_lander::{core,engine,term,input,types}`.

pub use lunar_lander_core as core;
pub use lunar_lander_engine as engine;
pub use lunar_lander_input as input;
pub use lunar_lander_term as term;
pub use lunar_lander_types as types;
