use thiserror::Error;

/// Failures of the game loop lifecycle.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("game loop is already running")]
    AlreadyStarted,

    /// The loop was stopped; it cannot be restarted.
    #[error("game loop has been stopped")]
    Stopped,

    #[error("game loop was never started")]
    NotStarted,

    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("game loop thread panicked")]
    Panicked,

    #[error("render pass failed: {0:#}")]
    RenderPass(anyhow::Error),
}

/// Invalid runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key}: expected an unsigned integer seed, got {value:?}")]
    InvalidSeed { key: &'static str, value: String },

    #[error("{key}: expected `nearest` or `linear`, got {value:?}")]
    InvalidAltitudeMode { key: &'static str, value: String },
}
