//! Errors raised while building or querying terrain.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    /// The query lies right of the last terrain point.
    #[error("terrain query at x={x} is outside the generated span (max x={max_x})")]
    OutOfBounds { x: i32, max_x: i32 },

    #[error("terrain has no points")]
    Empty,

    /// Point `index` has a smaller `x` than its predecessor.
    #[error("terrain points are not sorted by x (first violation at index {index})")]
    Unsorted { index: usize },

    #[error("invalid terrain config: {0}")]
    InvalidConfig(String),

    /// The altitude at this position does not fit in an `i32`.
    #[error("altitude at ({x}, {y}) overflows")]
    AltitudeOverflow { x: i32, y: i32 },
}
