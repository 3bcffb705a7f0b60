//! Error types for pattern generation and emission

use crate::coord::{Bounds, Coordinate};

/// Errors raised while checking, serializing or writing patterns
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A coordinate fell outside the bounds it was checked against
    #[error("coordinate {coordinate} at index {index} is outside {bounds}")]
    OutOfBounds {
        index: usize,
        coordinate: Coordinate,
        bounds: Bounds,
    },

    /// No challenge is registered under this id
    #[error("unknown challenge id: {0}")]
    UnknownChallenge(u32),

    /// Difficulty name is not one of `easy`, `medium`, `hard`
    #[error("unknown difficulty: '{0}'")]
    UnknownDifficulty(String),

    /// JSON encoding failed
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the encoded pattern failed
    #[error("io error writing pattern: {0}")]
    Io(#[from] std::io::Error),
}

impl PatternError {
    /// Create out-of-bounds error
    pub fn out_of_bounds(index: usize, coordinate: Coordinate, bounds: Bounds) -> Self {
        Self::OutOfBounds {
            index,
            coordinate,
            bounds,
        }
    }
}

/// Result alias for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
