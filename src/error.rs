//! Error types for the simulator core.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Trial counts must be zero or positive.
    #[error("invalid argument: trial count must be non-negative, got {trials}")]
    InvalidArgument { trials: i64 },
}
