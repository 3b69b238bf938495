//! Data error types.

use thiserror::Error;

/// Synthetic data errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// A record carries NaN or an infinite value
    #[error("Non-finite value in row {row}: field '{field}'")]
    NonFinite { row: usize, field: String },

    /// Two sequences that must line up have different lengths
    #[error("Length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The requested window contains no records
    #[error("Empty window: {0}")]
    EmptyWindow(String),

    /// Invalid generator parameter
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
