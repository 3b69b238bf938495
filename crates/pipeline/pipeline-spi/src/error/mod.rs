//! Error module containing error types and result aliases

mod config_error;
mod pipeline_error;

pub use config_error::ConfigError;
pub use pipeline_error::{ErrorDetail, ErrorKind, PipelineError};

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
