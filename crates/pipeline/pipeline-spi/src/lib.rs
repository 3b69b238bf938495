//! Pipeline Service Provider Interface
//!
//! Defines the report pipeline contract, report and alert models, and the
//! error taxonomy the request handlers expose.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ReportPipeline;
pub use error::{ConfigError, ErrorDetail, ErrorKind, PipelineError, Result};
pub use model::{Alert, ForecastPoint, MetricsReport, SentimentReport, Severity};
