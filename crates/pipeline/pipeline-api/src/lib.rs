//! Pipeline Consumer API
//!
//! Configuration for the metrics and sentiment pipelines:
//!
//! - [`Thresholds`]: alert thresholds
//! - [`PipelineConfig`]: seed, windows, model knobs, thresholds and filter
//! - [`PipelineConfigBuilder`]: fluent construction with validation
//! - environment overrides via `NETPULSE_*` variables

mod config;
mod env;
mod thresholds;

// Re-export from SPI
pub use pipeline_spi::{
    Alert, ConfigError, ErrorDetail, ErrorKind, ForecastPoint, MetricsReport, PipelineError,
    ReportPipeline, Result, SentimentReport, Severity,
};

pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use env::ENV_PREFIX;
pub use thresholds::Thresholds;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{PipelineConfig, PipelineConfigBuilder, Thresholds};
    pub use crate::{Alert, MetricsReport, PipelineError, Result, SentimentReport, Severity};
    pub use crate::ReportPipeline;
}
