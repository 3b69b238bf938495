//! Pipeline Facade
//!
//! Single entry point for the report pipelines, used by the server and CLI.
//!
//! ```no_run
//! use pipeline_facade::prelude::*;
//!
//! let config = PipelineConfig::from_env()?;
//! let report = MetricsPipeline::new(config)?.run()?;
//! println!("{} anomalies", report.anomaly_count);
//! # Ok::<(), PipelineError>(())
//! ```

// Re-export SPI contracts, errors and report models
pub use pipeline_spi::*;

// Re-export configuration
pub use pipeline_api::{PipelineConfig, PipelineConfigBuilder, Thresholds, ENV_PREFIX};

// Re-export the pipelines
pub use pipeline_core::{
    evaluate_metrics_alerts, evaluate_sentiment_alerts, MetricsPipeline, SentimentPipeline,
};

// Filter vocabulary
pub use data_spi::{Source, Topic};
pub use sentiment_spi::PostFilter;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{MetricsPipeline, SentimentPipeline};
    pub use crate::{PipelineConfig, PipelineConfigBuilder, PostFilter, Thresholds};
    pub use crate::{PipelineError, ReportPipeline, Result};
}
