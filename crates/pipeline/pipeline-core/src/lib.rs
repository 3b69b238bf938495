//! Pipeline Core
//!
//! The two report pipelines and their threshold alerts:
//!
//! - [`MetricsPipeline`]: hourly metrics, anomaly flags, block time forecast
//! - [`SentimentPipeline`]: scored posts aggregated by day and topic, merged
//!   with the network series
//!
//! Each run is a pure function of its [`PipelineConfig`]; the random source
//! is created inside the run from the configured seed.

mod alerts;
mod metrics;
mod sentiment;

// Re-export SPI types for implementations
pub use pipeline_api::{PipelineConfig, Thresholds};
pub use pipeline_spi::{
    Alert, MetricsReport, PipelineError, ReportPipeline, Result, SentimentReport, Severity,
};

pub use alerts::{evaluate_metrics_alerts, evaluate_sentiment_alerts};
pub use metrics::MetricsPipeline;
pub use sentiment::SentimentPipeline;
