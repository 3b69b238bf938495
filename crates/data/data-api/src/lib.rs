//! Synthetic Data API
//!
//! Configuration types and builders for the synthetic generators.

mod config;

// Re-export SPI types
pub use data_spi::{DataError, Result};

pub use config::{
    reference_start, MetricsGeneratorConfig, MetricsGeneratorConfigBuilder, NetworkSeriesConfig,
    PostGeneratorConfig,
};
