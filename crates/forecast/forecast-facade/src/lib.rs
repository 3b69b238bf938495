//! Forecast Facade
//!
//! Re-exports all public types from the forecast stack for convenient usage.

// Re-export SPI traits and models
pub use forecast_spi::*;

// Re-export configuration
pub use forecast_api::*;

// Re-export core modules for direct access
pub use forecast_core::{arima, confidence};

pub use forecast_core::{
    difference, from_standard_errors, levinson_durbin, z_score, Arima, FittedArima,
};
