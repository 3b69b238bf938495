//! Forecast Core
//!
//! ARIMA forecaster with ψ-weight prediction intervals, plus the
//! differencing and interval helpers it is built from.

pub mod arima;
pub mod confidence;

// Re-export SPI traits for implementations
pub use forecast_spi::{ConfidenceInterval, ForecastError, Forecaster, Result};

// Re-export main types
pub use arima::{difference, levinson_durbin, Arima, FittedArima};
pub use confidence::{from_standard_errors, z_score};
