//! Forecast Service Provider Interface
//!
//! Defines the forecaster capability, its interval output and errors.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Forecaster;
pub use error::{ForecastError, Result};
pub use model::ConfidenceInterval;
