//! Anomaly Detection Service Provider Interface
//!
//! Defines the classifier capability and its result and error types.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Classifier;
pub use error::{AnomalyError, Result};
pub use model::AnomalyResult;
