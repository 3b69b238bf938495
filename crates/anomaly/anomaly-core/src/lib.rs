//! Anomaly Detection Core
//!
//! Isolation forest classifier and feature-row validation.

mod isolation_forest;
mod validation;

pub use isolation_forest::IsolationForest;
pub use validation::validate_rows;
