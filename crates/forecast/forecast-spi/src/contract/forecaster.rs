//! Trait for univariate forecasters

use crate::error::Result;
use crate::model::ConfidenceInterval;

/// A model that forecasts `horizon` steps past the end of a series and
/// brackets each step with interval bounds.
pub trait Forecaster: Send + Sync {
    /// Fit on `series` and forecast the next `horizon` steps.
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<ConfidenceInterval>;

    /// Shortest series the model accepts.
    fn min_observations(&self) -> usize;

    /// Model name for logging.
    fn name(&self) -> &str;
}
