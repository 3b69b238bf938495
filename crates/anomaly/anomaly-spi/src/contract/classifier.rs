//! Anomaly classifier trait definition.

use crate::error::Result;
use crate::model::AnomalyResult;

/// Anomaly classifier over multivariate feature rows.
///
/// Each row is one observation; every row must have the same number of
/// features. Implementations flag roughly their configured contamination
/// fraction of the rows they were fitted on and must be deterministic
/// for a fixed seed.
pub trait Classifier: Send + Sync {
    /// Fit the classifier to feature rows.
    fn fit(&mut self, rows: &[Vec<f64>]) -> Result<()>;

    /// Classify feature rows; one flag per row.
    fn detect(&self, rows: &[Vec<f64>]) -> Result<AnomalyResult>;

    /// Check if the classifier has been fitted.
    fn is_fitted(&self) -> bool;

    /// Classifier name, used in logs.
    fn name(&self) -> &str;

    /// Fit on `rows` and classify the same rows.
    fn fit_detect(&mut self, rows: &[Vec<f64>]) -> Result<AnomalyResult> {
        self.fit(rows)?;
        self.detect(rows)
    }
}
