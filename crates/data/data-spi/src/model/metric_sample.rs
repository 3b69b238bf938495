//! Hourly network health sample.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// One hourly observation of network health.
///
/// `is_anomaly` is false when generated and set afterwards by the
/// anomaly classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: NaiveDateTime,
    /// Block time in seconds
    pub block_time: f64,
    /// Validator uptime in percent
    pub validator_uptime: f64,
    pub node_count: f64,
    pub is_anomaly: bool,
}

impl MetricSample {
    /// Names of the numeric feature columns, in `features()` order.
    pub const FEATURES: [&'static str; 3] = ["block_time", "validator_uptime", "node_count"];

    /// Create an unclassified sample.
    pub fn new(
        timestamp: NaiveDateTime,
        block_time: f64,
        validator_uptime: f64,
        node_count: f64,
    ) -> Self {
        Self {
            timestamp,
            block_time,
            validator_uptime,
            node_count,
            is_anomaly: false,
        }
    }

    /// Numeric feature row fed to the anomaly classifier.
    pub fn features(&self) -> [f64; 3] {
        [self.block_time, self.validator_uptime, self.node_count]
    }

    /// Reject rows carrying NaN or infinite values.
    pub fn check_finite(&self, row: usize) -> Result<()> {
        for (name, value) in Self::FEATURES.iter().zip(self.features()) {
            if !value.is_finite() {
                return Err(DataError::NonFinite {
                    row,
                    field: (*name).to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Extract the block time column.
pub fn block_times(samples: &[MetricSample]) -> Vec<f64> {
    samples.iter().map(|s| s.block_time).collect()
}

/// Extract the validator uptime column.
pub fn validator_uptimes(samples: &[MetricSample]) -> Vec<f64> {
    samples.iter().map(|s| s.validator_uptime).collect()
}

/// Extract the node count column.
pub fn node_counts(samples: &[MetricSample]) -> Vec<f64> {
    samples.iter().map(|s| s.node_count).collect()
}
