//! Anomaly Detection API
//!
//! Configuration types for anomaly classification.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, AnomalyResult, Classifier, Result};

// ============================================================================
// Classifier Configuration
// ============================================================================

/// Isolation forest configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsolationForestConfig {
    /// Number of isolation trees (default: 100).
    pub n_estimators: usize,
    /// Rows sampled per tree (default: 256).
    pub max_samples: usize,
    /// Expected fraction of anomalous rows (default: 0.05).
    pub contamination: f64,
    /// Seed for tree construction (default: 42).
    pub seed: u64,
}

impl Default for IsolationForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_samples: 256,
            contamination: 0.05,
            seed: 42,
        }
    }
}

impl IsolationForestConfig {
    pub fn new(contamination: f64, seed: u64) -> Self {
        Self {
            contamination,
            seed,
            ..Self::default()
        }
    }

    /// Set the number of trees.
    pub fn with_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }

    /// Set the per-tree sample size.
    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_estimators == 0 {
            return Err(AnomalyError::InvalidParameter {
                name: "n_estimators".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.max_samples < 2 {
            return Err(AnomalyError::InvalidParameter {
                name: "max_samples".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        if !(self.contamination > 0.0 && self.contamination <= 0.5) {
            return Err(AnomalyError::InvalidParameter {
                name: "contamination".to_string(),
                reason: format!("must be in (0, 0.5], got {}", self.contamination),
            });
        }
        Ok(())
    }
}
