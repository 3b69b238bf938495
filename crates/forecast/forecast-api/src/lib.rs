//! Forecast Consumer API
//!
//! Configuration types for forecasters.
//!
//! This crate provides:
//! - `ArimaConfig` with the reference ARIMA(5,1,0) orders
//! - `ConfidenceConfig` for interval construction
//! - Re-exports from SPI for convenience

// Re-export traits from SPI
pub use forecast_spi::{ConfidenceInterval, ForecastError, Forecaster, Result};

use serde::{Deserialize, Serialize};

/// Largest accepted autoregressive order.
pub const MAX_AR_ORDER: usize = 10;
/// Largest accepted differencing order.
pub const MAX_DIFFERENCE_ORDER: usize = 2;

/// Configuration for confidence intervals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    /// Confidence level (e.g., 0.95 for 95%)
    pub level: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self { level: 0.95 }
    }
}

impl ConfidenceConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.level > 0.0 && self.level < 1.0) {
            return Err(ForecastError::InvalidParameter {
                name: "confidence_level".to_string(),
                reason: format!("must be in (0, 1), got {}", self.level),
            });
        }
        Ok(())
    }
}

/// Configuration for an autoregressive integrated model without MA terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArimaConfig {
    /// AR order (p)
    pub p: usize,
    /// Differencing order (d)
    pub d: usize,
    /// Keep the mean of the differenced series as a drift term.
    /// Off by default: with d >= 1 the forecast has no deterministic trend.
    pub with_drift: bool,
    pub confidence: ConfidenceConfig,
}

impl Default for ArimaConfig {
    fn default() -> Self {
        Self {
            p: 5,
            d: 1,
            with_drift: false,
            confidence: ConfidenceConfig::default(),
        }
    }
}

impl ArimaConfig {
    /// Create a configuration with the given orders and a 95% interval.
    pub fn new(p: usize, d: usize) -> Self {
        Self {
            p,
            d,
            ..Self::default()
        }
    }

    /// Set the interval confidence level.
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence.level = level;
        self
    }

    /// Enable or disable the drift term.
    pub fn with_drift(mut self, with_drift: bool) -> Self {
        self.with_drift = with_drift;
        self
    }

    /// Shortest series the configured model can be fitted on.
    pub fn min_observations(&self) -> usize {
        self.p + self.d + 10
    }

    pub fn validate(&self) -> Result<()> {
        if self.p > MAX_AR_ORDER {
            return Err(ForecastError::InvalidParameter {
                name: "p".to_string(),
                reason: format!("AR order must be <= {}", MAX_AR_ORDER),
            });
        }
        if self.d > MAX_DIFFERENCE_ORDER {
            return Err(ForecastError::InvalidParameter {
                name: "d".to_string(),
                reason: format!("Differencing order must be <= {}", MAX_DIFFERENCE_ORDER),
            });
        }
        self.confidence.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_arima_510() {
        let config = ArimaConfig::default();
        assert_eq!((config.p, config.d), (5, 1));
        assert_eq!(config.confidence.level, 0.95);
        assert!(!config.with_drift);
        assert_eq!(config.min_observations(), 16);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_order_limits() {
        assert!(ArimaConfig::new(11, 0).validate().is_err());
        assert!(ArimaConfig::new(1, 3).validate().is_err());
        assert!(ArimaConfig::new(0, 0).validate().is_ok());
    }

    #[test]
    fn test_confidence_level_bounds() {
        for level in [0.0, 1.0, -0.5, f64::NAN] {
            let config = ArimaConfig::default().with_confidence_level(level);
            assert!(
                matches!(
                    config.validate(),
                    Err(ForecastError::InvalidParameter { ref name, .. }) if name == "confidence_level"
                ),
                "level {} accepted",
                level
            );
        }
        assert!(ArimaConfig::default()
            .with_confidence_level(0.8)
            .validate()
            .is_ok());
    }
}
