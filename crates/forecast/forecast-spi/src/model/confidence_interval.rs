//! Confidence interval model

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Point forecast with per-step interval bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Point forecast
    pub forecast: Vec<f64>,
    /// Lower bound of confidence interval
    pub lower: Vec<f64>,
    /// Upper bound of confidence interval
    pub upper: Vec<f64>,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    pub fn new(forecast: Vec<f64>, lower: Vec<f64>, upper: Vec<f64>, confidence_level: f64) -> Self {
        Self {
            forecast,
            lower,
            upper,
            confidence_level,
        }
    }

    /// Number of forecast steps.
    pub fn len(&self) -> usize {
        self.forecast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Mean of the point forecast; zero when empty.
    pub fn mean_forecast(&self) -> f64 {
        if self.forecast.is_empty() {
            return 0.0;
        }
        self.forecast.iter().sum::<f64>() / self.forecast.len() as f64
    }

    /// Check that all three sequences have `horizon` finite values and that
    /// every step satisfies `lower <= point <= upper`.
    pub fn validate(&self, horizon: usize) -> Result<()> {
        for (sequence, values) in [
            ("forecast", &self.forecast),
            ("lower", &self.lower),
            ("upper", &self.upper),
        ] {
            if values.len() != horizon {
                return Err(ForecastError::HorizonMismatch {
                    sequence,
                    expected: horizon,
                    actual: values.len(),
                });
            }
        }

        for step in 0..horizon {
            let (lo, point, hi) = (self.lower[step], self.forecast[step], self.upper[step]);
            if !(lo.is_finite() && point.is_finite() && hi.is_finite()) {
                return Err(ForecastError::NonFinite { step });
            }
            if lo > point || point > hi {
                return Err(ForecastError::InvertedBounds { step });
            }
        }
        Ok(())
    }
}
