//! One step of the block time forecast

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Forecast for one hour past the historical window.
///
/// `ci_lower <= predicted_block_time <= ci_upper` holds for every point a
/// pipeline emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: NaiveDateTime,
    pub predicted_block_time: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

impl ForecastPoint {
    pub fn new(timestamp: NaiveDateTime, predicted: f64, lower: f64, upper: f64) -> Self {
        Self {
            timestamp,
            predicted_block_time: predicted,
            ci_lower: lower,
            ci_upper: upper,
        }
    }
}
