//! Network metrics report

use data_spi::MetricSample;
use serde::{Deserialize, Serialize};

use super::{Alert, ForecastPoint};

/// Output of one metrics pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Every generated sample with its anomaly flag
    pub historical_series: Vec<MetricSample>,
    pub forecast: Vec<ForecastPoint>,
    pub alerts: Vec<Alert>,
    /// The flagged samples, in time order
    pub anomalies: Vec<MetricSample>,
    pub anomaly_count: usize,
    /// Confidence level of the forecast interval
    pub confidence_level: f64,
}

impl MetricsReport {
    /// Fraction of samples flagged as anomalous.
    pub fn anomaly_rate(&self) -> f64 {
        if self.historical_series.is_empty() {
            return 0.0;
        }
        self.anomaly_count as f64 / self.historical_series.len() as f64
    }

    /// Mean predicted block time over the horizon.
    pub fn forecast_mean(&self) -> f64 {
        if self.forecast.is_empty() {
            return 0.0;
        }
        self.forecast
            .iter()
            .map(|p| p.predicted_block_time)
            .sum::<f64>()
            / self.forecast.len() as f64
    }
}
