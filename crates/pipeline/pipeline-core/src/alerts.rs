//! Threshold alert evaluation.
//!
//! Both evaluators are stateless and use strict comparisons: a mean sitting
//! exactly on a threshold raises nothing.

use pipeline_api::Thresholds;
use pipeline_spi::Alert;

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Alerts for a block time forecast and the most recent uptime samples.
///
/// `recent_uptime` should already be cut to the configured tail.
pub fn evaluate_metrics_alerts(
    forecast: &[f64],
    recent_uptime: &[f64],
    thresholds: &Thresholds,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(predicted) = mean(forecast) {
        if predicted > thresholds.block_time_ceiling {
            alerts.push(Alert::error(format!(
                "block time may exceed {} seconds.",
                thresholds.block_time_ceiling
            )));
        }
    }
    if let Some(uptime) = mean(recent_uptime) {
        if uptime < thresholds.uptime_floor {
            alerts.push(Alert::warning("uptime below threshold."));
        }
    }
    alerts
}

/// Alert when mean daily sentiment falls below the floor.
pub fn evaluate_sentiment_alerts(daily_sentiment: &[f64], thresholds: &Thresholds) -> Vec<Alert> {
    match mean(daily_sentiment) {
        Some(sentiment) if sentiment < thresholds.sentiment_floor => {
            vec![Alert::error("high negative sentiment detected.")]
        }
        _ => Vec::new(),
    }
}

/// Last `tail` values of a series, or all of it when shorter.
pub(crate) fn tail(values: &[f64], tail: usize) -> &[f64] {
    &values[values.len().saturating_sub(tail)..]
}
