//! Confidence interval construction
//!
//! Turns a point forecast and per-step standard errors into a symmetric
//! normal-theory interval.

use forecast_spi::{ConfidenceInterval, ForecastError, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Build a symmetric interval `forecast ± z · se` for each step.
///
/// `std_errors` must have one entry per forecast step; extra entries are
/// ignored and missing ones shorten the bounds, which `validate` rejects.
pub fn from_standard_errors(
    forecast: Vec<f64>,
    std_errors: &[f64],
    confidence_level: f64,
) -> Result<ConfidenceInterval> {
    let z = z_score(confidence_level)?;

    let lower = forecast
        .iter()
        .zip(std_errors.iter())
        .map(|(&f, &se)| f - z * se)
        .collect();

    let upper = forecast
        .iter()
        .zip(std_errors.iter())
        .map(|(&f, &se)| f + z * se)
        .collect();

    Ok(ConfidenceInterval::new(forecast, lower, upper, confidence_level))
}

/// Two-sided standard normal quantile: `z` with `P(|Z| <= z) = confidence_level`.
pub fn z_score(confidence_level: f64) -> Result<f64> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(ForecastError::InvalidParameter {
            name: "confidence_level".to_string(),
            reason: format!("must be in (0, 1), got {}", confidence_level),
        });
    }
    let normal =
        Normal::new(0.0, 1.0).map_err(|e| ForecastError::NumericalError(e.to_string()))?;
    Ok(normal.inverse_cdf(0.5 + confidence_level / 2.0))
}
