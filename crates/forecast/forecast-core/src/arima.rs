//! ARIMA(p, d, 0) forecaster
//!
//! The series is differenced `d` times, an AR(p) model is fitted to the
//! result by solving the Yule-Walker equations with the Levinson-Durbin
//! recursion, and forecasts are integrated back to the original scale.
//!
//! Prediction intervals come from the ψ-weight (MA(∞)) representation of
//! the integrated model:
//!
//! ```text
//! Var(e_h) = σ² · Σ_{j=0}^{h-1} Ψ_j²
//! ```
//!
//! where ψ are the AR impulse responses and Ψ their `d`-fold cumulative
//! sums.
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::{Arima, Forecaster};
//!
//! let data: Vec<f64> = (0..60).map(|x| 6.0 + (x as f64 * 0.7).sin()).collect();
//! let ci = Arima::default().forecast(&data, 24).unwrap();
//! assert_eq!(ci.len(), 24);
//! ```

use forecast_api::ArimaConfig;
use forecast_spi::{ConfidenceInterval, ForecastError, Forecaster, Result};

use crate::confidence::from_standard_errors;

const VARIANCE_EPSILON: f64 = 1e-10;

/// Apply differencing `order` times.
pub fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

/// Solve the Yule-Walker equations for AR(p) coefficients.
///
/// `autocov` holds lags `0..=p`. Returns the coefficients `φ_1..φ_p` and
/// the innovation variance of the final order. A zero-variance input
/// yields all-zero coefficients.
pub fn levinson_durbin(autocov: &[f64], p: usize) -> (Vec<f64>, f64) {
    let mut phi = vec![0.0; p];
    let mut error = autocov.first().copied().unwrap_or(0.0);
    if p == 0 || autocov.len() <= p || error.abs() < VARIANCE_EPSILON {
        return (phi, error.max(0.0));
    }

    for k in 0..p {
        let mut acc = autocov[k + 1];
        for j in 0..k {
            acc -= phi[j] * autocov[k - j];
        }
        let reflection = acc / error;

        let previous = phi.clone();
        phi[k] = reflection;
        for j in 0..k {
            phi[j] = previous[j] - reflection * previous[k - 1 - j];
        }

        error *= 1.0 - reflection * reflection;
        if error < VARIANCE_EPSILON {
            break;
        }
    }

    (phi, error.max(0.0))
}

/// Biased sample autocovariance of `data` around `center` for lags `0..=max_lag`.
fn autocovariance(data: &[f64], center: f64, max_lag: usize) -> Vec<f64> {
    let n = data.len() as f64;
    (0..=max_lag)
        .map(|k| {
            data.iter()
                .skip(k)
                .zip(data.iter())
                .map(|(a, b)| (a - center) * (b - center))
                .sum::<f64>()
                / n
        })
        .collect()
}

/// ARIMA forecaster configured by [`ArimaConfig`]; defaults to ARIMA(5,1,0)
/// with 95% intervals.
#[derive(Debug, Clone, Default)]
pub struct Arima {
    config: ArimaConfig,
}

impl Arima {
    /// Create a forecaster, validating the orders and confidence level.
    pub fn new(config: ArimaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ArimaConfig {
        &self.config
    }

    /// Fit the model to `series`.
    pub fn fit(&self, series: &[f64]) -> Result<FittedArima> {
        let required = self.config.min_observations();
        if series.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: series.len(),
            });
        }
        if let Some(i) = series.iter().position(|x| !x.is_finite()) {
            return Err(ForecastError::InvalidData(format!(
                "value at index {} is not finite",
                i
            )));
        }

        let p = self.config.p;
        let d = self.config.d;

        // Last value of each differencing level, for integration.
        let mut anchors = Vec::with_capacity(d);
        let mut level = series.to_vec();
        for _ in 0..d {
            anchors.push(level[level.len() - 1]);
            level = difference(&level, 1);
        }
        let differenced = level;

        let n = differenced.len();
        let drift = if self.config.with_drift {
            differenced.iter().sum::<f64>() / n as f64
        } else {
            0.0
        };
        let centered: Vec<f64> = differenced.iter().map(|x| x - drift).collect();

        let autocov = autocovariance(&centered, 0.0, p);
        let (ar_coeffs, _) = levinson_durbin(&autocov, p);

        let residuals: Vec<f64> = (p..n)
            .map(|t| {
                let prediction: f64 = ar_coeffs
                    .iter()
                    .enumerate()
                    .map(|(j, phi)| phi * centered[t - j - 1])
                    .sum();
                centered[t] - prediction
            })
            .collect();
        let sigma2 = residuals.iter().map(|e| e * e).sum::<f64>() / residuals.len() as f64;
        if !sigma2.is_finite() {
            return Err(ForecastError::NumericalError(
                "residual variance is not finite".to_string(),
            ));
        }

        tracing::debug!(p, d, sigma2, coefficients = ?ar_coeffs, "fitted arima");

        Ok(FittedArima {
            d,
            ar_coeffs,
            drift,
            sigma2,
            history: centered,
            anchors,
        })
    }
}

/// An ARIMA model fitted to one series.
#[derive(Debug, Clone)]
pub struct FittedArima {
    d: usize,
    ar_coeffs: Vec<f64>,
    drift: f64,
    sigma2: f64,
    /// Differenced series minus drift
    history: Vec<f64>,
    anchors: Vec<f64>,
}

impl FittedArima {
    /// AR coefficients `φ_1..φ_p`.
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coeffs
    }

    /// One-step innovation variance estimated from in-sample residuals.
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// Point forecast on the original scale.
    pub fn predict(&self, steps: usize) -> Vec<f64> {
        let p = self.ar_coeffs.len();
        let mut extended = self.history.clone();
        for _ in 0..steps {
            let len = extended.len();
            let next: f64 = (0..p.min(len))
                .map(|j| self.ar_coeffs[j] * extended[len - j - 1])
                .sum();
            extended.push(next);
        }

        let mut forecast: Vec<f64> = extended[self.history.len()..]
            .iter()
            .map(|x| x + self.drift)
            .collect();

        for anchor in self.anchors.iter().rev() {
            let mut level = *anchor;
            for value in forecast.iter_mut() {
                level += *value;
                *value = level;
            }
        }
        forecast
    }

    /// MA(∞) weights of the integrated model for lags `0..steps`.
    pub fn psi_weights(&self, steps: usize) -> Vec<f64> {
        let mut psi = vec![0.0; steps];
        for j in 0..steps {
            psi[j] = if j == 0 {
                1.0
            } else {
                self.ar_coeffs
                    .iter()
                    .take(j)
                    .enumerate()
                    .map(|(i, phi)| phi * psi[j - i - 1])
                    .sum()
            };
        }

        for _ in 0..self.d {
            let mut total = 0.0;
            for weight in psi.iter_mut() {
                total += *weight;
                *weight = total;
            }
        }
        psi
    }

    /// Forecast standard error per step.
    pub fn std_errors(&self, steps: usize) -> Vec<f64> {
        let mut cumulative = 0.0;
        self.psi_weights(steps)
            .into_iter()
            .map(|w| {
                cumulative += w * w;
                (self.sigma2 * cumulative).sqrt()
            })
            .collect()
    }
}

impl Forecaster for Arima {
    fn forecast(&self, series: &[f64], horizon: usize) -> Result<ConfidenceInterval> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter {
                name: "horizon".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let fitted = self.fit(series)?;
        let interval = from_standard_errors(
            fitted.predict(horizon),
            &fitted.std_errors(horizon),
            self.config.confidence.level,
        )?;
        interval.validate(horizon)?;
        Ok(interval)
    }

    fn min_observations(&self) -> usize {
        self.config.min_observations()
    }

    fn name(&self) -> &str {
        "arima"
    }
}
