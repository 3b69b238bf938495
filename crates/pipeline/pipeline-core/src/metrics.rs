//! Network metrics pipeline: generate, classify, forecast, alert.

use anomaly_core::IsolationForest;
use anomaly_spi::Classifier;
use chrono::{Duration, NaiveDateTime};
use data_core::{seeded_rng, MetricsGenerator};
use data_spi::{block_times, validator_uptimes, DataError, MetricSample, SyntheticSource};
use forecast_core::Arima;
use forecast_spi::Forecaster;
use pipeline_api::PipelineConfig;
use pipeline_spi::{ForecastPoint, MetricsReport, ReportPipeline, Result};

use crate::alerts::{evaluate_metrics_alerts, tail};

/// Metrics pipeline over a classifier and a forecaster.
///
/// The classifier is cloned before every run, so `run` never mutates the
/// pipeline and two runs with the same configuration give the same report.
#[derive(Debug, Clone)]
pub struct MetricsPipeline<C = IsolationForest, F = Arima>
where
    C: Classifier + Clone,
    F: Forecaster,
{
    config: PipelineConfig,
    classifier: C,
    forecaster: F,
}

impl MetricsPipeline {
    /// Pipeline with the isolation forest and ARIMA derived from `config`.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let classifier = IsolationForest::new(config.isolation_forest())?;
        let forecaster = Arima::new(config.arima())?;
        Ok(Self {
            config,
            classifier,
            forecaster,
        })
    }
}

impl<C, F> MetricsPipeline<C, F>
where
    C: Classifier + Clone,
    F: Forecaster,
{
    /// Pipeline with caller-supplied components.
    pub fn with_components(config: PipelineConfig, classifier: C, forecaster: F) -> Self {
        Self {
            config,
            classifier,
            forecaster,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Flag anomalous samples in place and return how many were flagged.
    fn classify(&self, samples: &mut [MetricSample]) -> Result<usize> {
        let rows: Vec<Vec<f64>> = samples.iter().map(|s| s.features().to_vec()).collect();
        let mut classifier = self.classifier.clone();
        let result = classifier.fit_detect(&rows)?;

        if result.is_anomaly.len() != samples.len() {
            return Err(DataError::LengthMismatch {
                expected: samples.len(),
                actual: result.is_anomaly.len(),
            }
            .into());
        }
        for (sample, flag) in samples.iter_mut().zip(&result.is_anomaly) {
            sample.is_anomaly = *flag;
        }

        tracing::debug!(
            classifier = classifier.name(),
            threshold = result.threshold,
            "classified samples"
        );
        Ok(result.anomaly_count())
    }

    /// Forecast block time over the horizon, one point per hour after `last`.
    fn forecast(
        &self,
        samples: &[MetricSample],
        last: NaiveDateTime,
    ) -> Result<(Vec<ForecastPoint>, f64)> {
        let horizon = self.config.horizon;
        let interval = self.forecaster.forecast(&block_times(samples), horizon)?;
        interval.validate(horizon)?;

        let points = (0..horizon)
            .map(|h| -> Result<ForecastPoint> {
                let timestamp = last
                    .checked_add_signed(Duration::hours(h as i64 + 1))
                    .ok_or_else(|| DataError::InvalidParameter {
                        name: "horizon".to_string(),
                        reason: format!("timestamp overflow at step {}", h + 1),
                    })?;
                Ok(ForecastPoint::new(
                    timestamp,
                    interval.forecast[h],
                    interval.lower[h],
                    interval.upper[h],
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            forecaster = self.forecaster.name(),
            mean = interval.mean_forecast(),
            "forecast block time"
        );
        Ok((points, interval.confidence_level))
    }
}

impl<C, F> ReportPipeline for MetricsPipeline<C, F>
where
    C: Classifier + Clone,
    F: Forecaster,
{
    type Report = MetricsReport;

    fn run(&self) -> Result<MetricsReport> {
        let config = &self.config;
        config.validate()?;
        tracing::info!(seed = config.seed, window = config.window, "metrics pipeline started");

        let generator = MetricsGenerator::new(config.metrics_generator());
        let mut rng = seeded_rng(config.seed);
        let samples = generator.generate(&mut rng)?;
        self.report(samples)
    }

    fn name(&self) -> &str {
        "metrics"
    }
}

impl<C, F> MetricsPipeline<C, F>
where
    C: Classifier + Clone,
    F: Forecaster,
{
    /// Classify, forecast and alert over caller-supplied samples instead of
    /// the generated window. Every feature must be finite.
    pub fn run_with_samples(&self, samples: Vec<MetricSample>) -> Result<MetricsReport> {
        self.config.validate()?;
        self.report(samples)
    }

    fn report(&self, mut samples: Vec<MetricSample>) -> Result<MetricsReport> {
        let config = &self.config;
        for (row, sample) in samples.iter().enumerate() {
            sample.check_finite(row)?;
        }
        let last = samples
            .last()
            .map(|s| s.timestamp)
            .ok_or_else(|| DataError::EmptyWindow(self.name().to_string()))?;

        let anomaly_count = self.classify(&mut samples)?;
        let (forecast, confidence_level) = self.forecast(&samples, last)?;

        let predicted: Vec<f64> = forecast.iter().map(|p| p.predicted_block_time).collect();
        let uptimes = validator_uptimes(&samples);
        let alerts = evaluate_metrics_alerts(
            &predicted,
            tail(&uptimes, config.thresholds.uptime_tail),
            &config.thresholds,
        );
        for alert in &alerts {
            tracing::warn!(severity = %alert.severity, "{}", alert.message);
        }

        let anomalies: Vec<MetricSample> =
            samples.iter().filter(|s| s.is_anomaly).cloned().collect();
        tracing::info!(
            anomalies = anomaly_count,
            forecast_points = forecast.len(),
            alerts = alerts.len(),
            "metrics pipeline finished"
        );

        Ok(MetricsReport {
            historical_series: samples,
            forecast,
            alerts,
            anomalies,
            anomaly_count,
            confidence_level,
        })
    }
}
