//! Pipeline configuration.

use std::fmt::Display;

use anomaly_api::IsolationForestConfig;
use data_api::{
    reference_start, MetricsGeneratorConfig, NetworkSeriesConfig, PostGeneratorConfig,
};
use forecast_api::ArimaConfig;
use pipeline_spi::ConfigError;
use sentiment_spi::PostFilter;
use serde::{Deserialize, Serialize};

use crate::thresholds::Thresholds;

fn nested<E: Display>(section: &'static str) -> impl FnOnce(E) -> ConfigError {
    move |e| ConfigError::invalid(section, e.to_string())
}

/// Everything a pipeline run depends on.
///
/// A report is a pure function of this value: the seed drives every
/// random draw, and the remaining fields fix windows, models and alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Seed for the generators and the isolation forest
    pub seed: u64,
    /// Number of hourly metric samples
    pub window: usize,
    /// Forecast steps past the last sample
    pub horizon: usize,
    /// Fraction of samples the classifier flags
    pub contamination: f64,
    /// Isolation trees per forest
    pub n_estimators: usize,
    /// Length of the sentiment calendar in days
    pub sentiment_days: usize,
    pub thresholds: Thresholds,
    /// Source/topic filter for the sentiment aggregates
    #[serde(default)]
    pub filter: PostFilter,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            window: 720,
            horizon: 24,
            contamination: 0.05,
            n_estimators: 100,
            sentiment_days: 30,
            thresholds: Thresholds::default(),
            filter: PostFilter::all(),
        }
    }
}

impl PipelineConfig {
    /// Metrics generator settings for this window.
    pub fn metrics_generator(&self) -> MetricsGeneratorConfig {
        let start = reference_start().and_hms_opt(0, 0, 0).unwrap_or_default();
        MetricsGeneratorConfig::new(start, self.window)
    }

    pub fn isolation_forest(&self) -> IsolationForestConfig {
        IsolationForestConfig::new(self.contamination, self.seed).with_estimators(self.n_estimators)
    }

    pub fn arima(&self) -> ArimaConfig {
        ArimaConfig::default()
    }

    pub fn post_generator(&self) -> PostGeneratorConfig {
        PostGeneratorConfig {
            days: self.sentiment_days,
            ..PostGeneratorConfig::default()
        }
    }

    /// Network overlay over the same calendar as the posts.
    pub fn network_series(&self) -> NetworkSeriesConfig {
        NetworkSeriesConfig::for_calendar(reference_start(), self.sentiment_days)
    }

    /// Check every field, failing on the first invalid one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window == 0 {
            return Err(ConfigError::invalid("window", "must be at least 1"));
        }
        if self.horizon == 0 {
            return Err(ConfigError::invalid("horizon", "must be at least 1"));
        }
        if self.sentiment_days == 0 {
            return Err(ConfigError::invalid("sentiment_days", "must be at least 1"));
        }
        self.thresholds.validate()?;
        if self.window < self.thresholds.uptime_tail {
            return Err(ConfigError::invalid(
                "window",
                format!(
                    "must cover the uptime tail of {} samples, got {}",
                    self.thresholds.uptime_tail, self.window
                ),
            ));
        }

        let arima = self.arima();
        arima.validate().map_err(nested("arima"))?;
        if self.window < arima.min_observations() {
            return Err(ConfigError::invalid(
                "window",
                format!(
                    "forecaster needs at least {} samples, got {}",
                    arima.min_observations(),
                    self.window
                ),
            ));
        }

        self.isolation_forest()
            .validate()
            .map_err(nested("isolation_forest"))?;
        self.metrics_generator()
            .validate()
            .map_err(nested("metrics_generator"))?;
        self.post_generator()
            .validate()
            .map_err(nested("post_generator"))?;
        self.network_series()
            .validate()
            .map_err(nested("network_series"))?;
        Ok(())
    }
}

/// Builder for PipelineConfig.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Create a builder starting from the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn window(mut self, window: usize) -> Self {
        self.config.window = window;
        self
    }

    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = horizon;
        self
    }

    pub fn contamination(mut self, contamination: f64) -> Self {
        self.config.contamination = contamination;
        self
    }

    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.config.n_estimators = n_estimators;
        self
    }

    pub fn sentiment_days(mut self, days: usize) -> Self {
        self.config.sentiment_days = days;
        self
    }

    pub fn thresholds(mut self, thresholds: Thresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    pub fn filter(mut self, filter: PostFilter) -> Self {
        self.config.filter = filter;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<PipelineConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_reference_run() {
        let config = PipelineConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.window, 720);
        assert_eq!(config.horizon, 24);
        assert_eq!(config.contamination, 0.05);
        assert_eq!(config.sentiment_days, 30);
        assert!(config.filter.is_identity());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_configs() {
        let config = PipelineConfigBuilder::new()
            .seed(7)
            .window(100)
            .sentiment_days(10)
            .build()
            .unwrap();
        assert_eq!(config.metrics_generator().points, 100);
        assert_eq!(
            config.metrics_generator().start.to_string(),
            "2023-10-01 00:00:00"
        );
        assert_eq!(config.isolation_forest().seed, 7);
        assert_eq!(config.post_generator().days, 10);
        assert_eq!(config.network_series().days, 10);
        assert_eq!((config.arima().p, config.arima().d), (5, 1));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let result = PipelineConfigBuilder::new().horizon(0).build();
        assert_eq!(
            result,
            Err(ConfigError::invalid("horizon", "must be at least 1"))
        );
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(PipelineConfigBuilder::new().window(0).build().is_err());
    }

    #[test]
    fn test_window_must_cover_uptime_tail() {
        let result = PipelineConfigBuilder::new().window(20).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { ref name, ref reason })
                if name == "window" && reason.contains("uptime tail")
        ));
    }

    #[test]
    fn test_window_must_cover_forecaster_minimum() {
        let thresholds = Thresholds {
            uptime_tail: 4,
            ..Thresholds::default()
        };
        let result = PipelineConfigBuilder::new()
            .thresholds(thresholds)
            .window(10)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { ref reason, .. }) if reason.contains("forecaster")
        ));
    }

    #[test]
    fn test_contamination_bounds() {
        for contamination in [0.0, 0.6, f64::NAN] {
            let result = PipelineConfigBuilder::new()
                .contamination(contamination)
                .build();
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidParameter { ref name, .. }) if name == "isolation_forest"
                ),
                "contamination {} accepted",
                contamination
            );
        }
        assert!(PipelineConfigBuilder::new().contamination(0.5).build().is_ok());
    }

    #[test]
    fn test_zero_sentiment_days_rejected() {
        assert!(PipelineConfigBuilder::new().sentiment_days(0).build().is_err());
    }

    #[test]
    fn test_serde_default_filter() {
        let mut json = serde_json::to_value(PipelineConfig::default()).unwrap();
        json.as_object_mut().unwrap().remove("filter");
        let config: PipelineConfig = serde_json::from_value(json).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }
}
