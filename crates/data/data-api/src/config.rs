//! Synthetic generator configuration types.

use chrono::{NaiveDate, NaiveDateTime};
use data_spi::{DataError, Result};
use serde::{Deserialize, Serialize};

/// First day of the reference window (2023-10-01).
pub fn reference_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 1).unwrap_or_default()
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DataError::InvalidParameter {
            name: name.to_string(),
            reason: format!("must be a positive finite number, got {}", value),
        })
    }
}

fn finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DataError::InvalidParameter {
            name: name.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}

fn probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(DataError::InvalidParameter {
            name: name.to_string(),
            reason: format!("must be in [0, 1], got {}", value),
        })
    }
}

// ============================================================================
// Metrics
// ============================================================================

/// Configuration for the hourly network metrics generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsGeneratorConfig {
    /// Timestamp of the first sample
    pub start: NaiveDateTime,
    /// Number of hourly samples
    pub points: usize,
    /// Mean block time in seconds
    pub block_time_base: f64,
    /// Standard deviation of block time noise
    pub block_time_noise: f64,
    /// Amplitude of the diurnal block time sinusoid
    pub diurnal_amplitude: f64,
    /// Period of the diurnal term, in samples
    pub diurnal_period: usize,
    /// Mean validator uptime in percent
    pub uptime_base: f64,
    /// Standard deviation of uptime noise
    pub uptime_noise: f64,
    /// Uptime subtracted when a penalty is drawn
    pub uptime_penalty: f64,
    /// Probability of a penalty per sample
    pub penalty_probability: f64,
    /// Starting node count
    pub node_count_base: f64,
    /// Standard deviation of each random-walk increment
    pub node_count_step: f64,
}

impl Default for MetricsGeneratorConfig {
    fn default() -> Self {
        Self {
            start: reference_start().and_hms_opt(0, 0, 0).unwrap_or_default(),
            points: 720,
            block_time_base: 6.0,
            block_time_noise: 0.5,
            diurnal_amplitude: 0.1,
            diurnal_period: 24,
            uptime_base: 98.0,
            uptime_noise: 1.0,
            uptime_penalty: 0.5,
            penalty_probability: 0.05,
            node_count_base: 1000.0,
            node_count_step: 5.0,
        }
    }
}

impl MetricsGeneratorConfig {
    /// Create a configuration with the reference constants and the given window.
    pub fn new(start: NaiveDateTime, points: usize) -> Self {
        Self {
            start,
            points,
            ..Self::default()
        }
    }

    /// Check every parameter, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.points == 0 {
            return Err(DataError::EmptyWindow(
                "metrics window must contain at least one point".to_string(),
            ));
        }
        if self.diurnal_period == 0 {
            return Err(DataError::InvalidParameter {
                name: "diurnal_period".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        finite("block_time_base", self.block_time_base)?;
        positive("block_time_noise", self.block_time_noise)?;
        finite("diurnal_amplitude", self.diurnal_amplitude)?;
        finite("uptime_base", self.uptime_base)?;
        positive("uptime_noise", self.uptime_noise)?;
        finite("uptime_penalty", self.uptime_penalty)?;
        probability("penalty_probability", self.penalty_probability)?;
        finite("node_count_base", self.node_count_base)?;
        positive("node_count_step", self.node_count_step)?;
        Ok(())
    }
}

/// Builder for MetricsGeneratorConfig.
#[derive(Debug, Default)]
pub struct MetricsGeneratorConfigBuilder {
    start: Option<NaiveDateTime>,
    points: Option<usize>,
    block_time_base: Option<f64>,
    uptime_base: Option<f64>,
    penalty_probability: Option<f64>,
    node_count_base: Option<f64>,
}

impl MetricsGeneratorConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first timestamp.
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the number of hourly points.
    pub fn points(mut self, points: usize) -> Self {
        self.points = Some(points);
        self
    }

    /// Set the mean block time.
    pub fn block_time_base(mut self, value: f64) -> Self {
        self.block_time_base = Some(value);
        self
    }

    /// Set the mean validator uptime.
    pub fn uptime_base(mut self, value: f64) -> Self {
        self.uptime_base = Some(value);
        self
    }

    /// Set the per-sample uptime penalty probability.
    pub fn penalty_probability(mut self, value: f64) -> Self {
        self.penalty_probability = Some(value);
        self
    }

    /// Set the starting node count.
    pub fn node_count_base(mut self, value: f64) -> Self {
        self.node_count_base = Some(value);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<MetricsGeneratorConfig> {
        let defaults = MetricsGeneratorConfig::default();
        let config = MetricsGeneratorConfig {
            start: self.start.unwrap_or(defaults.start),
            points: self.points.unwrap_or(defaults.points),
            block_time_base: self.block_time_base.unwrap_or(defaults.block_time_base),
            uptime_base: self.uptime_base.unwrap_or(defaults.uptime_base),
            penalty_probability: self
                .penalty_probability
                .unwrap_or(defaults.penalty_probability),
            node_count_base: self.node_count_base.unwrap_or(defaults.node_count_base),
            ..defaults
        };
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Posts
// ============================================================================

/// Configuration for the community post generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostGeneratorConfig {
    /// First calendar day
    pub start_date: NaiveDate,
    /// Calendar length in days
    pub days: usize,
    pub x_posts: usize,
    pub github_posts: usize,
    pub forum_posts: usize,
    /// Probability that an X post uses the positive template
    pub positive_probability: f64,
}

impl Default for PostGeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: reference_start(),
            days: 30,
            x_posts: 300,
            github_posts: 100,
            forum_posts: 200,
            positive_probability: 0.7,
        }
    }
}

impl PostGeneratorConfig {
    /// Total number of posts across all sources.
    pub fn total_posts(&self) -> usize {
        self.x_posts + self.github_posts + self.forum_posts
    }

    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(DataError::EmptyWindow(
                "post calendar must contain at least one day".to_string(),
            ));
        }
        if self.total_posts() == 0 {
            return Err(DataError::EmptyWindow(
                "post mix must contain at least one post".to_string(),
            ));
        }
        probability("positive_probability", self.positive_probability)
    }
}

// ============================================================================
// Network overlay
// ============================================================================

/// Configuration for the daily network series merged with sentiment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSeriesConfig {
    pub start_date: NaiveDate,
    pub days: usize,
    pub block_time_base: f64,
    pub block_time_noise: f64,
    pub node_count_base: f64,
    pub node_count_step: f64,
}

impl Default for NetworkSeriesConfig {
    fn default() -> Self {
        Self {
            start_date: reference_start(),
            days: 30,
            block_time_base: 6.0,
            block_time_noise: 0.5,
            node_count_base: 1000.0,
            node_count_step: 10.0,
        }
    }
}

impl NetworkSeriesConfig {
    /// Network series covering the same calendar as a post configuration.
    pub fn for_calendar(start_date: NaiveDate, days: usize) -> Self {
        Self {
            start_date,
            days,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.days == 0 {
            return Err(DataError::EmptyWindow(
                "network series must contain at least one day".to_string(),
            ));
        }
        finite("block_time_base", self.block_time_base)?;
        positive("block_time_noise", self.block_time_noise)?;
        finite("node_count_base", self.node_count_base)?;
        positive("node_count_step", self.node_count_step)
    }
}
