//! Alert thresholds.

use pipeline_spi::ConfigError;
use serde::{Deserialize, Serialize};

/// Thresholds for the metrics and sentiment alerts.
///
/// All comparisons are strict: a value equal to its threshold never alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Error when the mean forecast block time is above this, in seconds
    pub block_time_ceiling: f64,
    /// Warning when the recent mean uptime is below this, in percent
    pub uptime_floor: f64,
    /// Error when the mean daily sentiment is below this
    pub sentiment_floor: f64,
    /// Number of trailing samples averaged for the uptime check
    pub uptime_tail: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            block_time_ceiling: 6.0,
            uptime_floor: 95.0,
            sentiment_floor: -0.2,
            uptime_tail: 24,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("block_time_ceiling", self.block_time_ceiling),
            ("uptime_floor", self.uptime_floor),
            ("sentiment_floor", self.sentiment_floor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::invalid(name, "must be finite"));
            }
        }
        if self.uptime_tail == 0 {
            return Err(ConfigError::invalid("uptime_tail", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.block_time_ceiling, 6.0);
        assert_eq!(t.uptime_floor, 95.0);
        assert_eq!(t.sentiment_floor, -0.2);
        assert_eq!(t.uptime_tail, 24);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let t = Thresholds {
            sentiment_floor: f64::NAN,
            ..Thresholds::default()
        };
        assert_eq!(
            t.validate(),
            Err(ConfigError::invalid("sentiment_floor", "must be finite"))
        );
    }

    #[test]
    fn test_zero_tail_rejected() {
        let t = Thresholds {
            uptime_tail: 0,
            ..Thresholds::default()
        };
        assert!(t.validate().is_err());
    }
}
