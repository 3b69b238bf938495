//! Environment overrides for [`PipelineConfig`].
//!
//! | Variable                      | Field                          |
//! |-------------------------------|--------------------------------|
//! | `NETPULSE_SEED`               | `seed`                         |
//! | `NETPULSE_WINDOW`             | `window`                       |
//! | `NETPULSE_HORIZON`            | `horizon`                      |
//! | `NETPULSE_CONTAMINATION`      | `contamination`                |
//! | `NETPULSE_ESTIMATORS`         | `n_estimators`                 |
//! | `NETPULSE_SENTIMENT_DAYS`     | `sentiment_days`               |
//! | `NETPULSE_BLOCK_TIME_CEILING` | `thresholds.block_time_ceiling`|
//! | `NETPULSE_UPTIME_FLOOR`       | `thresholds.uptime_floor`      |
//! | `NETPULSE_UPTIME_TAIL`        | `thresholds.uptime_tail`       |
//! | `NETPULSE_SENTIMENT_FLOOR`    | `thresholds.sentiment_floor`   |
//! | `NETPULSE_SOURCES`            | `filter.sources` (comma list)  |
//! | `NETPULSE_TOPICS`             | `filter.topics` (comma list)   |

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use data_spi::{Source, Topic};
use pipeline_spi::ConfigError;

use crate::config::PipelineConfig;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "NETPULSE_";

struct EnvReader<F> {
    lookup: F,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn raw(&self, key: &str) -> Option<(String, String)> {
        let var = format!("{}{}", ENV_PREFIX, key);
        let value = (self.lookup)(&var)?;
        let value = value.trim().to_string();
        if value.is_empty() {
            None
        } else {
            Some((var, value))
        }
    }

    fn parse<T>(&self, key: &str, target: &mut T) -> Result<(), ConfigError>
    where
        T: FromStr,
        T::Err: Display,
    {
        if let Some((var, value)) = self.raw(key) {
            *target = value.parse().map_err(|e: T::Err| ConfigError::InvalidEnv {
                var,
                value: value.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }

    fn parse_set<T>(&self, key: &str) -> Result<Option<BTreeSet<T>>, ConfigError>
    where
        T: FromStr + Ord,
        T::Err: Display,
    {
        let Some((var, value)) = self.raw(key) else {
            return Ok(None);
        };
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(|item| {
                item.parse().map_err(|e: T::Err| ConfigError::InvalidEnv {
                    var: var.clone(),
                    value: value.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<BTreeSet<T>, ConfigError>>()
            .map(Some)
    }
}

impl PipelineConfig {
    /// Defaults overridden by `NETPULSE_*` environment variables, validated.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvReader { lookup };
        let mut config = Self::default();

        env.parse("SEED", &mut config.seed)?;
        env.parse("WINDOW", &mut config.window)?;
        env.parse("HORIZON", &mut config.horizon)?;
        env.parse("CONTAMINATION", &mut config.contamination)?;
        env.parse("ESTIMATORS", &mut config.n_estimators)?;
        env.parse("SENTIMENT_DAYS", &mut config.sentiment_days)?;

        let t = &mut config.thresholds;
        env.parse("BLOCK_TIME_CEILING", &mut t.block_time_ceiling)?;
        env.parse("UPTIME_FLOOR", &mut t.uptime_floor)?;
        env.parse("UPTIME_TAIL", &mut t.uptime_tail)?;
        env.parse("SENTIMENT_FLOOR", &mut t.sentiment_floor)?;

        if let Some(sources) = env.parse_set::<Source>("SOURCES")? {
            config.filter.sources = Some(sources);
        }
        if let Some(topics) = env.parse_set::<Topic>("TOPICS")? {
            config.filter.topics = Some(topics);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = PipelineConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = PipelineConfig::from_lookup(lookup(&[
            ("NETPULSE_SEED", "7"),
            ("NETPULSE_WINDOW", " 240 "),
            ("NETPULSE_HORIZON", "12"),
            ("NETPULSE_UPTIME_FLOOR", "97.5"),
            ("NETPULSE_SOURCES", "x, github"),
            ("NETPULSE_TOPICS", "staking"),
        ]))
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.window, 240);
        assert_eq!(config.horizon, 12);
        assert_eq!(config.thresholds.uptime_floor, 97.5);
        let sources = config.filter.sources.unwrap();
        assert!(sources.contains(&Source::X) && sources.contains(&Source::GitHub));
        assert_eq!(sources.len(), 2);
        assert_eq!(config.filter.topics.unwrap().len(), 1);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = PipelineConfig::from_lookup(lookup(&[("NETPULSE_SEED", "  ")])).unwrap();
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_unparsable_value() {
        let result = PipelineConfig::from_lookup(lookup(&[("NETPULSE_HORIZON", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnv { ref var, ref value, .. })
                if var == "NETPULSE_HORIZON" && value == "soon"
        ));
    }

    #[test]
    fn test_unknown_topic() {
        let result = PipelineConfig::from_lookup(lookup(&[("NETPULSE_TOPICS", "staking,nfts")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnv { .. })));
    }

    #[test]
    fn test_overrides_are_validated() {
        let result = PipelineConfig::from_lookup(lookup(&[("NETPULSE_HORIZON", "0")]));
        assert_eq!(
            result,
            Err(ConfigError::invalid("horizon", "must be at least 1"))
        );
    }
}
