//! Hourly network metrics generator.

use std::f64::consts::PI;

use chrono::Duration;
use data_api::MetricsGeneratorConfig;
use data_spi::{DataError, MetricSample, Result, SyntheticSource};
use rand::Rng;
use rand_distr::Normal;

fn normal(name: &str, std_dev: f64) -> Result<Normal<f64>> {
    Normal::new(0.0, std_dev).map_err(|e| DataError::InvalidParameter {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Generates block time, validator uptime and node count samples.
///
/// - block time: base + N(0, σ) + amplitude · sin(2πi / period)
/// - uptime: base + N(0, σ) − penalty · Bernoulli(p)
/// - node count: base + cumulative sum of N(0, σ) increments
///
/// Columns are drawn one after another (block time noise, uptime noise,
/// penalties, node increments) so each column's stream is stable when
/// another column's parameters change.
#[derive(Debug, Clone, Default)]
pub struct MetricsGenerator {
    config: MetricsGeneratorConfig,
}

impl MetricsGenerator {
    pub fn new(config: MetricsGeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MetricsGeneratorConfig {
        &self.config
    }
}

impl SyntheticSource for MetricsGenerator {
    type Record = MetricSample;

    fn name(&self) -> &str {
        "network-metrics"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<MetricSample>> {
        let c = &self.config;
        c.validate()?;
        let n = c.points;

        let block_noise = normal("block_time_noise", c.block_time_noise)?;
        let uptime_noise = normal("uptime_noise", c.uptime_noise)?;
        let node_step = normal("node_count_step", c.node_count_step)?;

        let period = c.diurnal_period as f64;
        let block_time: Vec<f64> = (0..n)
            .map(|i| {
                let diurnal = c.diurnal_amplitude * (i as f64 * 2.0 * PI / period).sin();
                c.block_time_base + rng.sample(block_noise) + diurnal
            })
            .collect();

        let uptime_jitter: Vec<f64> = (0..n).map(|_| rng.sample(uptime_noise)).collect();
        let penalties: Vec<bool> = (0..n)
            .map(|_| rng.gen_bool(c.penalty_probability))
            .collect();

        let mut node_count = Vec::with_capacity(n);
        let mut walk = c.node_count_base;
        for _ in 0..n {
            walk += rng.sample(node_step);
            node_count.push(walk);
        }

        let mut samples = Vec::with_capacity(n);
        for i in 0..n {
            let offset = Duration::hours(i as i64);
            let timestamp = c.start.checked_add_signed(offset).ok_or_else(|| {
                DataError::InvalidParameter {
                    name: "start".to_string(),
                    reason: format!("timestamp overflow at point {}", i),
                }
            })?;
            let penalty = if penalties[i] { c.uptime_penalty } else { 0.0 };
            samples.push(MetricSample::new(
                timestamp,
                block_time[i],
                c.uptime_base + uptime_jitter[i] - penalty,
                node_count[i],
            ));
        }

        tracing::debug!(source = self.name(), points = n, "generated metric samples");
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded_rng;

    fn generate(seed: u64, config: MetricsGeneratorConfig) -> Vec<MetricSample> {
        MetricsGenerator::new(config)
            .generate(&mut seeded_rng(seed))
            .unwrap()
    }

    #[test]
    fn test_reference_window_shape() {
        let samples = generate(42, MetricsGeneratorConfig::default());
        assert_eq!(samples.len(), 720);
        assert_eq!(samples[0].timestamp.to_string(), "2023-10-01 00:00:00");
        assert_eq!(samples[719].timestamp.to_string(), "2023-10-30 23:00:00");
        assert!(samples.iter().all(|s| !s.is_anomaly));
    }

    #[test]
    fn test_hourly_without_gaps() {
        let samples = generate(7, MetricsGeneratorConfig::default());
        for pair in samples.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::hours(1));
        }
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let a = generate(42, MetricsGeneratorConfig::default());
        let b = generate(42, MetricsGeneratorConfig::default());
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.block_time.to_bits(), y.block_time.to_bits());
            assert_eq!(x.node_count.to_bits(), y.node_count.to_bits());
        }
    }

    #[test]
    fn test_different_seed_differs() {
        let a = generate(42, MetricsGeneratorConfig::default());
        let b = generate(43, MetricsGeneratorConfig::default());
        assert_ne!(a, b);
    }

    #[test]
    fn test_values_near_reference_levels() {
        let samples = generate(42, MetricsGeneratorConfig::default());
        let n = samples.len() as f64;
        let block_mean = samples.iter().map(|s| s.block_time).sum::<f64>() / n;
        let uptime_mean = samples.iter().map(|s| s.validator_uptime).sum::<f64>() / n;
        assert!((block_mean - 6.0).abs() < 0.15, "block mean {}", block_mean);
        assert!((uptime_mean - 98.0).abs() < 0.3, "uptime mean {}", uptime_mean);
    }

    #[test]
    fn test_diurnal_term_without_noise() {
        // With negligible noise the block time follows the sinusoid exactly.
        let config = MetricsGeneratorConfig {
            block_time_noise: 1e-12,
            diurnal_amplitude: 1.0,
            points: 48,
            ..MetricsGeneratorConfig::default()
        };
        let samples = generate(1, config);
        assert!((samples[0].block_time - 6.0).abs() < 1e-9);
        assert!((samples[6].block_time - 7.0).abs() < 1e-9);
        assert!((samples[18].block_time - 5.0).abs() < 1e-9);
        assert!((samples[30].block_time - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_penalty_always_applied() {
        let config = MetricsGeneratorConfig {
            uptime_noise: 1e-12,
            penalty_probability: 1.0,
            points: 10,
            ..MetricsGeneratorConfig::default()
        };
        let samples = generate(3, config);
        assert!(samples
            .iter()
            .all(|s| (s.validator_uptime - 97.5).abs() < 1e-9));
    }

    #[test]
    fn test_node_count_is_random_walk() {
        let config = MetricsGeneratorConfig {
            points: 200,
            ..MetricsGeneratorConfig::default()
        };
        let samples = generate(11, config);
        let steps: Vec<f64> = samples
            .windows(2)
            .map(|w| w[1].node_count - w[0].node_count)
            .collect();
        assert!(steps.iter().any(|s| *s > 0.0));
        assert!(steps.iter().any(|s| *s < 0.0));
        assert!((samples[0].node_count - 1000.0).abs() < 30.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let generator = MetricsGenerator::new(MetricsGeneratorConfig {
            points: 0,
            ..MetricsGeneratorConfig::default()
        });
        let result = generator.generate(&mut seeded_rng(42));
        assert!(matches!(result, Err(DataError::EmptyWindow(_))));
    }
}
