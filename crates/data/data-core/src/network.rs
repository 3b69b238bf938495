//! Daily network series generator.

use data_api::NetworkSeriesConfig;
use data_spi::{DataError, NetworkDay, Result, SyntheticSource};
use rand::Rng;
use rand_distr::Normal;

use crate::posts::calendar;

/// Generates one block time / node count pair per calendar day.
#[derive(Debug, Clone, Default)]
pub struct NetworkSeriesGenerator {
    config: NetworkSeriesConfig,
}

impl NetworkSeriesGenerator {
    pub fn new(config: NetworkSeriesConfig) -> Self {
        Self { config }
    }
}

impl SyntheticSource for NetworkSeriesGenerator {
    type Record = NetworkDay;

    fn name(&self) -> &str {
        "network-overlay"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<NetworkDay>> {
        let c = &self.config;
        c.validate()?;
        let dates = calendar(c.start_date, c.days)?;

        let invalid = |name: &str, e: rand_distr::NormalError| DataError::InvalidParameter {
            name: name.to_string(),
            reason: e.to_string(),
        };
        let block_noise =
            Normal::new(0.0, c.block_time_noise).map_err(|e| invalid("block_time_noise", e))?;
        let node_step =
            Normal::new(0.0, c.node_count_step).map_err(|e| invalid("node_count_step", e))?;

        let block_times: Vec<f64> = (0..c.days)
            .map(|_| c.block_time_base + rng.sample(block_noise))
            .collect();

        let mut walk = c.node_count_base;
        let days = dates
            .into_iter()
            .zip(block_times)
            .map(|(date, block_time)| {
                walk += rng.sample(node_step);
                NetworkDay::new(date, block_time, walk)
            })
            .collect();
        Ok(days)
    }
}
