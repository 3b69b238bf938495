//! Daily network series used as the sentiment overlay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the synthetic network series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDay {
    pub date: NaiveDate,
    pub block_time: f64,
    pub node_count: f64,
}

impl NetworkDay {
    pub fn new(date: NaiveDate, block_time: f64, node_count: f64) -> Self {
        Self {
            date,
            block_time,
            node_count,
        }
    }
}
