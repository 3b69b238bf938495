//! Daily sentiment merged with the network series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the outer join of daily sentiment and the network series.
/// Fields missing on one side are `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub avg_sentiment: f64,
    pub block_time: f64,
    pub node_count: f64,
}

impl TimelinePoint {
    pub fn new(date: NaiveDate, avg_sentiment: f64, block_time: f64, node_count: f64) -> Self {
        Self {
            date,
            avg_sentiment,
            block_time,
            node_count,
        }
    }
}
