//! Mean sentiment per calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mean sentiment of the posts dated `date`; `0.0` with a zero count when
/// the day has no posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub avg_sentiment: f64,
    pub post_count: usize,
}

impl DailySentiment {
    pub fn new(date: NaiveDate, avg_sentiment: f64, post_count: usize) -> Self {
        Self {
            date,
            avg_sentiment,
            post_count,
        }
    }

    /// A day without posts.
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, 0.0, 0)
    }
}
