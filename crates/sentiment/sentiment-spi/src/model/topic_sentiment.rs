//! Mean sentiment per topic.

use data_spi::Topic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSentiment {
    pub topic: Topic,
    pub avg_sentiment: f64,
    pub post_count: usize,
}

impl TopicSentiment {
    pub fn new(topic: Topic, avg_sentiment: f64, post_count: usize) -> Self {
        Self {
            topic,
            avg_sentiment,
            post_count,
        }
    }

    /// Sum of the underlying post scores.
    pub fn total_sentiment(&self) -> f64 {
        self.avg_sentiment * self.post_count as f64
    }
}
