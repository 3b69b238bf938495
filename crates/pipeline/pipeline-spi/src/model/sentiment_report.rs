//! Community sentiment report

use sentiment_spi::{DailySentiment, PostFilter, TimelinePoint, TopicSentiment};
use serde::{Deserialize, Serialize};

use super::Alert;

/// Output of one sentiment pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReport {
    /// One row per calendar day, zero-filled
    pub daily_sentiment_series: Vec<DailySentiment>,
    /// One row per topic present after filtering
    pub topic_sentiment: Vec<TopicSentiment>,
    /// Daily sentiment merged with the network series
    pub timeline: Vec<TimelinePoint>,
    pub alerts: Vec<Alert>,
    /// Filter the aggregates were computed under
    pub filter: PostFilter,
}

impl SentimentReport {
    /// Mean daily sentiment over the merged timeline.
    pub fn mean_sentiment(&self) -> f64 {
        if self.timeline.is_empty() {
            return 0.0;
        }
        self.timeline.iter().map(|p| p.avg_sentiment).sum::<f64>() / self.timeline.len() as f64
    }
}
