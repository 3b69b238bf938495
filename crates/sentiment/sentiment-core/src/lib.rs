//! Sentiment Core
//!
//! Lexicon scorer, parallel post scoring, and the daily/topic aggregations
//! merged with the network series.

pub mod aggregate;
pub mod lexicon;

// Re-export SPI traits for implementations
pub use sentiment_spi::{
    DailySentiment, PostFilter, Result, Scorer, SentimentError, TimelinePoint, TopicSentiment,
};

pub use aggregate::{daily_sentiment, merge_timeline, score_posts, topic_sentiment};
pub use lexicon::{Lexicon, LexiconScorer};
