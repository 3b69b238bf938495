//! Sentiment Consumer API
//!
//! Configuration for the lexicon scorer.

mod lexicon_config;

// Re-export SPI types
pub use sentiment_spi::{
    check_score, DailySentiment, PostFilter, Result, Scorer, SentimentError, TimelinePoint,
    TopicSentiment,
};

pub use lexicon_config::LexiconConfig;
