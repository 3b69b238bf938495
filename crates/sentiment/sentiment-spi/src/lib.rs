//! Sentiment Service Provider Interface
//!
//! Defines the scorer capability, aggregate records and errors.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{check_score, Scorer};
pub use error::{Result, SentimentError};
pub use model::{DailySentiment, PostFilter, TimelinePoint, TopicSentiment};
