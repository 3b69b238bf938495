//! Sentiment error types

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while scoring or aggregating posts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SentimentError {
    #[error("Invalid score {score} for post {index}: must be finite and in [-1, 1]")]
    InvalidScore { index: usize, score: f64 },

    #[error("Post dated {0} falls outside the calendar")]
    DateOutsideCalendar(NaiveDate),

    #[error("Calendar must contain at least one day")]
    EmptyCalendar,

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for sentiment operations.
pub type Result<T> = std::result::Result<T, SentimentError>;
