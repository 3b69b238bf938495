//! Error module containing error types and result aliases

mod sentiment_error;

pub use sentiment_error::{Result, SentimentError};
