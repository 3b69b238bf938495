//! Sentiment Facade
//!
//! Unified re-exports for the sentiment module:
//! - `Scorer` trait, aggregate records and errors from SPI
//! - `LexiconConfig` and `PostFilter` from API
//! - `LexiconScorer` and the aggregation functions from Core

// Re-export everything from SPI
pub use sentiment_spi::*;

// Re-export everything from API
pub use sentiment_api::*;

// Re-export everything from Core
pub use sentiment_core::*;
