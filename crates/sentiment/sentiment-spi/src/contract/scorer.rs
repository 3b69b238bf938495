//! Trait for text sentiment scorers

use crate::error::{Result, SentimentError};

/// Maps a text to a polarity score in [-1, 1].
///
/// Scorers are called from worker threads, one text at a time, and must not
/// depend on call order.
pub trait Scorer: Send + Sync {
    /// Polarity of `text`; negative is unfavourable.
    fn score(&self, text: &str) -> f64;

    /// Scorer name for logging.
    fn name(&self) -> &str;
}

/// Reject scores that are non-finite or outside [-1, 1].
pub fn check_score(index: usize, score: f64) -> Result<f64> {
    if score.is_finite() && (-1.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(SentimentError::InvalidScore { index, score })
    }
}
