//! Contract module containing trait definitions for sentiment scoring

mod scorer;

pub use scorer::{check_score, Scorer};
