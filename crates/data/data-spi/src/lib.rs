//! Synthetic Data Service Provider Interface
//!
//! Defines the records produced by the synthetic generators and the
//! contract every generator implements.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SyntheticSource;
pub use error::{DataError, Result};
pub use model::{
    block_times, node_counts, validator_uptimes, MetricSample, NetworkDay, Post, PostDraft,
    Source, Topic,
};
