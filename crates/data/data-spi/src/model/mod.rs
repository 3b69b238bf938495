//! Data models for synthetic generation.
//!
//! Records produced by the metric, post and network-day generators.

mod metric_sample;
mod network_day;
mod post;

pub use metric_sample::{block_times, node_counts, validator_uptimes, MetricSample};
pub use network_day::NetworkDay;
pub use post::{Post, PostDraft, Source, Topic};
