//! Synthetic Data Core
//!
//! Seeded generators for hourly network metrics, community posts and the
//! daily network overlay.

mod metrics;
mod network;
mod posts;
mod rng;

pub use metrics::MetricsGenerator;
pub use network::NetworkSeriesGenerator;
pub use posts::{PostGenerator, FORUM_TEMPLATE, GITHUB_TEMPLATE};
pub use rng::{seeded_rng, SeededRng};
