//! Synthetic Data Facade
//!
//! Unified re-exports for the synthetic data module.
//!
//! This facade provides a single entry point for all generator functionality:
//! - `data_spi` - Records, the `SyntheticSource` trait and errors
//! - `data_api` - Generator configuration types
//! - `data_core` - Seeded generator implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use data_facade::{seeded_rng, MetricsGenerator, SyntheticSource};
//!
//! let samples = MetricsGenerator::default()
//!     .generate(&mut seeded_rng(42))
//!     .unwrap();
//! assert_eq!(samples.len(), 720);
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
