//! Contract definitions for synthetic data generation.
//!
//! This module contains trait definitions that generators must implement.

mod synthetic_source;

pub use synthetic_source::SyntheticSource;
