//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod classifier;

pub use classifier::Classifier;
