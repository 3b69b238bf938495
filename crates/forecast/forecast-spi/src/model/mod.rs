//! Model module containing data structures

mod confidence_interval;

pub use confidence_interval::ConfidenceInterval;
