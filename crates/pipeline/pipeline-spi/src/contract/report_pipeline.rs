//! Trait for end-to-end report pipelines

use serde::Serialize;

use crate::error::Result;

/// A pipeline whose report is a pure function of its configuration.
///
/// Every call to `run` builds its own random source, so two calls on the
/// same pipeline return identical reports.
pub trait ReportPipeline: Send + Sync {
    type Report: Serialize + Clone + Send + Sync;

    /// Generate, analyse and evaluate alerts.
    fn run(&self) -> Result<Self::Report>;

    /// Pipeline name for logging.
    fn name(&self) -> &str;
}
