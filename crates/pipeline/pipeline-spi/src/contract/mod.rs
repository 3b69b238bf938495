//! Contract module containing the pipeline trait

mod report_pipeline;

pub use report_pipeline::ReportPipeline;
