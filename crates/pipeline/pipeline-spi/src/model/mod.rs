//! Model module containing report data structures

mod alert;
mod forecast_point;
mod metrics_report;
mod sentiment_report;

pub use alert::{Alert, Severity};
pub use forecast_point::ForecastPoint;
pub use metrics_report::MetricsReport;
pub use sentiment_report::SentimentReport;
