//! Aggregate records produced from scored posts

mod daily_sentiment;
mod post_filter;
mod timeline_point;
mod topic_sentiment;

pub use daily_sentiment::DailySentiment;
pub use post_filter::PostFilter;
pub use timeline_point::TimelinePoint;
pub use topic_sentiment::TopicSentiment;
