//! Source/topic membership filter over scored posts.

use std::collections::BTreeSet;

use data_spi::{Post, Source, Topic};
use serde::{Deserialize, Serialize};

/// Keeps posts whose source and topic are both in the selected sets.
///
/// `None` selects everything. A set holding every variant behaves exactly
/// like `None`; an empty set keeps nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<BTreeSet<Source>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<BTreeSet<Topic>>,
}

impl PostFilter {
    /// Filter that keeps every post.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources = Some(sources.into_iter().collect());
        self
    }

    pub fn with_topics(mut self, topics: impl IntoIterator<Item = Topic>) -> Self {
        self.topics = Some(topics.into_iter().collect());
        self
    }

    /// Whether this filter keeps every post.
    pub fn is_identity(&self) -> bool {
        let all_sources = self
            .sources
            .as_ref()
            .map_or(true, |s| s.len() == Source::ALL.len());
        let all_topics = self
            .topics
            .as_ref()
            .map_or(true, |t| t.len() == Topic::ALL.len());
        all_sources && all_topics
    }

    pub fn matches(&self, post: &Post) -> bool {
        let source_ok = self
            .sources
            .as_ref()
            .map_or(true, |s| s.contains(&post.source()));
        let topic_ok = self
            .topics
            .as_ref()
            .map_or(true, |t| t.contains(&post.topic()));
        source_ok && topic_ok
    }

    /// Posts kept by the filter, in input order.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|p| self.matches(p)).collect()
    }
}
