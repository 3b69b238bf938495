//! Community posts and their classification enums.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// Channel a post was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    X,
    #[serde(rename = "GitHub")]
    GitHub,
    Forum,
}

impl Source {
    /// Every source, in generation order.
    pub const ALL: [Source; 3] = [Source::X, Source::GitHub, Source::Forum];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::X => "X",
            Source::GitHub => "GitHub",
            Source::Forum => "Forum",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DataError::InvalidParameter {
                name: "source".to_string(),
                reason: format!("unknown source '{}'", s),
            })
    }
}

/// Discussion topic of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Staking,
    Upgrades,
    Governance,
    Parachains,
}

impl Topic {
    /// Every topic; uniform draws index into this array.
    pub const ALL: [Topic; 4] = [
        Topic::Staking,
        Topic::Upgrades,
        Topic::Governance,
        Topic::Parachains,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Staking => "staking",
            Topic::Upgrades => "upgrades",
            Topic::Governance => "governance",
            Topic::Parachains => "parachains",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DataError::InvalidParameter {
                name: "topic".to_string(),
                reason: format!("unknown topic '{}'", s),
            })
    }
}

/// A generated post that has not been scored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDraft {
    pub date: NaiveDate,
    pub text: String,
    pub source: Source,
    pub topic: Topic,
}

impl PostDraft {
    pub fn new(date: NaiveDate, text: impl Into<String>, source: Source, topic: Topic) -> Self {
        Self {
            date,
            text: text.into(),
            source,
            topic,
        }
    }

    /// Attach a sentiment score, freezing the post.
    pub fn scored(self, sentiment: f64) -> Post {
        Post {
            date: self.date,
            text: self.text,
            source: self.source,
            topic: self.topic,
            sentiment,
        }
    }
}

/// A scored post.
///
/// Fields are read-only once the score is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    date: NaiveDate,
    text: String,
    source: Source,
    topic: Topic,
    sentiment: f64,
}

impl Post {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    /// Sentiment score in [-1, 1].
    pub fn sentiment(&self) -> f64 {
        self.sentiment
    }
}
