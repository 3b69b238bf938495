//! Community post generator.

use chrono::{Days, NaiveDate};
use data_api::PostGeneratorConfig;
use data_spi::{DataError, PostDraft, Result, Source, SyntheticSource, Topic};
use rand::Rng;

/// GitHub text template; `{topic}` is replaced with the topic name.
pub const GITHUB_TEMPLATE: &str = "Issue with {topic} in polkadot-sdk";
/// Forum text template.
pub const FORUM_TEMPLATE: &str = "Discussion on {topic} at discuss.polkadot.network";

const X_POSITIVE_TEMPLATE: &str = "Polkadot {topic} is amazing!";
const X_NEGATIVE_TEMPLATE: &str = "Polkadot {topic} has issues!";

fn render(template: &str, topic: Topic) -> String {
    template.replace("{topic}", topic.as_str())
}

fn random_topic<R: Rng + ?Sized>(rng: &mut R) -> Topic {
    Topic::ALL[rng.gen_range(0..Topic::ALL.len())]
}

/// Generates X, GitHub and Forum posts over a fixed calendar.
///
/// Only X posts carry polarity: the positive template is picked with
/// `positive_probability`, the negative one otherwise. GitHub and Forum
/// templates contain no polarity words.
#[derive(Debug, Clone, Default)]
pub struct PostGenerator {
    config: PostGeneratorConfig,
}

impl PostGenerator {
    pub fn new(config: PostGeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PostGeneratorConfig {
        &self.config
    }

    /// Every date of the calendar window, ascending.
    pub fn calendar(&self) -> Result<Vec<NaiveDate>> {
        calendar(self.config.start_date, self.config.days)
    }
}

pub(crate) fn calendar(start: NaiveDate, days: usize) -> Result<Vec<NaiveDate>> {
    (0..days)
        .map(|i| {
            start
                .checked_add_days(Days::new(i as u64))
                .ok_or_else(|| DataError::InvalidParameter {
                    name: "start_date".to_string(),
                    reason: format!("date overflow at day {}", i),
                })
        })
        .collect()
}

impl SyntheticSource for PostGenerator {
    type Record = PostDraft;

    fn name(&self) -> &str {
        "community-posts"
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<PostDraft>> {
        let c = &self.config;
        c.validate()?;
        let dates = self.calendar()?;

        let mut texts: Vec<(Source, Topic, String)> = Vec::with_capacity(c.total_posts());
        for _ in 0..c.x_posts {
            let positive = rng.gen_bool(c.positive_probability);
            let topic = random_topic(rng);
            let template = if positive {
                X_POSITIVE_TEMPLATE
            } else {
                X_NEGATIVE_TEMPLATE
            };
            texts.push((Source::X, topic, render(template, topic)));
        }
        for _ in 0..c.github_posts {
            let topic = random_topic(rng);
            texts.push((Source::GitHub, topic, render(GITHUB_TEMPLATE, topic)));
        }
        for _ in 0..c.forum_posts {
            let topic = random_topic(rng);
            texts.push((Source::Forum, topic, render(FORUM_TEMPLATE, topic)));
        }

        // Dates are drawn in a second pass, after all texts.
        let posts: Vec<PostDraft> = texts
            .into_iter()
            .map(|(source, topic, text)| {
                let date = dates[rng.gen_range(0..dates.len())];
                PostDraft::new(date, text, source, topic)
            })
            .collect();

        tracing::debug!(source = self.name(), posts = posts.len(), "generated post drafts");
        Ok(posts)
    }
}
