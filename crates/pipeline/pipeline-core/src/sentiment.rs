//! Community sentiment pipeline: generate, score, filter, aggregate, alert.

use data_core::{seeded_rng, NetworkSeriesGenerator, PostGenerator};
use data_spi::{Post, SyntheticSource};
use pipeline_api::PipelineConfig;
use pipeline_spi::{ReportPipeline, Result, SentimentReport};
use sentiment_core::{
    daily_sentiment, merge_timeline, score_posts, topic_sentiment, LexiconScorer,
};
use sentiment_spi::{PostFilter, Scorer};

use crate::alerts::evaluate_sentiment_alerts;

/// Sentiment pipeline over a post scorer.
#[derive(Debug, Clone)]
pub struct SentimentPipeline<S: Scorer = LexiconScorer> {
    config: PipelineConfig,
    scorer: S,
}

impl SentimentPipeline {
    /// Pipeline with the default lexicon scorer.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scorer: LexiconScorer::default(),
        })
    }
}

impl<S: Scorer> SentimentPipeline<S> {
    pub fn with_scorer(config: PipelineConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run with `filter` in place of the configured one.
    ///
    /// Generation and scoring do not depend on the filter, so every filter
    /// sees the same scored posts for a given seed.
    pub fn run_filtered(&self, filter: &PostFilter) -> Result<SentimentReport> {
        let config = &self.config;
        config.validate()?;
        tracing::info!(
            seed = config.seed,
            days = config.sentiment_days,
            filtered = !filter.is_identity(),
            "sentiment pipeline started"
        );

        let posts = PostGenerator::new(config.post_generator());
        let network = NetworkSeriesGenerator::new(config.network_series());
        let mut rng = seeded_rng(config.seed);
        let drafts = posts.generate(&mut rng)?;
        let network_days = network.generate(&mut rng)?;

        let scored = score_posts(&self.scorer, drafts)?;
        let selected: Vec<&Post> = filter.apply(&scored);

        let daily = daily_sentiment(&selected, &posts.calendar()?)?;
        let topics = topic_sentiment(&selected);
        let timeline = merge_timeline(&daily, &network_days);

        let sentiments: Vec<f64> = timeline.iter().map(|p| p.avg_sentiment).collect();
        let alerts = evaluate_sentiment_alerts(&sentiments, &config.thresholds);
        for alert in &alerts {
            tracing::warn!(severity = %alert.severity, "{}", alert.message);
        }

        tracing::info!(
            posts = scored.len(),
            selected = selected.len(),
            topics = topics.len(),
            alerts = alerts.len(),
            "sentiment pipeline finished"
        );

        Ok(SentimentReport {
            daily_sentiment_series: daily,
            topic_sentiment: topics,
            timeline,
            alerts,
            filter: filter.clone(),
        })
    }
}

impl<S: Scorer> ReportPipeline for SentimentPipeline<S> {
    type Report = SentimentReport;

    fn run(&self) -> Result<SentimentReport> {
        self.run_filtered(&self.config.filter)
    }

    fn name(&self) -> &str {
        "sentiment"
    }
}
