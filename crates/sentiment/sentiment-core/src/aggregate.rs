//! Post scoring and aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use data_spi::{NetworkDay, Post, PostDraft, Topic};
use rayon::prelude::*;
use sentiment_spi::{
    check_score, DailySentiment, Result, Scorer, SentimentError, TimelinePoint, TopicSentiment,
};

/// Score every draft in parallel, preserving input order.
///
/// Fails on the first score that is non-finite or outside [-1, 1].
pub fn score_posts<S: Scorer + ?Sized>(scorer: &S, drafts: Vec<PostDraft>) -> Result<Vec<Post>> {
    let posts = drafts
        .into_par_iter()
        .enumerate()
        .map(|(index, draft)| {
            let score = check_score(index, scorer.score(&draft.text))?;
            Ok(draft.scored(score))
        })
        .collect::<Result<Vec<Post>>>()?;

    tracing::debug!(scorer = scorer.name(), posts = posts.len(), "scored posts");
    Ok(posts)
}

/// Mean sentiment per calendar day, in calendar order.
///
/// Days without posts report `0.0` with a zero count, so the output always
/// has one row per calendar day.
pub fn daily_sentiment(posts: &[&Post], calendar: &[NaiveDate]) -> Result<Vec<DailySentiment>> {
    if calendar.is_empty() {
        return Err(SentimentError::EmptyCalendar);
    }

    let mut totals: BTreeMap<NaiveDate, (f64, usize)> =
        calendar.iter().map(|d| (*d, (0.0, 0))).collect();
    for post in posts {
        let entry = totals
            .get_mut(&post.date())
            .ok_or(SentimentError::DateOutsideCalendar(post.date()))?;
        entry.0 += post.sentiment();
        entry.1 += 1;
    }

    Ok(calendar
        .iter()
        .map(|date| match totals.get(date) {
            Some(&(sum, count)) if count > 0 => {
                DailySentiment::new(*date, sum / count as f64, count)
            }
            _ => DailySentiment::empty(*date),
        })
        .collect())
}

/// Mean sentiment per topic.
///
/// Topics with no posts are omitted rather than zero-filled.
pub fn topic_sentiment(posts: &[&Post]) -> Vec<TopicSentiment> {
    let mut totals: BTreeMap<Topic, (f64, usize)> = BTreeMap::new();
    for post in posts {
        let entry = totals.entry(post.topic()).or_insert((0.0, 0));
        entry.0 += post.sentiment();
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(topic, (sum, count))| TopicSentiment::new(topic, sum / count as f64, count))
        .collect()
}

/// Outer join of daily sentiment and the network series on date.
///
/// Fields missing on either side are `0.0`. Rows are sorted by date.
pub fn merge_timeline(daily: &[DailySentiment], network: &[NetworkDay]) -> Vec<TimelinePoint> {
    let mut rows: BTreeMap<NaiveDate, TimelinePoint> = BTreeMap::new();
    for day in daily {
        rows.entry(day.date)
            .or_insert_with(|| TimelinePoint::new(day.date, 0.0, 0.0, 0.0))
            .avg_sentiment = day.avg_sentiment;
    }
    for day in network {
        let row = rows
            .entry(day.date)
            .or_insert_with(|| TimelinePoint::new(day.date, 0.0, 0.0, 0.0));
        row.block_time = day.block_time;
        row.node_count = day.node_count;
    }
    rows.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_spi::Source;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, day).unwrap()
    }

    fn post(day: u32, topic: Topic, sentiment: f64) -> Post {
        PostDraft::new(date(day), "text", Source::X, topic).scored(sentiment)
    }

    struct Fixed(f64);

    impl Scorer for Fixed {
        fn score(&self, _text: &str) -> f64 {
            self.0
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct ByLength;

    impl Scorer for ByLength {
        fn score(&self, text: &str) -> f64 {
            text.len() as f64 / 10.0
        }

        fn name(&self) -> &str {
            "by-length"
        }
    }

    #[test]
    fn test_score_posts_preserves_order() {
        let drafts: Vec<PostDraft> = (0..10)
            .map(|i| PostDraft::new(date(1), "x".repeat(i), Source::Forum, Topic::Staking))
            .collect();
        let posts = score_posts(&ByLength, drafts).unwrap();
        for (i, post) in posts.iter().enumerate() {
            assert_eq!(post.sentiment(), i as f64 / 10.0);
            assert_eq!(post.text().len(), i);
        }
    }

    #[test]
    fn test_score_posts_rejects_out_of_range() {
        let drafts = vec![PostDraft::new(date(1), "t", Source::X, Topic::Upgrades)];
        assert!(matches!(
            score_posts(&Fixed(1.5), drafts),
            Err(SentimentError::InvalidScore { index: 0, .. })
        ));
    }

    #[test]
    fn test_score_posts_through_trait_object() {
        let scorer: Box<dyn Scorer> = Box::new(Fixed(-0.25));
        let drafts = vec![PostDraft::new(date(2), "t", Source::GitHub, Topic::Governance)];
        let posts = score_posts(scorer.as_ref(), drafts).unwrap();
        assert_eq!(posts[0].sentiment(), -0.25);
    }

    #[test]
    fn test_daily_zero_fills_calendar() {
        let posts = [
            post(1, Topic::Staking, 0.5),
            post(1, Topic::Upgrades, -0.1),
            post(3, Topic::Staking, 0.2),
        ];
        let refs: Vec<&Post> = posts.iter().collect();
        let calendar: Vec<NaiveDate> = (1..=4).map(date).collect();
        let daily = daily_sentiment(&refs, &calendar).unwrap();

        assert_eq!(daily.len(), 4);
        assert!((daily[0].avg_sentiment - 0.2).abs() < 1e-12);
        assert_eq!(daily[0].post_count, 2);
        assert_eq!(daily[1], DailySentiment::empty(date(2)));
        assert_eq!(daily[2].post_count, 1);
        assert_eq!(daily[3].avg_sentiment, 0.0);
    }

    #[test]
    fn test_daily_without_posts() {
        let calendar: Vec<NaiveDate> = (1..=30).map(date).collect();
        let daily = daily_sentiment(&[], &calendar).unwrap();
        assert_eq!(daily.len(), 30);
        assert!(daily.iter().all(|d| d.avg_sentiment == 0.0 && d.post_count == 0));
    }

    #[test]
    fn test_daily_rejects_foreign_dates() {
        let posts = [post(20, Topic::Staking, 0.1)];
        let refs: Vec<&Post> = posts.iter().collect();
        let calendar: Vec<NaiveDate> = (1..=5).map(date).collect();
        assert_eq!(
            daily_sentiment(&refs, &calendar),
            Err(SentimentError::DateOutsideCalendar(date(20)))
        );
        assert_eq!(
            daily_sentiment(&refs, &[]),
            Err(SentimentError::EmptyCalendar)
        );
    }

    #[test]
    fn test_topic_omits_absent_topics() {
        let posts = [
            post(1, Topic::Parachains, 0.4),
            post(2, Topic::Staking, -0.2),
            post(3, Topic::Parachains, 0.0),
        ];
        let refs: Vec<&Post> = posts.iter().collect();
        let topics = topic_sentiment(&refs);

        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].topic, Topic::Staking);
        assert_eq!(topics[1].topic, Topic::Parachains);
        assert!((topics[1].avg_sentiment - 0.2).abs() < 1e-12);
        assert_eq!(topics[1].post_count, 2);
    }

    #[test]
    fn test_topic_totals_match_raw_sum() {
        let posts: Vec<Post> = (0..40)
            .map(|i| {
                let topic = Topic::ALL[i % 4];
                post(1 + (i % 28) as u32, topic, (i as f64 * 0.37).sin())
            })
            .collect();
        let refs: Vec<&Post> = posts.iter().collect();
        let raw: f64 = posts.iter().map(|p| p.sentiment()).sum();
        let from_topics: f64 = topic_sentiment(&refs)
            .iter()
            .map(|t| t.total_sentiment())
            .sum();
        assert!((raw - from_topics).abs() < 1e-9);
    }

    #[test]
    fn test_merge_outer_join() {
        let daily = vec![
            DailySentiment::new(date(1), 0.3, 2),
            DailySentiment::new(date(2), -0.1, 1),
        ];
        let network = vec![
            NetworkDay::new(date(2), 6.1, 1001.0),
            NetworkDay::new(date(3), 5.9, 998.0),
        ];
        let merged = merge_timeline(&daily, &network);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0], TimelinePoint::new(date(1), 0.3, 0.0, 0.0));
        assert_eq!(merged[1], TimelinePoint::new(date(2), -0.1, 6.1, 1001.0));
        assert_eq!(merged[2], TimelinePoint::new(date(3), 0.0, 5.9, 998.0));
    }
}
