//! Isolation forest classifier.
//!
//! Anomalies are isolated by fewer random splits than normal points, so a
//! short average path length across many random trees marks an outlier.

use anomaly_api::IsolationForestConfig;
use anomaly_spi::{AnomalyError, AnomalyResult, Classifier, Result};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::validation::validate_rows;

/// Euler–Mascheroni constant.
const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

#[derive(Debug, Clone)]
enum Node {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
    Leaf {
        size: usize,
    },
}

#[derive(Debug, Clone)]
struct IsolationTree {
    root: Node,
}

impl IsolationTree {
    fn build<R: Rng>(rows: &[Vec<f64>], indices: Vec<usize>, max_depth: usize, rng: &mut R) -> Self {
        Self {
            root: Self::build_node(rows, indices, 0, max_depth, rng),
        }
    }

    fn build_node<R: Rng>(
        rows: &[Vec<f64>],
        indices: Vec<usize>,
        depth: usize,
        max_depth: usize,
        rng: &mut R,
    ) -> Node {
        if depth >= max_depth || indices.len() <= 1 {
            return Node::Leaf {
                size: indices.len(),
            };
        }

        let feature = rng.gen_range(0..rows[indices[0]].len());
        let (min, max) = indices
            .iter()
            .map(|&i| rows[i][feature])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if max - min < 1e-12 {
            return Node::Leaf {
                size: indices.len(),
            };
        }

        let threshold = rng.gen_range(min..max);
        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| rows[i][feature] < threshold);
        if left.is_empty() || right.is_empty() {
            return Node::Leaf {
                size: indices.len(),
            };
        }

        Node::Split {
            feature,
            threshold,
            left: Box::new(Self::build_node(rows, left, depth + 1, max_depth, rng)),
            right: Box::new(Self::build_node(rows, right, depth + 1, max_depth, rng)),
        }
    }

    fn path_length(&self, row: &[f64]) -> f64 {
        let mut node = &self.root;
        let mut depth = 0usize;
        loop {
            match node {
                Node::Leaf { size } => return depth as f64 + average_path_length(*size),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] < *threshold { left } else { right };
                    depth += 1;
                }
            }
        }
    }
}

/// Average path length of an unsuccessful BST search over `n` items.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
        }
    }
}

/// Isolation forest over multivariate feature rows.
///
/// Fitting places the threshold halfway between the score ranked
/// `round(n · contamination)` and the next one down; `detect` flags scores
/// strictly above it. Rows tied across that boundary are all inliers, so
/// at most `round(n · contamination)` training rows are flagged. Tree construction draws from a ChaCha8 stream
/// seeded from the configuration, so a fixed seed gives fixed flags.
#[derive(Debug, Clone)]
pub struct IsolationForest {
    config: IsolationForestConfig,
    trees: Vec<IsolationTree>,
    n_features: usize,
    sample_size: usize,
    threshold: Option<f64>,
}

impl IsolationForest {
    /// Create an unfitted forest, validating the configuration.
    pub fn new(config: IsolationForestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            trees: Vec::new(),
            n_features: 0,
            sample_size: 0,
            threshold: None,
        })
    }

    pub fn config(&self) -> &IsolationForestConfig {
        &self.config
    }

    /// Score threshold learned during fitting.
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Anomaly score per row, in (0, 1]; higher is more anomalous.
    pub fn score_samples(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>> {
        if self.trees.is_empty() {
            return Err(AnomalyError::NotFitted);
        }
        let width = validate_rows(rows)?;
        if width != self.n_features {
            return Err(AnomalyError::InvalidInput {
                row: 0,
                reason: format!("expected {} features, got {}", self.n_features, width),
            });
        }

        let normaliser = average_path_length(self.sample_size);
        let n_trees = self.trees.len() as f64;
        Ok(rows
            .par_iter()
            .map(|row| {
                let mean_path =
                    self.trees.iter().map(|t| t.path_length(row)).sum::<f64>() / n_trees;
                if normaliser > 0.0 {
                    2.0_f64.powf(-mean_path / normaliser)
                } else {
                    0.5
                }
            })
            .collect())
    }
}

impl Classifier for IsolationForest {
    fn fit(&mut self, rows: &[Vec<f64>]) -> Result<()> {
        let width = validate_rows(rows)?;
        let n = rows.len();
        if n < 2 {
            return Err(AnomalyError::InsufficientData { required: 2, got: n });
        }

        let sample_size = self.config.max_samples.min(n);
        let max_depth = (sample_size as f64).log2().ceil() as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);

        self.trees = (0..self.config.n_estimators)
            .map(|_| {
                let indices = index::sample(&mut rng, n, sample_size).into_vec();
                IsolationTree::build(rows, indices, max_depth, &mut rng)
            })
            .collect();
        self.n_features = width;
        self.sample_size = sample_size;
        self.threshold = None;

        let mut scores = self.score_samples(rows)?;
        scores.sort_by(|a, b| b.total_cmp(a));
        // contamination <= 0.5 and n >= 2 keep `flagged` below n
        let flagged = ((n as f64 * self.config.contamination).round() as usize).clamp(1, n - 1);
        self.threshold = Some((scores[flagged - 1] + scores[flagged]) / 2.0);
        Ok(())
    }

    fn detect(&self, rows: &[Vec<f64>]) -> Result<AnomalyResult> {
        let threshold = self.threshold.ok_or(AnomalyError::NotFitted)?;
        let scores = self.score_samples(rows)?;
        let is_anomaly = scores.iter().map(|&s| s > threshold).collect();
        Ok(AnomalyResult::new(is_anomaly, scores, threshold))
    }

    fn is_fitted(&self) -> bool {
        self.threshold.is_some()
    }

    fn name(&self) -> &str {
        "isolation-forest"
    }
}
