//! # Sentiment Lexicon
//!
//! Rule-based scorer over a word-valence dictionary.
//!
//! Each matched word contributes its valence (±4 scale). A booster word in
//! the few preceding tokens pushes the valence further in its own direction,
//! a negation flips and dampens it, and trailing exclamation marks add
//! emphasis. The summed valence is squashed into (-1, 1).

use std::collections::{HashMap, HashSet};

use sentiment_api::LexiconConfig;
use sentiment_spi::{Result, Scorer};

/// Word valences, negations and boosters.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Word to valence mapping
    words: HashMap<String, f64>,
    negations: HashSet<String>,
    /// Booster word to direction (+1 amplifies, -1 dampens)
    boosters: HashMap<String, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create a lexicon with the default vocabulary.
    pub fn new() -> Self {
        let positive_words = [
            ("amazing", 2.8),
            ("awesome", 3.1),
            ("great", 3.1),
            ("excellent", 2.7),
            ("good", 1.9),
            ("love", 3.2),
            ("like", 1.5),
            ("nice", 1.8),
            ("happy", 2.7),
            ("impressive", 2.5),
            ("fast", 1.0),
            ("stable", 1.2),
            ("secure", 1.4),
            ("smooth", 1.4),
            ("success", 2.7),
            ("successful", 2.8),
            ("win", 2.8),
            ("improved", 2.1),
            ("bullish", 1.9),
            ("thanks", 1.9),
        ];

        let negative_words = [
            ("issues", -1.5),
            ("problem", -1.7),
            ("problems", -1.7),
            ("bad", -2.5),
            ("terrible", -2.1),
            ("awful", -2.0),
            ("hate", -2.7),
            ("broken", -2.1),
            ("fail", -2.5),
            ("failed", -2.3),
            ("failure", -2.3),
            ("slow", -1.0),
            ("outage", -1.8),
            ("bug", -1.0),
            ("bugs", -1.0),
            ("crash", -1.7),
            ("scam", -2.9),
            ("worried", -1.8),
            ("concern", -1.3),
            ("bearish", -1.6),
        ];

        let words = positive_words
            .into_iter()
            .chain(negative_words)
            .map(|(w, v)| (w.to_string(), v))
            .collect();

        let negations = [
            "not", "no", "never", "neither", "nobody", "nothing", "none", "cannot", "cant",
            "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont", "isn't",
            "isnt", "aren't", "arent", "wasn't", "wasnt", "hardly", "barely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let boosters = [
            ("very", 1.0),
            ("extremely", 1.0),
            ("really", 1.0),
            ("so", 1.0),
            ("incredibly", 1.0),
            ("totally", 1.0),
            ("highly", 1.0),
            ("slightly", -1.0),
            ("somewhat", -1.0),
            ("marginally", -1.0),
            ("kinda", -1.0),
        ]
        .into_iter()
        .map(|(w, d)| (w.to_string(), d))
        .collect();

        Self {
            words,
            negations,
            boosters,
        }
    }

    /// Valence of a lowercase token.
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Booster direction of a lowercase token.
    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(word).copied()
    }

    /// Add or replace a word valence.
    pub fn add_word(&mut self, word: &str, valence: f64) {
        self.words.insert(word.to_lowercase(), valence);
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Lexicon scorer with negation, booster and exclamation rules.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer {
    lexicon: Lexicon,
    config: LexiconConfig,
}

impl LexiconScorer {
    pub fn new(lexicon: Lexicon, config: LexiconConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { lexicon, config })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Summed valence before normalisation.
    pub fn raw_valence(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        let mut total = 0.0;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.lexicon.valence(token) else {
                continue;
            };

            for distance in 1..=self.config.modifier_window.min(i) {
                let previous = &tokens[i - distance];
                if let Some(direction) = self.lexicon.booster(previous) {
                    let decay = 1.0 - 0.05 * (distance - 1) as f64;
                    valence += valence.signum() * direction * self.config.booster_increment * decay;
                }
                if self.lexicon.is_negation(previous) {
                    valence *= self.config.negation_scalar;
                }
            }
            total += valence;
        }

        let exclamations = text.matches('!').count().min(self.config.max_exclamations);
        let emphasis = exclamations as f64 * self.config.exclamation_increment;
        if total > 0.0 {
            total += emphasis;
        } else if total < 0.0 {
            total -= emphasis;
        }
        total
    }

    /// Squash a summed valence into (-1, 1).
    pub fn normalize(&self, valence: f64) -> f64 {
        let score = valence / (valence * valence + self.config.normalization_alpha).sqrt();
        score.clamp(-1.0, 1.0)
    }
}

impl Scorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        self.normalize(self.raw_valence(text))
    }

    fn name(&self) -> &str {
        "lexicon"
    }
}
