//! Lexicon scorer tuning constants.

use serde::{Deserialize, Serialize};
use sentiment_spi::{Result, SentimentError};

/// Tuning for the rule-based lexicon scorer.
///
/// Word valences live on a ±4 scale; the summed valence `x` is squashed to
/// (-1, 1) with `x / sqrt(x² + normalization_alpha)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Multiplier applied to a valence preceded by a negation
    pub negation_scalar: f64,
    /// Valence added (in the word's direction) by a booster word
    pub booster_increment: f64,
    /// Valence added per exclamation mark
    pub exclamation_increment: f64,
    /// Exclamation marks beyond this count add nothing
    pub max_exclamations: usize,
    /// How many preceding tokens a negation or booster reaches
    pub modifier_window: usize,
    pub normalization_alpha: f64,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            negation_scalar: -0.74,
            booster_increment: 0.293,
            exclamation_increment: 0.292,
            max_exclamations: 4,
            modifier_window: 3,
            normalization_alpha: 15.0,
        }
    }
}

impl LexiconConfig {
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("negation_scalar", self.negation_scalar.is_finite()),
            ("booster_increment", self.booster_increment.is_finite()),
            ("exclamation_increment", self.exclamation_increment.is_finite()),
            (
                "normalization_alpha",
                self.normalization_alpha.is_finite() && self.normalization_alpha > 0.0,
            ),
        ];
        for (name, ok) in checks {
            if !ok {
                return Err(SentimentError::InvalidParameter {
                    name: name.to_string(),
                    reason: "must be finite (alpha must also be positive)".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = LexiconConfig::default();
        assert_eq!(config.normalization_alpha, 15.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_alpha_rejected() {
        let config = LexiconConfig {
            normalization_alpha: 0.0,
            ..LexiconConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SentimentError::InvalidParameter { ref name, .. }) if name == "normalization_alpha"
        ));
    }
}
