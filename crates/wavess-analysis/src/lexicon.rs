//! Word-polarity lexicon for post and comment sentiment.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::AnalysisError;

/// Built-in word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const WORDS: &[(&str, f64)] = &[
    // Positive signals
    ("agree", 0.3),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("best", 1.0),
    ("brilliant", 0.9),
    ("clear", 0.1),
    ("congrats", 0.6),
    ("congratulations", 0.6),
    ("convinced", 0.3),
    ("excellent", 1.0),
    ("excited", 0.375),
    ("exciting", 0.3),
    ("fantastic", 0.4),
    ("good", 0.7),
    ("great", 0.8),
    ("growth", 0.2),
    ("happy", 0.8),
    ("helpful", 0.4),
    ("impressive", 1.0),
    ("innovative", 0.5),
    ("insightful", 0.5),
    ("inspiring", 0.5),
    ("interesting", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("new", 0.14),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("positive", 0.23),
    ("proud", 0.8),
    ("recommend", 0.4),
    ("strong", 0.43),
    ("success", 0.3),
    ("successful", 0.75),
    ("thank", 0.2),
    ("thanks", 0.2),
    ("transparency", 0.2),
    ("transparent", 0.2),
    ("useful", 0.3),
    ("valuable", 0.4),
    ("win", 0.8),
    ("wonderful", 1.0),
    // Negative signals
    ("angry", -0.5),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broken", -0.4),
    ("concern", -0.3),
    ("concerning", -0.4),
    ("confusing", -0.3),
    ("difficult", -0.5),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("doubt", -0.2),
    ("failed", -0.5),
    ("failure", -0.3),
    ("hate", -0.8),
    ("misleading", -0.6),
    ("negative", -0.3),
    ("overrated", -0.4),
    ("poor", -0.4),
    ("problem", -0.3),
    ("risk", -0.2),
    ("sad", -0.5),
    ("terrible", -1.0),
    ("unclear", -0.2),
    ("useless", -0.5),
    ("waste", -0.2),
    ("weak", -0.375),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Multipliers applied to a scored word directly following them.
pub(crate) const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.4),
    ("barely", 0.5),
    ("extremely", 1.5),
    ("highly", 1.4),
    ("incredibly", 1.5),
    ("quite", 1.1),
    ("really", 1.3),
    ("slightly", 0.6),
    ("so", 1.2),
    ("somewhat", 0.7),
    ("super", 1.3),
    ("totally", 1.2),
    ("truly", 1.2),
    ("very", 1.3),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nor", "neither", "without", "dont", "cant", "wont", "isnt",
];

/// How far back (in tokens) a negator still flips a scored word.
const NEGATION_WINDOW: usize = 2;

/// Factor applied to a negated word: flips the sign and halves the strength.
const NEGATION_FACTOR: f64 = -0.5;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:'\w+)*").expect("valid word regex"));

/// YAML shape of a lexicon overlay file.
///
/// ```yaml
/// words:
///   greenwashing: -0.7
/// intensifiers:
///   mega: 1.5
/// ```
#[derive(Debug, Default, Deserialize)]
struct LexiconOverlay {
    #[serde(default)]
    words: HashMap<String, f64>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
}

/// Word weights and intensifiers used to score text polarity.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|&(w, s)| (w.to_string(), s)).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|&(w, f)| (w.to_string(), f))
                .collect(),
        }
    }
}

impl Lexicon {
    /// Built-in lexicon extended with a YAML overlay.
    ///
    /// Overlay entries replace built-in entries with the same (lowercased) word.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::LexiconParse`] on malformed YAML and
    /// [`AnalysisError::LexiconEntry`] if a word weight falls outside
    /// `[-1.0, 1.0]` or an intensifier is not a positive finite factor.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, AnalysisError> {
        let overlay: LexiconOverlay = if yaml.trim().is_empty() {
            LexiconOverlay::default()
        } else {
            serde_yaml::from_str(yaml)?
        };

        let mut lexicon = Self::default();
        for (word, weight) in overlay.words {
            if !weight.is_finite() || !(-1.0..=1.0).contains(&weight) {
                return Err(AnalysisError::LexiconEntry {
                    word,
                    reason: format!("weight {weight} outside [-1, 1]"),
                });
            }
            lexicon.words.insert(word.to_lowercase(), weight);
        }
        for (word, factor) in overlay.intensifiers {
            if !factor.is_finite() || factor <= 0.0 {
                return Err(AnalysisError::LexiconEntry {
                    word,
                    reason: format!("intensifier {factor} must be a positive number"),
                });
            }
            lexicon.intensifiers.insert(word.to_lowercase(), factor);
        }
        Ok(lexicon)
    }

    /// Number of scored words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Score a text string.
    ///
    /// Each lexicon word contributes its weight, multiplied by an intensifier
    /// directly before it and by [`NEGATION_FACTOR`] when a negator appears in
    /// the preceding [`NEGATION_WINDOW`] tokens. The result is the mean of the
    /// contributions clamped to `[-1.0, 1.0]`, or `0.0` when no word matches.
    #[must_use]
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens: Vec<String> = WORD_RE
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        let mut total = 0.0_f64;
        let mut matched = 0_u32;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&weight) = self.words.get(token) else {
                continue;
            };

            let mut score = weight;
            if let Some(factor) = i
                .checked_sub(1)
                .and_then(|prev| self.intensifiers.get(&tokens[prev]))
            {
                score *= factor;
            }
            if tokens[i.saturating_sub(NEGATION_WINDOW)..i]
                .iter()
                .any(|t| is_negator(t))
            {
                score *= NEGATION_FACTOR;
            }

            total += score.clamp(-1.0, 1.0);
            matched += 1;
        }

        if matched == 0 {
            return 0.0;
        }
        (total / f64::from(matched)).clamp(-1.0, 1.0)
    }
}

fn is_negator(token: &str) -> bool {
    NEGATORS.contains(&token) || token.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(Lexicon::default().polarity(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(Lexicon::default().polarity("   \n\t"), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(Lexicon::default().polarity("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = Lexicon::default().polarity("this report is great");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = Lexicon::default().polarity("what a terrible take");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn score_is_mean_of_matches() {
        // good (0.7) and bad (-0.7) cancel out
        let score = Lexicon::default().polarity("good idea, bad execution");
        assert!(score.abs() < 1e-12, "expected ~0.0, got {score}");
    }

    #[test]
    fn negation_flips_and_halves() {
        let score = Lexicon::default().polarity("not good");
        assert!((score - (-0.35)).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn contraction_negates() {
        let score = Lexicon::default().polarity("This isn't useful");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn negation_reaches_two_tokens_back() {
        let score = Lexicon::default().polarity("not a good week");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn negation_does_not_reach_three_tokens_back() {
        let score = Lexicon::default().polarity("not for a good reason");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn intensifier_strengthens() {
        let lex = Lexicon::default();
        let plain = lex.polarity("useful");
        let boosted = lex.polarity("very useful");
        assert!(boosted > plain, "expected {boosted} > {plain}");
    }

    #[test]
    fn intensified_word_clamps_to_one() {
        let score = Lexicon::default().polarity("extremely excellent");
        assert_eq!(score, 1.0, "expected clamped 1.0, got {score}");
    }

    #[test]
    fn score_stays_in_range_for_stacked_negatives() {
        let text = "awful terrible worst boring absolutely awful";
        let score = Lexicon::default().polarity(text);
        assert!((-1.0..=1.0).contains(&score), "out of range: {score}");
        assert_eq!(score, -1.0);
    }

    #[test]
    fn case_and_punctuation_ignored() {
        let score = Lexicon::default().polarity("GREAT!!!");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn overlay_adds_words() {
        let lex = Lexicon::from_yaml_str("words:\n  greenwashing: -0.7\n").unwrap();
        assert!(lex.polarity("pure greenwashing") < 0.0);
        assert_eq!(lex.len(), Lexicon::default().len() + 1);
    }

    #[test]
    fn overlay_replaces_existing_word() {
        let lex = Lexicon::from_yaml_str("words:\n  Great: -0.2\n").unwrap();
        assert!(lex.polarity("great") < 0.0);
    }

    #[test]
    fn overlay_adds_intensifier() {
        let lex = Lexicon::from_yaml_str("intensifiers:\n  mega: 1.5\n").unwrap();
        let boosted = lex.polarity("mega useful");
        assert!((boosted - 0.45).abs() < 1e-12, "got {boosted}");
    }

    #[test]
    fn empty_overlay_is_default() {
        let lex = Lexicon::from_yaml_str("").unwrap();
        assert_eq!(lex.len(), Lexicon::default().len());
    }

    #[test]
    fn overlay_rejects_out_of_range_weight() {
        let err = Lexicon::from_yaml_str("words:\n  stellar: 2.0\n").unwrap_err();
        assert!(
            matches!(err, AnalysisError::LexiconEntry { ref word, .. } if word == "stellar"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn overlay_rejects_non_positive_intensifier() {
        let err = Lexicon::from_yaml_str("intensifiers:\n  meh: 0\n").unwrap_err();
        assert!(matches!(err, AnalysisError::LexiconEntry { .. }));
    }

    #[test]
    fn overlay_rejects_malformed_yaml() {
        let err = Lexicon::from_yaml_str("words: [1, 2").unwrap_err();
        assert!(matches!(err, AnalysisError::LexiconParse(_)));
    }

    #[test]
    fn default_weights_are_in_range() {
        for &(word, weight) in WORDS {
            assert!(
                (-1.0..=1.0).contains(&weight) && weight != 0.0,
                "bad weight for {word}: {weight}"
            );
        }
    }
}
