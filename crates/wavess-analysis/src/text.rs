//! Sentiment, hashtag, and keyword extraction over free text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Tokens longer than this many characters count as keywords.
pub const KEYWORD_MIN_EXCLUSIVE_LEN: usize = 4;

/// Keyword count used when the caller has no preference.
pub const DEFAULT_TOP_KEYWORDS: usize = 5;

static DEFAULT_LEXICON: LazyLock<Lexicon> = LazyLock::new(Lexicon::default);

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));

static WORD_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid word boundary regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// A keyword and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub frequency: usize,
}

/// Polarity of `text` in `[-1.0, 1.0]` using the built-in lexicon.
///
/// Returns `0.0` for empty or neutral text. Use [`Lexicon::polarity`] to
/// score with a customized lexicon.
#[must_use]
pub fn sentiment_polarity(text: &str) -> f64 {
    DEFAULT_LEXICON.polarity(text)
}

/// Label a polarity by its sign. Exactly `0.0` (and NaN) is neutral.
#[must_use]
pub fn sentiment_label(polarity: f64) -> SentimentLabel {
    if polarity > 0.0 {
        SentimentLabel::Positive
    } else if polarity < 0.0 {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// All `#word` hashtags in order of appearance, duplicates kept.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Lowercased word tokens longer than [`KEYWORD_MIN_EXCLUSIVE_LEN`] characters, in order.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    WORD_BOUNDARY_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|w| w.chars().count() > KEYWORD_MIN_EXCLUSIVE_LEN)
        .map(str::to_lowercase)
        .collect()
}

/// The `n` most frequent keywords, most frequent first.
///
/// Ties keep the order in which the keywords first appeared.
#[must_use]
pub fn top_keywords(keywords: &[String], n: usize) -> Vec<KeywordCount> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<KeywordCount> = Vec::new();

    for keyword in keywords {
        if let Some(&idx) = first_seen.get(keyword.as_str()) {
            counts[idx].frequency += 1;
        } else {
            first_seen.insert(keyword.as_str(), counts.len());
            counts.push(KeywordCount {
                keyword: keyword.clone(),
                frequency: 1,
            });
        }
    }

    // Stable sort keeps first-appearance order among equal frequencies.
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts.truncate(n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn polarity_of_empty_text_is_zero() {
        assert_eq!(sentiment_polarity(""), 0.0);
    }

    #[test]
    fn polarity_signs_follow_tone() {
        assert!(sentiment_polarity("Excellent work by the whole team!") > 0.0);
        assert!(sentiment_polarity("This is a terrible take.") < 0.0);
        assert_eq!(sentiment_polarity("The meeting is on Tuesday."), 0.0);
    }

    #[test]
    fn polarity_stays_in_range() {
        let samples = [
            "",
            "!!!",
            "🙂 émoji ünïcode",
            "best best best best extremely wonderful",
            "worst awful terrible not good never great",
            "#AI #ML",
        ];
        for text in samples {
            let p = sentiment_polarity(text);
            assert!((-1.0..=1.0).contains(&p), "{text:?} scored {p}");
        }
    }

    #[test]
    fn polarity_is_idempotent() {
        let text = "Really useful report, love the transparency.";
        assert_eq!(sentiment_polarity(text), sentiment_polarity(text));
    }

    #[test]
    fn label_tie_breaks_on_exact_zero() {
        assert_eq!(sentiment_label(0.0), SentimentLabel::Neutral);
        assert_eq!(sentiment_label(-0.0), SentimentLabel::Neutral);
        assert_eq!(sentiment_label(0.3), SentimentLabel::Positive);
        assert_eq!(sentiment_label(-0.1), SentimentLabel::Negative);
        assert_eq!(sentiment_label(1e-12), SentimentLabel::Positive);
    }

    #[test]
    fn label_of_nan_is_neutral() {
        assert_eq!(sentiment_label(f64::NAN), SentimentLabel::Neutral);
    }

    #[test]
    fn label_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
        assert_eq!(SentimentLabel::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn hashtags_in_order() {
        assert_eq!(
            extract_hashtags("Check out #AI and #MachineLearning today"),
            vec!["#AI", "#MachineLearning"]
        );
    }

    #[test]
    fn hashtags_keep_duplicates_and_digits() {
        assert_eq!(
            extract_hashtags("#ESG2030 then #net_zero and #ESG2030 again"),
            vec!["#ESG2030", "#net_zero", "#ESG2030"]
        );
    }

    #[test]
    fn hashtags_need_a_word_character() {
        assert!(extract_hashtags("# not a tag, nor is #!").is_empty());
        assert!(extract_hashtags("").is_empty());
    }

    #[test]
    fn hashtag_stops_at_punctuation() {
        assert_eq!(extract_hashtags("Go #team!"), vec!["#team"]);
    }

    #[test]
    fn keywords_use_strict_length_threshold() {
        assert_eq!(extract_keywords("The quick fox jumps"), vec!["quick", "jumps"]);
        assert!(extract_keywords("four word list").is_empty());
    }

    #[test]
    fn keywords_are_lowercased_and_include_hashtag_words() {
        assert_eq!(
            extract_keywords("Climate DATA drives #Sustainability"),
            vec!["climate", "drives", "sustainability"]
        );
    }

    #[test]
    fn keywords_count_characters_not_bytes() {
        // "café" is 4 chars (5 bytes): excluded. "naïve" is 5 chars: kept.
        assert_eq!(extract_keywords("café naïve"), vec!["naïve"]);
    }

    #[test]
    fn top_keywords_by_frequency_then_first_appearance() {
        let keywords = strings(&[
            "carbon", "policy", "carbon", "report", "policy", "markets", "carbon",
        ]);
        let top = top_keywords(&keywords, 3);
        assert_eq!(
            top,
            vec![
                KeywordCount {
                    keyword: "carbon".to_string(),
                    frequency: 3
                },
                KeywordCount {
                    keyword: "policy".to_string(),
                    frequency: 2
                },
                KeywordCount {
                    keyword: "report".to_string(),
                    frequency: 1
                },
            ]
        );
    }

    #[test]
    fn top_keywords_shorter_than_n() {
        let top = top_keywords(&strings(&["alpha", "bravo"]), DEFAULT_TOP_KEYWORDS);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].keyword, "alpha");
    }

    #[test]
    fn top_keywords_empty() {
        assert!(top_keywords(&[], DEFAULT_TOP_KEYWORDS).is_empty());
    }
}
