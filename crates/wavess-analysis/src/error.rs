use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid {field} value {value}: must be a finite, non-negative number")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("no {what} to analyze")]
    EmptyInput { what: &'static str },

    #[error("lexicon parse error: {0}")]
    LexiconParse(#[from] serde_yaml::Error),

    #[error("invalid lexicon entry '{word}': {reason}")]
    LexiconEntry { word: String, reason: String },
}
