//! Post analytics for Wavess.
//!
//! Scores post and comment sentiment with a word lexicon, extracts hashtags
//! and keywords, classifies audience roles into fields, ranks posts by a
//! weighted engagement score, and aggregates everything into an
//! [`AnalysisReport`]. All functions are pure; loading the input tables is
//! left to `wavess-core`.

pub mod aggregate;
pub mod audience;
pub mod engagement;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod text;
pub mod types;

pub use aggregate::{
    group_mean_by_field, mean, sentiment_histogram, top_field, FieldAggregate, HistogramBin,
    MAX_HISTOGRAM_BINS,
};
pub use audience::{classify_members, classify_role, ClassifiedMember, Field};
pub use engagement::{best_post, engagement_score, score_posts, AnalyzedPost};
pub use error::AnalysisError;
pub use lexicon::Lexicon;
pub use pipeline::analyze;
pub use text::{
    extract_hashtags, extract_keywords, sentiment_label, sentiment_polarity, top_keywords,
    KeywordCount, SentimentLabel,
};
pub use types::{AnalysisOptions, AnalysisReport, AnalysisSummary, AnalyzedComment};
