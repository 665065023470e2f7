use serde::{Deserialize, Serialize};
use wavess_core::Comment;

use crate::aggregate::{FieldAggregate, HistogramBin, DEFAULT_HISTOGRAM_BINS};
use crate::audience::{ClassifiedMember, Field};
use crate::engagement::AnalyzedPost;
use crate::text::{KeywordCount, SentimentLabel, DEFAULT_TOP_KEYWORDS};

/// A comment with its sentiment polarity attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub sentiment_polarity: f64,
}

/// Tunables for one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// How many keywords to keep for the primary post.
    pub top_keywords: usize,
    /// Bucket count of the comment sentiment histogram.
    pub histogram_bins: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_keywords: DEFAULT_TOP_KEYWORDS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

/// Headline numbers of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub post_sentiment_label: SentimentLabel,
    pub post_sentiment: f64,
    pub avg_comment_sentiment: f64,
    /// Mean ICP relevance over the whole audience, as a fraction.
    pub avg_icp_relevance: f64,
    pub top_field: Field,
    pub best_post_id: String,
    pub best_post_score: f64,
}

/// Everything a presentation layer needs to render one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// First row of the posts table; the post the dashboard is about.
    pub primary_post: Option<AnalyzedPost>,
    pub hashtags: Vec<String>,
    pub keywords: Vec<KeywordCount>,
    pub posts: Vec<AnalyzedPost>,
    pub comments: Vec<AnalyzedComment>,
    pub comment_histogram: Vec<HistogramBin>,
    pub audience: Vec<ClassifiedMember>,
    pub field_aggregates: Vec<FieldAggregate>,
    pub summary: AnalysisSummary,
}
