//! Weighted engagement scoring and best-post selection.

use serde::{Deserialize, Serialize};
use wavess_core::Post;

use crate::error::AnalysisError;
use crate::lexicon::Lexicon;

pub const LIKE_WEIGHT: f64 = 0.5;
pub const COMMENT_WEIGHT: f64 = 0.3;
pub const SHARE_WEIGHT: f64 = 0.2;

/// A post with its derived sentiment and engagement score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedPost {
    #[serde(flatten)]
    pub post: Post,
    pub sentiment_polarity: f64,
    pub engagement_score: f64,
}

impl AnalyzedPost {
    /// Score one post.
    ///
    /// # Errors
    ///
    /// Propagates [`AnalysisError::InvalidInput`] from [`engagement_score`].
    #[allow(clippy::cast_precision_loss)]
    pub fn new(post: Post, lexicon: &Lexicon) -> Result<Self, AnalysisError> {
        let engagement_score = engagement_score(
            post.likes as f64,
            post.comments as f64,
            post.shares as f64,
        )?;
        Ok(Self {
            sentiment_polarity: lexicon.polarity(&post.text),
            engagement_score,
            post,
        })
    }
}

/// `0.5 * likes + 0.3 * comments + 0.2 * shares`.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidInput`] if any input is negative, NaN, or infinite.
pub fn engagement_score(likes: f64, comments: f64, shares: f64) -> Result<f64, AnalysisError> {
    for (field, value) in [("likes", likes), ("comments", comments), ("shares", shares)] {
        if !value.is_finite() || value < 0.0 {
            return Err(AnalysisError::InvalidInput { field, value });
        }
    }
    Ok(LIKE_WEIGHT * likes + COMMENT_WEIGHT * comments + SHARE_WEIGHT * shares)
}

/// Attach sentiment and engagement score to every post, preserving order.
///
/// # Errors
///
/// Returns the first [`AnalysisError::InvalidInput`] encountered.
pub fn score_posts(posts: &[Post], lexicon: &Lexicon) -> Result<Vec<AnalyzedPost>, AnalysisError> {
    posts
        .iter()
        .map(|post| AnalyzedPost::new(post.clone(), lexicon))
        .collect()
}

/// The post with the highest engagement score; the earliest wins on ties.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] if `posts` is empty.
pub fn best_post(posts: &[AnalyzedPost]) -> Result<&AnalyzedPost, AnalysisError> {
    let mut iter = posts.iter();
    let mut best = iter.next().ok_or(AnalysisError::EmptyInput { what: "posts" })?;
    for post in iter {
        if post.engagement_score > best.engagement_score {
            best = post;
        }
    }
    Ok(best)
}
