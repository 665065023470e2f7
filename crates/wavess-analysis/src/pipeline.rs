//! Full analysis run over one dataset.

use wavess_core::Dataset;

use crate::aggregate::{group_mean_by_field, mean, sentiment_histogram, top_field};
use crate::audience::classify_members;
use crate::engagement::{best_post, score_posts};
use crate::error::AnalysisError;
use crate::lexicon::Lexicon;
use crate::text::{extract_hashtags, extract_keywords, sentiment_label, top_keywords};
use crate::types::{AnalysisOptions, AnalysisReport, AnalysisSummary, AnalyzedComment};

/// Run every analysis stage over `dataset`.
///
/// 1. Score all posts (sentiment + engagement).
/// 2. Analyze the primary (first) post: sentiment label, hashtags, keywords.
/// 3. Score comments and bin their polarities.
/// 4. Classify the audience and rank fields by mean ICP relevance.
/// 5. Pick the best-performing post and assemble the summary.
///
/// An empty posts table leaves the primary post neutral with no hashtags or
/// keywords, but still fails at step 5.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] naming the first empty table among
/// comments, audience, and posts (in that order).
pub fn analyze(
    dataset: &Dataset,
    lexicon: &Lexicon,
    options: &AnalysisOptions,
) -> Result<AnalysisReport, AnalysisError> {
    // Step 1: Score posts.
    let posts = score_posts(&dataset.posts, lexicon)?;

    // Step 2: Primary post.
    let primary_post = posts.first().cloned();
    let primary_text = primary_post.as_ref().map_or("", |p| p.post.text.as_str());
    let post_sentiment = primary_post.as_ref().map_or(0.0, |p| p.sentiment_polarity);
    let hashtags = extract_hashtags(primary_text);
    let keywords = top_keywords(&extract_keywords(primary_text), options.top_keywords);

    tracing::debug!(
        hashtags = hashtags.len(),
        keywords = keywords.len(),
        post_sentiment,
        "primary post analyzed"
    );

    // Step 3: Comments.
    let comments: Vec<AnalyzedComment> = dataset
        .comments
        .iter()
        .map(|c| AnalyzedComment {
            sentiment_polarity: lexicon.polarity(&c.text),
            comment: c.clone(),
        })
        .collect();
    let polarities: Vec<f64> = comments.iter().map(|c| c.sentiment_polarity).collect();
    let avg_comment_sentiment =
        mean(&polarities).map_err(|_| AnalysisError::EmptyInput { what: "comments" })?;
    let comment_histogram = sentiment_histogram(&polarities, options.histogram_bins);

    // Step 4: Audience.
    let audience = classify_members(&dataset.audience);
    let relevances: Vec<f64> = audience.iter().map(|m| m.member.relevance_to_icp).collect();
    let avg_icp_relevance =
        mean(&relevances).map_err(|_| AnalysisError::EmptyInput { what: "audience" })?;
    let field_aggregates = group_mean_by_field(&audience);
    let top = top_field(&field_aggregates);

    tracing::debug!(
        fields = field_aggregates.len(),
        top_field = %top.field,
        "audience classified"
    );

    // Step 5: Best post + summary.
    let best = best_post(&posts)?;
    let summary = AnalysisSummary {
        post_sentiment_label: sentiment_label(post_sentiment),
        post_sentiment,
        avg_comment_sentiment,
        avg_icp_relevance,
        top_field: top.field,
        best_post_id: best.post.id.clone(),
        best_post_score: best.engagement_score,
    };

    tracing::info!(
        posts = posts.len(),
        comments = comments.len(),
        audience = audience.len(),
        best_post = %summary.best_post_id,
        "analysis complete"
    );

    Ok(AnalysisReport {
        primary_post,
        hashtags,
        keywords,
        posts,
        comments,
        comment_histogram,
        audience,
        field_aggregates,
        summary,
    })
}
