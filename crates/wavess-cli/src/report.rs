//! Markdown rendering of an [`AnalysisReport`].

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use wavess_analysis::{AnalysisReport, SentimentLabel};

fn label_with_emoji(label: SentimentLabel) -> String {
    let emoji = match label {
        SentimentLabel::Positive => "😊",
        SentimentLabel::Negative => "😞",
        SentimentLabel::Neutral => "😐",
    };
    format!("{label} {emoji}")
}

/// Escape a value for use inside a markdown table cell.
fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

/// Render `report` as a markdown document stamped with `generated_at`.
///
/// # Errors
///
/// Returns [`std::fmt::Error`] only if writing into the output buffer fails.
pub(crate) fn render_markdown(
    report: &AnalysisReport,
    generated_at: DateTime<Utc>,
) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let summary = &report.summary;

    writeln!(out, "# Wavess Post Performance Report")?;
    writeln!(out)?;
    writeln!(
        out,
        "_Generated {}_",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out)?;

    writeln!(out, "## Post Overview")?;
    writeln!(out)?;
    match &report.primary_post {
        Some(primary) => writeln!(out, "> {}", primary.post.text.replace('\n', "\n> "))?,
        None => writeln!(out, "No posts available.")?,
    }
    writeln!(out)?;

    writeln!(out, "## Post Sentiment")?;
    writeln!(out)?;
    writeln!(
        out,
        "- Sentiment: **{}**",
        label_with_emoji(summary.post_sentiment_label)
    )?;
    writeln!(out, "- Polarity: {:.2}", summary.post_sentiment)?;
    writeln!(out)?;

    writeln!(out, "## Hashtag & Keyword Insights")?;
    writeln!(out)?;
    if report.hashtags.is_empty() {
        writeln!(out, "No hashtags found in this post.")?;
    } else {
        writeln!(out, "Hashtags: {}", report.hashtags.join(", "))?;
    }
    writeln!(out)?;
    if report.keywords.is_empty() {
        writeln!(out, "No significant keywords detected.")?;
    } else {
        writeln!(out, "| Keyword | Frequency |")?;
        writeln!(out, "|---|---:|")?;
        for keyword in &report.keywords {
            writeln!(out, "| {} | {} |", cell(&keyword.keyword), keyword.frequency)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "## Engagement Metrics")?;
    writeln!(out)?;
    writeln!(
        out,
        "| Post | Likes | Comments | Shares | Sentiment | Engagement Score |"
    )?;
    writeln!(out, "|---|---:|---:|---:|---:|---:|")?;
    for analyzed in &report.posts {
        let post = &analyzed.post;
        writeln!(
            out,
            "| {} | {} | {} | {} | {:.2} | {:.2} |",
            cell(&post.id),
            post.likes,
            post.comments,
            post.shares,
            analyzed.sentiment_polarity,
            analyzed.engagement_score
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Comment Sentiment Analysis")?;
    writeln!(out)?;
    writeln!(out, "| Comment | Sentiment |")?;
    writeln!(out, "|---|---:|")?;
    for comment in &report.comments {
        writeln!(
            out,
            "| {} | {:.2} |",
            cell(&comment.comment.text),
            comment.sentiment_polarity
        )?;
    }
    writeln!(out)?;
    if !report.comment_histogram.is_empty() {
        writeln!(out, "Distribution:")?;
        writeln!(out)?;
        writeln!(out, "| Range | Comments |")?;
        writeln!(out, "|---|---:|")?;
        for bin in &report.comment_histogram {
            writeln!(out, "| {:.1} to {:.1} | {} |", bin.lower, bin.upper, bin.count)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "## Audience ICP Relevance")?;
    writeln!(out)?;
    writeln!(out, "| Name | Role | Field | Relevance to ICP |")?;
    writeln!(out, "|---|---|---|---:|")?;
    for classified in &report.audience {
        let member = &classified.member;
        writeln!(
            out,
            "| {} | {} | {} | {:.2} |",
            cell(&member.name),
            cell(&member.role),
            classified.field,
            member.relevance_to_icp
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Average ICP relevance: **{:.2}%**",
        summary.avg_icp_relevance * 100.0
    )?;
    writeln!(out)?;
    writeln!(out, "| Field | Members | Avg Relevance |")?;
    writeln!(out, "|---|---:|---:|")?;
    for aggregate in &report.field_aggregates {
        writeln!(
            out,
            "| {} | {} | {:.2}% |",
            aggregate.field,
            aggregate.member_count,
            aggregate.mean_relevance * 100.0
        )?;
    }
    writeln!(out)?;

    writeln!(out, "## Best-Performing Post")?;
    writeln!(out)?;
    writeln!(
        out,
        "Post **{}** with an engagement score of {:.2}.",
        summary.best_post_id, summary.best_post_score
    )?;
    writeln!(out)?;

    writeln!(out, "## Final Summary")?;
    writeln!(out)?;
    writeln!(
        out,
        "- Post sentiment: {}",
        label_with_emoji(summary.post_sentiment_label)
    )?;
    writeln!(
        out,
        "- Average comment sentiment: {:.2}",
        summary.avg_comment_sentiment
    )?;
    writeln!(
        out,
        "- Average ICP relevance: {:.2}%",
        summary.avg_icp_relevance * 100.0
    )?;
    writeln!(out, "- Top audience field: {}", summary.top_field)?;
    writeln!(out, "- Best post: {}", summary.best_post_id)?;

    Ok(out)
}
