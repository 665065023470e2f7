//! Means, per-field grouping, and histogram binning.

use serde::{Deserialize, Serialize};

use crate::audience::{ClassifiedMember, Field};
use crate::error::AnalysisError;

pub use wavess_core::MAX_HISTOGRAM_BINS;

/// Bin count matching the comment sentiment chart.
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

/// Mean ICP relevance of the members in one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAggregate {
    pub field: Field,
    pub mean_relevance: f64,
    pub member_count: usize,
}

impl FieldAggregate {
    /// Sentinel returned by [`top_field`] when there is nothing to rank.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            field: Field::Unknown,
            mean_relevance: 0.0,
            member_count: 0,
        }
    }
}

/// One equal-width bucket of a polarity histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Arithmetic mean.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] for an empty slice.
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Result<f64, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput { what: "values" });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean `relevance_to_icp` per field, highest mean first.
///
/// One entry per field present in `members`. Ties keep the order in which
/// the fields first appeared. Empty input yields an empty vector.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn group_mean_by_field(members: &[ClassifiedMember]) -> Vec<FieldAggregate> {
    // (field, sum, count) in first-occurrence order; at most seven fields.
    let mut groups: Vec<(Field, f64, usize)> = Vec::new();
    for m in members {
        if let Some(group) = groups.iter_mut().find(|(f, _, _)| *f == m.field) {
            group.1 += m.member.relevance_to_icp;
            group.2 += 1;
        } else {
            groups.push((m.field, m.member.relevance_to_icp, 1));
        }
    }

    let mut aggregates: Vec<FieldAggregate> = groups
        .into_iter()
        .map(|(field, sum, count)| FieldAggregate {
            field,
            mean_relevance: sum / count as f64,
            member_count: count,
        })
        .collect();
    aggregates.sort_by(|a, b| b.mean_relevance.total_cmp(&a.mean_relevance));
    aggregates
}

/// The highest-ranked aggregate, or [`FieldAggregate::unknown`] when empty.
#[must_use]
pub fn top_field(aggregates: &[FieldAggregate]) -> FieldAggregate {
    aggregates
        .first()
        .cloned()
        .unwrap_or_else(FieldAggregate::unknown)
}

/// Count polarities into `bins` equal-width buckets spanning `[-1.0, 1.0]`.
///
/// Values are clamped into range first; `1.0` lands in the last bucket.
/// Non-finite values are skipped. Zero bins yields an empty vector, and
/// `bins` is capped at [`MAX_HISTOGRAM_BINS`].
///
/// Each value is placed by comparing it against the same edges reported in
/// the returned bins, so a value always satisfies `lower <= v < upper`
/// (`v <= upper` for the last bin).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sentiment_histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let bins = bins.min(MAX_HISTOGRAM_BINS);
    if bins == 0 {
        return Vec::new();
    }

    // Edge i is (2i - n) / n; one rounding per edge, so 0.6 equals the literal 0.6.
    let n = bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| (2.0 * i as f64 - n) / n).collect();
    let mut hist: Vec<HistogramBin> = edges
        .windows(2)
        .map(|pair| HistogramBin {
            lower: pair[0],
            upper: pair[1],
            count: 0,
        })
        .collect();

    let lowers = &edges[..bins];
    for &v in values.iter().filter(|v| v.is_finite()) {
        let v = v.clamp(-1.0, 1.0);
        let idx = lowers.partition_point(|&lower| lower <= v).saturating_sub(1);
        hist[idx].count += 1;
    }
    hist
}
