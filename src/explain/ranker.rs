//! Explanation ranker
//!
//! Derives per-source and aggregate feature-importance rankings from the
//! contribution matrix.
//!
//! The local ranking keeps the chart legible by collapsing the long tail
//! of low-importance features into a single residual entry whose value is
//! the exact sum of the dropped signed contributions, so total
//! explanatory mass is conserved by construction.

use serde::Serialize;

use crate::catalogue::FeatureMatrix;

use super::naming;

/// Default number of ranked features in the per-source chart
pub const DEFAULT_LOCAL_RESULT_SIZE: usize = 10;

/// Default number of ranked features in the aggregate chart
pub const DEFAULT_GLOBAL_RESULT_SIZE: usize = 20;

/// Label of the residual bucket: the aggregate of remaining features.
///
/// The residual is pinned to the end of the list regardless of its
/// numeric value; this is a display-priority override, not a sort bug.
pub const RESIDUAL_LABEL: &str = "ARF";

/// One ranked feature with its signed contribution (or mean contribution)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedFeature {
    pub name: String,
    pub value: f64,
}

impl RankedFeature {
    fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ranking outcome.
///
/// `Unavailable` is an ordinary value, not an error: the requested source
/// has no contribution row, or an aggregate was asked of too few sources.
/// The presentation layer only branches on availability.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "features", rename_all = "snake_case")]
pub enum Ranking {
    Available(Vec<RankedFeature>),
    Unavailable,
}

impl Ranking {
    /// True when a ranked list is present
    pub fn is_available(&self) -> bool {
        matches!(self, Ranking::Available(_))
    }

    /// The ranked features, if available
    pub fn features(&self) -> Option<&[RankedFeature]> {
        match self {
            Ranking::Available(features) => Some(features),
            Ranking::Unavailable => None,
        }
    }
}

/// Per-source ranking with residual collapsing.
///
/// Feature columns are de-suffixed and auxiliary columns excluded, then
/// sorted by signed value descending and re-sorted by absolute value
/// descending to pick the `result_size` most influential features
/// regardless of sign. Everything beyond the cut collapses into the
/// residual entry. Final presentation order is ascending by signed value
/// with the residual always last. Output size is
/// `min(features, result_size) + 1`.
pub fn rank_local(source: &str, contributions: &FeatureMatrix, result_size: usize) -> Ranking {
    let row = match contributions.row(source) {
        Some(row) => row,
        None => return Ranking::Unavailable,
    };

    let mut entries = feature_entries(contributions, row);

    // Signed order first so ties on |value| keep the positive
    // contribution ahead, matching the published presentation.
    entries.sort_by(|a, b| b.value.total_cmp(&a.value));
    entries.sort_by(|a, b| b.value.abs().total_cmp(&a.value.abs()));

    let residual: f64 = entries.iter().skip(result_size).map(|e| e.value).sum();
    entries.truncate(result_size);

    entries.sort_by(|a, b| a.value.total_cmp(&b.value));
    entries.push(RankedFeature::new(RESIDUAL_LABEL, residual));

    Ranking::Available(entries)
}

/// Aggregate ranking over a set of sources.
///
/// Requires at least 3 sources with contribution rows; identifiers
/// without a row are ignored. Column-wise means are ranked descending and
/// the top `result_size` reversed so the most important feature comes
/// last. No residual collapsing.
pub fn rank_global(sources: &[String], contributions: &FeatureMatrix, result_size: usize) -> Ranking {
    let rows: Vec<&[f64]> = sources
        .iter()
        .filter_map(|source| contributions.row(source))
        .collect();
    if rows.len() < 3 {
        return Ranking::Unavailable;
    }

    let count = rows.len() as f64;
    let means: Vec<f64> = (0..contributions.columns().len())
        .map(|col| rows.iter().map(|row| row[col]).sum::<f64>() / count)
        .collect();

    let mut entries = feature_entries(contributions, &means);
    entries.sort_by(|a, b| b.value.total_cmp(&a.value));
    entries.truncate(result_size);
    entries.reverse();

    Ranking::Available(entries)
}

/// Extracts (feature name, value) pairs, dropping auxiliary columns and
/// any column outside the naming convention.
fn feature_entries(contributions: &FeatureMatrix, row: &[f64]) -> Vec<RankedFeature> {
    contributions
        .columns()
        .iter()
        .zip(row)
        .filter(|(column, _)| !naming::is_auxiliary(column))
        .filter_map(|(column, value)| {
            naming::feature_name(column).map(|name| RankedFeature::new(name, *value))
        })
        .collect()
}
