//! Feature/contribution scatter adapter
//!
//! For one chosen feature, pairs each selected source's raw feature
//! value with its contribution value (matched through the column-naming
//! convention), tagged with the source's primary class. Sources missing
//! either value are skipped; the plot only shows sources that have both.

use serde::Serialize;

use crate::catalogue::{FeatureMatrix, SourceClass, SourceRecord};
use crate::explain::naming;

/// One scatter point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub feature_value: f64,
    pub contribution: f64,
    pub class1: SourceClass,
}

/// Builds scatter data for a feature across the given rows.
///
/// Returns `None` when the feature is unknown to the raw-value matrix.
pub fn feature_scatter(
    feature: &str,
    rows: &[SourceRecord],
    feature_values: &FeatureMatrix,
    contributions: &FeatureMatrix,
) -> Option<Vec<ScatterPoint>> {
    if !feature_values.contains_column(feature) {
        return None;
    }
    let column = naming::contribution_column(feature);

    let points = rows
        .iter()
        .filter_map(|record| {
            let feature_value = feature_values.value(&record.name, feature)?;
            let contribution = contributions.value(&record.name, &column)?;
            Some(ScatterPoint {
                name: record.name.clone(),
                feature_value,
                contribution,
                class1: record.class1,
            })
        })
        .collect();
    Some(points)
}
