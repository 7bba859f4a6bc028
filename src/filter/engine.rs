//! Filter engine
//!
//! Applies the conjunction of submitted predicates to the classification
//! table and returns the matching subset. Predicates AND together in a
//! fixed, documented order:
//!
//! 1. `CMP1 > threshold` (strict)
//! 2. `class 1 ∈ allowed_classes` (empty set matches nothing)
//! 3. explanation availability, only when required
//! 4. cone search, only when present: separation ≤ radius, arcminutes
//!
//! The result preserves the original column set and row order among kept
//! rows. An empty result is valid output, not an error.

use crate::catalogue::{ClassificationTable, SourceRecord};

use super::criteria::FilterCriteria;
use super::separation::angular_separation_arcmin;

/// Applies the filter criteria and returns kept rows in catalogue order.
pub fn apply_filters(table: &ClassificationTable, criteria: &FilterCriteria) -> Vec<SourceRecord> {
    table
        .rows()
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .cloned()
        .collect()
}

/// Checks a single record against the full conjunction.
fn matches_criteria(record: &SourceRecord, criteria: &FilterCriteria) -> bool {
    // Threshold is a strict inequality: equality excludes the row
    if !(record.cmp1 > criteria.probability_threshold) {
        return false;
    }

    if !criteria.allowed_classes.contains(&record.class1) {
        return false;
    }

    if criteria.require_explanation && !record.has_explanation {
        return false;
    }

    if let Some(cone) = &criteria.cone {
        let separation =
            angular_separation_arcmin(cone.ra_deg, cone.dec_deg, record.ra, record.dec);
        // Boundary inclusive: a source exactly at the radius is kept
        if separation > cone.radius_arcmin {
            return false;
        }
    }

    true
}
