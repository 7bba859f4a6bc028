//! Feature-name / contribution-column convention
//!
//! The contribution matrix stores derived column names: the feature name
//! plus a fixed 5-character suffix marking "this is a contribution, not a
//! raw value". The raw feature-value matrix uses the bare names. The
//! mapping is a pure function in both directions and must be exact and
//! reversible for every feature column.
//!
//! A small fixed set of auxiliary columns (coordinates and the predicted
//! class/probability carried alongside the contributions) is excluded
//! before any ranking.

/// Suffix marking a contribution column
pub const CONTRIBUTION_SUFFIX: &str = "_shap";

/// Non-feature columns present in the contribution table
pub const AUXILIARY_COLUMNS: [&str; 4] = ["gal_b2", "gal_l2", "class", "pred_prob"];

/// Maps a feature name to its contribution-column name.
pub fn contribution_column(feature: &str) -> String {
    format!("{feature}{CONTRIBUTION_SUFFIX}")
}

/// Recovers the feature name from a contribution-column name.
///
/// Returns `None` for columns that do not follow the convention.
pub fn feature_name(column: &str) -> Option<&str> {
    column
        .strip_suffix(CONTRIBUTION_SUFFIX)
        .filter(|name| !name.is_empty())
}

/// True for columns excluded from ranking.
pub fn is_auxiliary(column: &str) -> bool {
    AUXILIARY_COLUMNS.contains(&column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_reversible() {
        for feature in ["hardness", "var_prob", "w1_mag"] {
            let column = contribution_column(feature);
            assert_eq!(feature_name(&column), Some(feature));
        }
    }

    #[test]
    fn test_suffix_is_five_characters() {
        assert_eq!(CONTRIBUTION_SUFFIX.len(), 5);
    }

    #[test]
    fn test_unsuffixed_column_has_no_feature_name() {
        assert_eq!(feature_name("hardness"), None);
        assert_eq!(feature_name("gal_b2"), None);
    }

    #[test]
    fn test_bare_suffix_is_not_a_feature() {
        assert_eq!(feature_name("_shap"), None);
    }

    #[test]
    fn test_auxiliary_columns() {
        assert!(is_auxiliary("gal_b2"));
        assert!(is_auxiliary("pred_prob"));
        assert!(!is_auxiliary("hardness_shap"));
    }
}
