//! Explanation Ranking Invariant Tests
//!
//! End-to-end properties of the local and aggregate rankings:
//! - Total contribution is conserved through residual collapsing
//! - The residual bucket is always last
//! - Aggregate rankings need at least three contributing sources
//! - Column naming round-trips between feature and contribution names

use cscview::catalogue::FeatureMatrix;
use cscview::explain::naming::{contribution_column, feature_name, is_auxiliary};
use cscview::explain::{
    rank_global, rank_local, Ranking, DEFAULT_GLOBAL_RESULT_SIZE, DEFAULT_LOCAL_RESULT_SIZE,
    RESIDUAL_LABEL,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn matrix(columns: &[&str], rows: Vec<(&str, Vec<f64>)>) -> FeatureMatrix {
    FeatureMatrix::new(
        columns.iter().map(|c| c.to_string()).collect(),
        rows.into_iter()
            .map(|(name, values)| (name.to_string(), values))
            .collect(),
    )
    .unwrap()
}

fn wide_matrix() -> FeatureMatrix {
    let columns: Vec<String> = (0..20).map(|i| format!("feat{i:02}_shap")).collect();
    let values: Vec<f64> = (0..20)
        .map(|i| (i as f64 - 10.0) * if i % 2 == 0 { 0.1 } else { -0.07 })
        .collect();
    FeatureMatrix::new(columns, vec![("src".to_string(), values)]).unwrap()
}

// =============================================================================
// Naming Convention Tests
// =============================================================================

/// Feature and contribution names round-trip through the suffix.
#[test]
fn test_naming_round_trip() {
    for name in ["hardness", "flux_aper_b", "var_prob"] {
        let column = contribution_column(name);
        assert_eq!(feature_name(&column), Some(name));
    }
}

/// A bare suffix has no feature name behind it.
#[test]
fn test_bare_suffix_is_not_a_feature() {
    assert_eq!(feature_name("_shap"), None);
    assert_eq!(feature_name("hardness"), None);
}

/// Positional and bookkeeping columns are excluded from ranking.
#[test]
fn test_auxiliary_columns_recognised() {
    for column in ["gal_b2", "gal_l2", "class", "pred_prob"] {
        assert!(is_auxiliary(column));
    }
    assert!(!is_auxiliary("hardness_shap"));
}

// =============================================================================
// Local Ranking Tests
// =============================================================================

/// Sum over the ranked list equals the sum over the full row.
#[test]
fn test_local_conservation_at_default_size() {
    let matrix = wide_matrix();
    let full: f64 = matrix.row("src").unwrap().iter().sum();

    let ranking = rank_local("src", &matrix, DEFAULT_LOCAL_RESULT_SIZE);
    let ranked: f64 = ranking.features().unwrap().iter().map(|f| f.value).sum();
    assert!((ranked - full).abs() < 1e-12);
}

/// The per-source chart defaults to 10 features, the aggregate to 20.
#[test]
fn test_chart_defaults() {
    assert_eq!(DEFAULT_LOCAL_RESULT_SIZE, 10);
    assert_eq!(DEFAULT_GLOBAL_RESULT_SIZE, 20);

    let matrix = wide_matrix();
    let local = rank_local("src", &matrix, DEFAULT_LOCAL_RESULT_SIZE);
    // 10 kept features plus the residual
    assert_eq!(local.features().unwrap().len(), 11);
}

/// Output is min(features, result_size) + 1 entries, residual last.
#[test]
fn test_local_output_size_and_residual_position() {
    let matrix = wide_matrix();

    let truncated = rank_local("src", &matrix, 5);
    let features = truncated.features().unwrap();
    assert_eq!(features.len(), 6);
    assert_eq!(features.last().unwrap().name, RESIDUAL_LABEL);

    let oversized = rank_local("src", &matrix, 100);
    let features = oversized.features().unwrap();
    assert_eq!(features.len(), 21);
    assert_eq!(features.last().unwrap().name, RESIDUAL_LABEL);
    assert_eq!(features.last().unwrap().value, 0.0);
}

/// Kept features are displayed ascending by signed value.
#[test]
fn test_local_display_order_ascending() {
    let ranking = rank_local("src", &wide_matrix(), 8);
    let features = ranking.features().unwrap();
    let kept = &features[..features.len() - 1];
    for pair in kept.windows(2) {
        assert!(pair[0].value <= pair[1].value);
    }
}

/// The cut keeps the largest absolute contributions regardless of sign.
#[test]
fn test_local_cut_is_by_absolute_value() {
    let matrix = matrix(
        &["big_neg_shap", "small_pos_shap", "big_pos_shap"],
        vec![("src", vec![-0.9, 0.01, 0.7])],
    );
    let ranking = rank_local("src", &matrix, 2);
    let names: Vec<&str> = ranking
        .features()
        .unwrap()
        .iter()
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(names, ["big_neg", "big_pos", RESIDUAL_LABEL]);
}

/// A source without a contribution row yields Unavailable, not an error.
#[test]
fn test_local_unknown_source_unavailable() {
    assert_eq!(rank_local("ghost", &wide_matrix(), 5), Ranking::Unavailable);
}

// =============================================================================
// Aggregate Ranking Tests
// =============================================================================

/// Fewer than three contributing sources makes the aggregate unavailable.
#[test]
fn test_global_minimum_population() {
    let matrix = matrix(
        &["a_shap", "b_shap"],
        vec![
            ("s1", vec![0.4, -0.1]),
            ("s2", vec![0.2, 0.1]),
            ("s3", vec![0.0, 0.3]),
        ],
    );

    for n in 0..3 {
        let ids: Vec<String> = (1..=n).map(|i| format!("s{i}")).collect();
        assert_eq!(rank_global(&ids, &matrix, 5), Ranking::Unavailable);
    }

    let ids: Vec<String> = (1..=3).map(|i| format!("s{i}")).collect();
    assert!(rank_global(&ids, &matrix, 5).is_available());
}

/// Identifiers without contribution rows count for nothing.
#[test]
fn test_global_missing_ids_do_not_count() {
    let matrix = matrix(
        &["a_shap"],
        vec![("s1", vec![0.1]), ("s2", vec![0.2])],
    );
    let ids = vec![
        "s1".to_string(),
        "s2".to_string(),
        "ghost1".to_string(),
        "ghost2".to_string(),
    ];
    assert_eq!(rank_global(&ids, &matrix, 5), Ranking::Unavailable);
}

/// Aggregate values are column means, ordered least to most important.
#[test]
fn test_global_means_least_to_most() {
    let matrix = matrix(
        &["a_shap", "b_shap", "c_shap"],
        vec![
            ("s1", vec![0.9, 0.3, -0.6]),
            ("s2", vec![0.6, 0.3, -0.6]),
            ("s3", vec![0.3, 0.3, -0.6]),
        ],
    );
    let ids: Vec<String> = (1..=3).map(|i| format!("s{i}")).collect();
    let ranking = rank_global(&ids, &matrix, 3);
    let features = ranking.features().unwrap();

    // Means: a = 0.6, b = 0.3, c = -0.6; reversed for display
    assert_eq!(features[0].name, "c");
    assert_eq!(features[1].name, "b");
    assert_eq!(features[2].name, "a");
    assert!((features[2].value - 0.6).abs() < 1e-12);
}

/// The aggregate has no residual bucket.
#[test]
fn test_global_has_no_residual() {
    let matrix = wide_matrix();
    let mut rows: Vec<(String, Vec<f64>)> = Vec::new();
    for i in 0..4 {
        rows.push((format!("s{i}"), matrix.row("src").unwrap().to_vec()));
    }
    let matrix = FeatureMatrix::new(matrix.columns().to_vec(), rows).unwrap();

    let ids: Vec<String> = (0..4).map(|i| format!("s{i}")).collect();
    let ranking = rank_global(&ids, &matrix, 5);
    let features = ranking.features().unwrap();
    assert_eq!(features.len(), 5);
    assert!(features.iter().all(|f| f.name != RESIDUAL_LABEL));
}
