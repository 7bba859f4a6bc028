//! Explanation ranker
//!
//! Ranked, truncated, residual-collapsed feature-importance lists derived
//! from the per-source contribution matrix, plus the column-naming
//! convention that ties contributions to raw feature values.

pub mod naming;
mod ranker;

pub use ranker::{
    rank_global, rank_local, RankedFeature, Ranking, DEFAULT_GLOBAL_RESULT_SIZE,
    DEFAULT_LOCAL_RESULT_SIZE, RESIDUAL_LABEL,
};
