//! Filter engine
//!
//! Multi-criterion row filtering over the catalogue: probability
//! threshold, class membership, explanation availability, and positional
//! cone search using great-circle separation.

mod criteria;
mod engine;
mod separation;

pub use criteria::{ConeSearch, FilterCriteria};
pub use engine::apply_filters;
pub use separation::{angular_separation_arcmin, ARCMIN_PER_DEG};
