//! Catalogue store
//!
//! Read-only in-memory tables of classified sources plus the companion
//! contribution and raw feature-value matrices. Loaded once at session
//! start, immutable for the lifetime of the process.

mod errors;
mod loader;
mod store;
mod types;

pub use errors::{CatalogueError, CatalogueResult};
pub use loader::{
    CatalogueLoader, CLASSIFICATION_FILE, CONTRIBUTIONS_FILE, FEATURE_VALUES_FILE,
};
pub use store::{Catalogue, ClassificationTable, FeatureMatrix};
pub use types::{SourceClass, SourceRecord};
