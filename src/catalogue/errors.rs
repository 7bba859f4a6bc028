//! # Catalogue Errors
//!
//! Error types for catalogue loading and validation.
//!
//! All of these are startup-fatal: the dashboard never serves a partially
//! loaded catalogue.

use thiserror::Error;

/// Result type for catalogue operations
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Errors raised while loading or validating the catalogue tables
#[derive(Debug, Clone, Error)]
pub enum CatalogueError {
    /// Required catalogue file does not exist
    #[error("Catalogue file missing: {0}")]
    MissingFile(String),

    /// File exists but could not be read
    #[error("Failed to read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    /// A record failed to parse or validate
    #[error("Malformed record in {path}, line {line}: {reason}")]
    MalformedRecord {
        path: String,
        line: usize,
        reason: String,
    },

    /// Class symbol outside the fixed 8-symbol enumeration
    #[error("Unknown source class '{0}'")]
    UnknownClass(String),

    /// Source identifier appears more than once
    #[error("Duplicate source identifier '{0}'")]
    DuplicateSource(String),

    /// Cross-table consistency violation
    #[error("Inconsistent catalogue tables: {0}")]
    Inconsistent(String),
}

impl CatalogueError {
    /// Malformed-record constructor with path context
    pub fn malformed(path: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}
