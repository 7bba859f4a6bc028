//! CLI error types
//!
//! Everything here is fatal: the process prints the error and exits
//! non-zero.

use thiserror::Error;

use crate::catalogue::CatalogueError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Fatal CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalogue failed to load or validate
    #[error("CSC_STARTUP_FAILED: {0}")]
    StartupFailed(#[from] CatalogueError),

    /// Invalid command-line argument
    #[error("CSC_INVALID_ARGUMENT: {0}")]
    InvalidArgument(String),

    /// I/O failure outside catalogue loading
    #[error("CSC_IO_ERROR: {0}")]
    Io(String),

    /// HTTP server failed to start or crashed
    #[error("CSC_SERVER_FAILED: {0}")]
    ServerFailed(String),
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
