//! CLI error types.

use pkgstitch::error::FetchError;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest or piece retrieval, or output file handling, failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
