//! Error types for manifest and piece fetching.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for fetch and assembly operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Fatal errors that abort an assembly run.
///
/// Consistency problems (offset, size or hash mismatches) are not errors;
/// see [`crate::download::ConsistencyWarning`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client itself could not be created.
    #[error("failed to create HTTP client: {0}")]
    Client(String),

    /// The request could not be constructed (usually a malformed URL).
    #[error("failed to build request for {url}: {reason}")]
    RequestBuild { url: String, reason: String },

    /// Network failure while sending a request or streaming its body.
    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    /// The manifest body is not JSON shaped like a manifest.
    #[error("failed to decode manifest from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// Local file failure on the output file (create, seek or write).
    #[error("failed to {action} {}: {source}", path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl FetchError {
    /// Map a reqwest error onto the request-build / transport split.
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::RequestBuild {
                url: url.to_string(),
                reason: err.to_string(),
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                reason: err.to_string(),
            }
        }
    }

    pub(crate) fn file(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::File {
            action,
            path: path.into(),
            source,
        }
    }
}
