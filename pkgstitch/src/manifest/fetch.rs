//! Manifest retrieval over HTTP.

use std::io::Read;

use tracing::info;

use super::Manifest;
use crate::error::{FetchError, FetchResult};
use crate::http::HttpClient;

/// Fetch and decode the manifest at `url`.
///
/// # Errors
///
/// - [`FetchError::RequestBuild`] / [`FetchError::Transport`] if the request
///   fails or the body cannot be read
/// - [`FetchError::Decode`] if the body is not a JSON manifest
pub fn fetch_manifest<C: HttpClient + ?Sized>(client: &C, url: &str) -> FetchResult<Manifest> {
    let mut body = Vec::new();
    client
        .get(url)?
        .read_to_end(&mut body)
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            reason: format!("Read error: {}", e),
        })?;

    let manifest: Manifest = serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    info!(
        url,
        pieces = manifest.pieces.len(),
        size = manifest.original_file_size,
        "Fetched manifest"
    );

    Ok(manifest)
}
