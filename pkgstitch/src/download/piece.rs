//! Single-piece streaming fetch.

use std::io::{self, Read, Write};
use std::path::Path;

use super::checksum::{DualHasher, PieceDigests};
use super::progress::ProgressReporter;
use super::session::TransferSession;
use crate::error::{FetchError, FetchResult};
use crate::http::HttpClient;

/// Stream one piece body onto the end of `out`.
///
/// Each chunk read from the response is written, hashed with both digest
/// algorithms and counted in `session` before the reporter is notified.
/// Returns the digests once the body reaches end-of-stream.
///
/// # Errors
///
/// - Request or body read failures map to [`FetchError::RequestBuild`] /
///   [`FetchError::Transport`]
/// - Write failures map to [`FetchError::File`] against `out_path`
///
/// Both are fatal to the run; nothing is retried.
pub fn fetch_piece<C, W, R>(
    client: &C,
    url: &str,
    out: &mut W,
    out_path: &Path,
    session: &mut TransferSession,
    reporter: &R,
    chunk_size: usize,
) -> FetchResult<PieceDigests>
where
    C: HttpClient + ?Sized,
    W: Write + ?Sized,
    R: ProgressReporter + ?Sized,
{
    let mut body = client.get(url)?;

    let mut hasher = DualHasher::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let bytes_read = match body.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    reason: format!("Read error: {}", e),
                })
            }
        };

        let chunk = &buffer[..bytes_read];
        out.write_all(chunk)
            .map_err(|e| FetchError::file("write", out_path, e))?;
        hasher.update(chunk);

        session.record(bytes_read as u64);
        reporter.on_progress(&session.snapshot());
    }

    Ok(hasher.finalize())
}
