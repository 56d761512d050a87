//! Sequential fetch-and-append assembly of a manifest's pieces.
//!
//! Pieces are fetched strictly one at a time in ascending offset order and
//! appended to a freshly created output file. Because nothing runs
//! concurrently, the file length before each piece equals the sum of the
//! pieces already written; that length is the ground truth checked against
//! the manifest's declared offsets and sizes.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::piece::fetch_piece;
use super::progress::{AssemblySummary, ProgressReporter};
use super::session::{throughput_mib_s, TransferSession, MIB};
use super::warning::ConsistencyWarning;
use crate::config::DownloadConfig;
use crate::error::{FetchError, FetchResult};
use crate::http::{HttpClient, ReqwestClient};
use crate::manifest::{fetch_manifest, Manifest};

/// Outcome of a completed assembly run.
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    /// Path of the assembled file.
    pub output_path: PathBuf,
    /// Final length of the output file.
    pub bytes_written: u64,
    /// Number of pieces fetched.
    pub pieces: usize,
    /// Wall time since the run started.
    pub elapsed: Duration,
    /// Every consistency warning raised, in order.
    pub warnings: Vec<ConsistencyWarning>,
}

impl AssemblyReport {
    /// True if no consistency warnings were raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn summary(&self) -> AssemblySummary {
        AssemblySummary {
            file_name: display_name(&self.output_path),
            size_mib: self.bytes_written as f64 / MIB,
            throughput_mib_s: throughput_mib_s(self.bytes_written, self.elapsed),
        }
    }
}

/// Drives manifest retrieval and piece-by-piece assembly.
#[derive(Debug)]
pub struct Assembler<C: HttpClient> {
    client: C,
    config: DownloadConfig,
}

impl Assembler<ReqwestClient> {
    /// Create an assembler backed by a real HTTP client.
    pub fn from_config(config: DownloadConfig) -> FetchResult<Self> {
        let client = ReqwestClient::new(&config)?;
        Ok(Self::new(client, config))
    }
}

impl<C: HttpClient> Assembler<C> {
    pub fn new(client: C, config: DownloadConfig) -> Self {
        Self { client, config }
    }

    /// Create `output`, fetch the manifest at `manifest_url` and assemble it.
    ///
    /// The output file is truncated if it already exists.
    ///
    /// # Errors
    ///
    /// Any fetch, create, seek or write failure aborts the run. Bytes already
    /// written stay in the output file.
    pub fn assemble<R: ProgressReporter + ?Sized>(
        &self,
        manifest_url: &str,
        output: &Path,
        reporter: &R,
    ) -> FetchResult<AssemblyReport> {
        let mut session = TransferSession::new(display_name(output), 0);
        let file = create_output(output)?;

        let manifest = fetch_manifest(&self.client, manifest_url)?;
        session.set_target_size(manifest.original_file_size);

        self.run(manifest, file, output, session, reporter)
    }

    /// Assemble an already fetched manifest into `output`.
    pub fn assemble_manifest<R: ProgressReporter + ?Sized>(
        &self,
        manifest: Manifest,
        output: &Path,
        reporter: &R,
    ) -> FetchResult<AssemblyReport> {
        let session = TransferSession::new(display_name(output), manifest.original_file_size);
        let file = create_output(output)?;

        self.run(manifest, file, output, session, reporter)
    }

    fn run<R: ProgressReporter + ?Sized>(
        &self,
        mut manifest: Manifest,
        mut file: File,
        output: &Path,
        mut session: TransferSession,
        reporter: &R,
    ) -> FetchResult<AssemblyReport> {
        manifest.sort_pieces();

        let declared = manifest.declared_total();
        if declared != manifest.original_file_size {
            debug!(
                declared,
                original = manifest.original_file_size,
                "Piece sizes do not add up to originalFileSize"
            );
        }

        let mut warnings = Vec::new();

        for (index, piece) in manifest.pieces.iter().enumerate() {
            let start = current_length(&mut file, output)?;
            if start != piece.file_offset {
                raise(
                    &mut warnings,
                    ConsistencyWarning::OffsetMismatch {
                        piece_index: index,
                        expected: piece.file_offset,
                        actual: start,
                    },
                );
            }

            debug!(index, url = %piece.url, offset = start, size = piece.file_size, "Fetching piece");

            let digests = fetch_piece(
                &self.client,
                &piece.url,
                &mut file,
                output,
                &mut session,
                reporter,
                self.config.chunk_size,
            )?;

            let end = current_length(&mut file, output)?;
            if end != piece.end_offset() {
                raise(
                    &mut warnings,
                    ConsistencyWarning::SizeMismatch {
                        piece_index: index,
                        expected: piece.end_offset(),
                        actual: end,
                    },
                );
            }

            if !digests.matches(&piece.hash_value) {
                raise(
                    &mut warnings,
                    ConsistencyWarning::HashMismatch {
                        piece_index: index,
                        expected: piece.hash_value.clone(),
                        actual_sha1: digests.sha1,
                        actual_sha256: digests.sha256,
                    },
                );
            }
        }

        let final_length = current_length(&mut file, output)?;
        if final_length != manifest.original_file_size {
            raise(
                &mut warnings,
                ConsistencyWarning::FileSizeMismatch {
                    expected: manifest.original_file_size,
                    actual: final_length,
                },
            );
        }

        let report = AssemblyReport {
            output_path: output.to_path_buf(),
            bytes_written: final_length,
            pieces: manifest.pieces.len(),
            elapsed: session.elapsed(),
            warnings,
        };

        let summary = report.summary();
        info!(
            file = %summary.file_name,
            bytes = report.bytes_written,
            pieces = report.pieces,
            warnings = report.warnings.len(),
            "Assembly complete"
        );
        reporter.on_complete(&summary);

        Ok(report)
    }
}

fn raise(warnings: &mut Vec<ConsistencyWarning>, warning: ConsistencyWarning) {
    warn!("{}", warning);
    warnings.push(warning);
}

fn create_output(path: &Path) -> FetchResult<File> {
    File::create(path).map_err(|e| FetchError::file("create", path, e))
}

/// Length of the output file, read by seeking to its end.
fn current_length(file: &mut File, path: &Path) -> FetchResult<u64> {
    file.seek(SeekFrom::End(0))
        .map_err(|e| FetchError::file("seek", path, e))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
