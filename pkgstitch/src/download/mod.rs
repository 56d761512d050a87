//! Piece download and file assembly.
//!
//! This module turns a [`Manifest`](crate::manifest::Manifest) into a single
//! output file:
//! - Streaming fetch of one piece onto the end of the output (`piece`)
//! - SHA-1 and SHA-256 digests computed side by side (`checksum`)
//! - Running byte counter and throughput (`session`)
//! - Pluggable progress reporting (`progress`)
//! - Non-fatal offset, size and hash warnings (`warning`)
//! - Sequential fetch-and-append orchestration (`orchestrator`)
//!
//! # Architecture
//!
//! ```text
//! Assembler (orchestrator)
//!         │
//!         ├── fetch_manifest (manifest)
//!         │
//!         ├── fetch_piece ──── DualHasher (checksum)
//!         │       │
//!         │       └── TransferSession (session) ──► ProgressReporter
//!         │
//!         └── ConsistencyWarning (offset / size / hash / file size)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use pkgstitch::config::DownloadConfig;
//! use pkgstitch::download::{Assembler, NoopReporter};
//!
//! let assembler = Assembler::from_config(DownloadConfig::default())?;
//! let report = assembler.assemble(
//!     "http://example.com/game.json",
//!     Path::new("game.pkg"),
//!     &NoopReporter,
//! )?;
//! for warning in &report.warnings {
//!     eprintln!("WARNING: {}", warning);
//! }
//! # Ok::<(), pkgstitch::error::FetchError>(())
//! ```

mod checksum;
mod orchestrator;
mod piece;
mod progress;
mod session;
mod warning;

pub use checksum::{DualHasher, PieceDigests};
pub use orchestrator::{Assembler, AssemblyReport};
pub use piece::fetch_piece;
pub use progress::{AssemblySummary, NoopReporter, ProgressReporter};
pub use session::{throughput_mib_s, ProgressSnapshot, TransferSession, MIB};
pub use warning::ConsistencyWarning;
