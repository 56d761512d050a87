//! pkgstitch - reassemble a large file from a manifest of hosted pieces
//!
//! A manifest lists the byte ranges ("pieces") of a file, each served from
//! its own URL together with a hash. This library fetches the manifest,
//! downloads the pieces one after another onto a single output file and
//! checks offsets, sizes and hashes as it goes. Mismatches are reported as
//! warnings; only network and file errors abort a run.

pub mod config;
pub mod download;
pub mod error;
pub mod http;
pub mod manifest;
pub mod normalize;
