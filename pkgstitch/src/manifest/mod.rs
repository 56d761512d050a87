//! Piece manifest model and fetcher.
//!
//! A manifest describes one large file as a list of independently hosted
//! byte ranges ("pieces") plus the expected size of the reassembled file:
//!
//! ```text
//! {
//!   "pieces": [
//!     {"url": "...", "fileOffset": 0, "fileSize": 3, "hashValue": "..."},
//!     ...
//!   ],
//!   "originalFileSize": 6
//! }
//! ```
//!
//! Piece order in the document is not guaranteed; call
//! [`Manifest::sort_pieces`] before assembling.

mod fetch;

pub use fetch::fetch_manifest;

use serde::{Deserialize, Serialize};

/// The full description of a file split into remotely hosted pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Pieces in document order.
    pub pieces: Vec<Piece>,

    /// Expected length of the reassembled file in bytes.
    pub original_file_size: u64,
}

/// One contiguous byte range of the target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    /// Where this range's bytes are served from.
    pub url: String,

    /// Offset of the first byte of this piece in the target file.
    pub file_offset: u64,

    /// Expected length of the piece body.
    pub file_size: u64,

    /// Hex digest of the piece body, SHA-1 or SHA-256.
    pub hash_value: String,
}

impl Piece {
    /// Offset one past the last byte of this piece.
    pub fn end_offset(&self) -> u64 {
        self.file_offset.saturating_add(self.file_size)
    }
}

impl Manifest {
    /// Sort pieces by ascending file offset.
    ///
    /// The sort is stable: pieces declaring the same offset keep their
    /// document order.
    pub fn sort_pieces(&mut self) {
        self.pieces.sort_by_key(|piece| piece.file_offset);
    }

    /// Sum of all declared piece sizes.
    pub fn declared_total(&self) -> u64 {
        self.pieces.iter().map(|piece| piece.file_size).sum()
    }
}
