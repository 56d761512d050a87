//! Non-fatal consistency warnings raised during assembly.

use std::fmt;

/// A discrepancy between the manifest and what was actually written.
///
/// Warnings never stop a run; the downloaded bytes are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyWarning {
    /// The output file length before a piece did not match its declared offset.
    OffsetMismatch {
        piece_index: usize,
        expected: u64,
        actual: u64,
    },

    /// The output file length after a piece did not match offset + size.
    SizeMismatch {
        piece_index: usize,
        expected: u64,
        actual: u64,
    },

    /// Neither computed digest matched the declared hash.
    HashMismatch {
        piece_index: usize,
        expected: String,
        actual_sha1: String,
        actual_sha256: String,
    },

    /// The finished file length did not match `originalFileSize`.
    FileSizeMismatch { expected: u64, actual: u64 },
}

impl ConsistencyWarning {
    /// Index of the piece the warning refers to, if any.
    pub fn piece_index(&self) -> Option<usize> {
        match self {
            Self::OffsetMismatch { piece_index, .. }
            | Self::SizeMismatch { piece_index, .. }
            | Self::HashMismatch { piece_index, .. } => Some(*piece_index),
            Self::FileSizeMismatch { .. } => None,
        }
    }
}

impl fmt::Display for ConsistencyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffsetMismatch {
                piece_index,
                expected,
                actual,
            } => write!(
                f,
                "inconsistent piece offset (piece {}) - expected {}, got {}",
                piece_index, expected, actual
            ),
            Self::SizeMismatch {
                piece_index,
                expected,
                actual,
            } => write!(
                f,
                "inconsistent piece size (piece {}) - expected {}, got {}",
                piece_index, expected, actual
            ),
            Self::HashMismatch {
                piece_index,
                expected,
                actual_sha1,
                actual_sha256,
            } => write!(
                f,
                "inconsistent piece hash (piece {}) - expected {}, got sha1 {} / sha256 {}",
                piece_index, expected, actual_sha1, actual_sha256
            ),
            Self::FileSizeMismatch { expected, actual } => write!(
                f,
                "inconsistent file size - expected {}, got {}",
                expected, actual
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_mismatch_display() {
        let warning = ConsistencyWarning::OffsetMismatch {
            piece_index: 1,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            warning.to_string(),
            "inconsistent piece offset (piece 1) - expected 3, got 2"
        );
        assert_eq!(warning.piece_index(), Some(1));
    }

    #[test]
    fn test_file_size_mismatch_has_no_piece() {
        let warning = ConsistencyWarning::FileSizeMismatch {
            expected: 6,
            actual: 5,
        };
        assert_eq!(warning.piece_index(), None);
        assert!(warning.to_string().contains("expected 6, got 5"));
    }
}
