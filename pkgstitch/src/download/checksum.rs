//! Dual SHA-1 / SHA-256 digests for piece verification.
//!
//! Manifests do not say which algorithm produced `hashValue`, and both are
//! seen in the wild, so every piece is hashed with both and either match is
//! accepted.

use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Running SHA-1 and SHA-256 over the same byte stream.
#[derive(Clone, Default)]
pub struct DualHasher {
    sha1: Sha1,
    sha256: Sha256,
}

impl DualHasher {
    /// Start fresh hashers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed bytes to both hashers.
    pub fn update(&mut self, data: &[u8]) {
        self.sha1.update(data);
        self.sha256.update(data);
    }

    /// Consume the hashers and return lowercase hex digests.
    pub fn finalize(self) -> PieceDigests {
        PieceDigests {
            sha1: format!("{:x}", self.sha1.finalize()),
            sha256: format!("{:x}", self.sha256.finalize()),
        }
    }
}

/// Digests computed over one piece body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceDigests {
    /// Lowercase hex SHA-1.
    pub sha1: String,
    /// Lowercase hex SHA-256.
    pub sha256: String,
}

impl PieceDigests {
    /// Digest a complete in-memory buffer.
    pub fn of(data: &[u8]) -> Self {
        let mut hasher = DualHasher::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Whether `expected` equals either digest, ignoring ASCII case.
    pub fn matches(&self, expected: &str) -> bool {
        expected.eq_ignore_ascii_case(&self.sha1) || expected.eq_ignore_ascii_case(&self.sha256)
    }
}
