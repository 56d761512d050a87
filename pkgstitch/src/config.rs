//! Configuration for manifest and piece downloads.

/// Default `User-Agent` sent with every request.
///
/// Some package hosts reject clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default streaming buffer size for piece bodies (5 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 5 * 1024 * 1024;

/// Settings shared by the HTTP client and the piece fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Value of the `User-Agent` header.
    pub user_agent: String,

    /// Size of the read buffer used while streaming a piece.
    pub chunk_size: usize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl DownloadConfig {
    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the streaming buffer size. Zero is bumped to one byte.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }
}
