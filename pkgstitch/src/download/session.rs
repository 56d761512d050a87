//! Transfer session state shared across piece fetches.
//!
//! The orchestrator owns one [`TransferSession`] per run and lends it
//! mutably to each piece fetch, which is the only writer of the byte counter.

use std::time::{Duration, Instant};

/// Bytes in one mebibyte.
pub const MIB: f64 = 1024.0 * 1024.0;

/// Running totals for one assembly run.
#[derive(Debug, Clone)]
pub struct TransferSession {
    started: Instant,
    bytes_transferred: u64,
    target_size: u64,
    file_name: String,
}

/// Point-in-time view of a session, handed to progress reporters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// Base name of the output file.
    pub file_name: String,
    /// Bytes written so far across all pieces.
    pub bytes_transferred: u64,
    /// Expected size of the finished file.
    pub target_size: u64,
    /// Integer percentage of `target_size` written.
    pub percent: u64,
    /// Average throughput since the session started, in MiB/s.
    pub throughput_mib_s: f64,
}

impl TransferSession {
    /// Start a session now.
    pub fn new(file_name: impl Into<String>, target_size: u64) -> Self {
        Self::started_at(file_name, target_size, Instant::now())
    }

    /// Start a session with an explicit start time.
    pub fn started_at(file_name: impl Into<String>, target_size: u64, started: Instant) -> Self {
        Self {
            started,
            bytes_transferred: 0,
            target_size,
            file_name: file_name.into(),
        }
    }

    /// Set the expected final size once the manifest is known.
    pub fn set_target_size(&mut self, target_size: u64) {
        self.target_size = target_size;
    }

    /// Record bytes written to the output file.
    pub fn record(&mut self, bytes: u64) {
        self.bytes_transferred += bytes;
    }

    pub fn bytes_transferred(&self) -> u64 {
        self.bytes_transferred
    }

    pub fn target_size(&self) -> u64 {
        self.target_size
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Integer percentage complete.
    ///
    /// An empty target counts as complete.
    pub fn percent_complete(&self) -> u64 {
        if self.target_size == 0 {
            return 100;
        }
        (u128::from(self.bytes_transferred) * 100 / u128::from(self.target_size)) as u64
    }

    /// Average throughput in MiB/s since the session started.
    pub fn throughput_mib_s(&self) -> f64 {
        throughput_mib_s(self.bytes_transferred, self.elapsed())
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            file_name: self.file_name.clone(),
            bytes_transferred: self.bytes_transferred,
            target_size: self.target_size,
            percent: self.percent_complete(),
            throughput_mib_s: self.throughput_mib_s(),
        }
    }
}

/// Average throughput in MiB/s; zero when no time has elapsed.
pub fn throughput_mib_s(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        bytes as f64 / MIB / secs
    } else {
        0.0
    }
}
