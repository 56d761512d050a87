//! Tracing subscriber setup.

use std::io::{self, Write};

use indicatif::ProgressBar;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "pkgstitch=debug,pkgstitch_cli=debug,warn"
    } else {
        "warn"
    }
}

/// Writer that clears the status line while a log line is written.
pub struct SuspendingWriter<W> {
    bar: ProgressBar,
    inner: W,
}

impl<W: Write> SuspendingWriter<W> {
    pub fn new(bar: ProgressBar, inner: W) -> Self {
        Self { bar, inner }
    }
}

impl<W: Write> Write for SuspendingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        let inner = &mut self.inner;
        self.bar.suspend(|| inner.write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Log lines go to
/// stderr with `bar` suspended, so warnings never land on the end of the
/// in-place status line.
pub fn init(verbose: bool, bar: &ProgressBar) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let bar = bar.clone();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(move || SuspendingWriter::new(bar.clone(), io::stderr()))
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }

    #[test]
    fn test_suspending_writer_passes_bytes_through() {
        let bar = ProgressBar::hidden();
        bar.set_message("Downloading game.pkg:     10% (  1.00MiB/s)");
        let mut writer = SuspendingWriter::new(bar.clone(), Vec::new());

        writer
            .write_all(b"WARN inconsistent file size - expected 6, got 5\n")
            .unwrap();
        writer.flush().unwrap();

        assert_eq!(
            writer.inner,
            b"WARN inconsistent file size - expected 6, got 5\n".to_vec()
        );
        assert!(!bar.is_finished());
    }
}
