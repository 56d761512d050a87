//! Console rendering of transfer progress.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use pkgstitch::download::{AssemblySummary, ProgressReporter, ProgressSnapshot};

/// Single in-place status line on stdout, followed by a summary line.
pub struct ConsoleProgress {
    bar: ProgressBar,
}

/// Create the stdout status line.
///
/// The same bar is handed to the log writer so log lines can suspend it.
pub fn status_bar() -> ProgressBar {
    let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
    let style =
        ProgressStyle::with_template("{msg}").unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar
}

impl ConsoleProgress {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }
}

impl ProgressReporter for ConsoleProgress {
    fn on_progress(&self, snapshot: &ProgressSnapshot) {
        self.bar.set_message(format_progress(snapshot));
    }

    fn on_complete(&self, summary: &AssemblySummary) {
        self.bar.finish_and_clear();
        println!("{}", format_summary(summary));
    }
}

impl Drop for ConsoleProgress {
    fn drop(&mut self) {
        // Keep the last status line visible if the run was aborted.
        if !self.bar.is_finished() {
            self.bar.abandon();
        }
    }
}

pub fn format_progress(snapshot: &ProgressSnapshot) -> String {
    format!(
        "Downloading {}: {:>6}% ({:>6.2}MiB/s)",
        snapshot.file_name, snapshot.percent, snapshot.throughput_mib_s
    )
}

pub fn format_summary(summary: &AssemblySummary) -> String {
    format!(
        "Completed {}: {:.2}MiB ({:.2}MiB/s)",
        summary.file_name, summary.size_mib, summary.throughput_mib_s
    )
}
