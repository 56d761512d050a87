//! Progress reporting seam.
//!
//! The library never writes to the terminal itself; callers plug in a
//! [`ProgressReporter`] to render transfer progress and the final summary.

use super::session::ProgressSnapshot;

/// Final figures for a completed assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblySummary {
    /// Base name of the output file.
    pub file_name: String,
    /// Final file size in MiB.
    pub size_mib: f64,
    /// Average throughput over the whole run, in MiB/s.
    pub throughput_mib_s: f64,
}

/// Receives progress updates from an assembly run.
pub trait ProgressReporter {
    /// Called after every chunk written to the output file.
    fn on_progress(&self, snapshot: &ProgressSnapshot);

    /// Called once after the final size check.
    fn on_complete(&self, summary: &AssemblySummary);
}

/// Reporter that discards all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_progress(&self, _snapshot: &ProgressSnapshot) {}

    fn on_complete(&self, _summary: &AssemblySummary) {}
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for &R {
    fn on_progress(&self, snapshot: &ProgressSnapshot) {
        (**self).on_progress(snapshot)
    }

    fn on_complete(&self, summary: &AssemblySummary) {
        (**self).on_complete(summary)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Reporter that keeps every update for later inspection.
    #[derive(Default)]
    pub struct RecordingReporter {
        pub snapshots: Mutex<Vec<ProgressSnapshot>>,
        pub summaries: Mutex<Vec<AssemblySummary>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn on_progress(&self, snapshot: &ProgressSnapshot) {
            self.snapshots.lock().unwrap().push(snapshot.clone());
        }

        fn on_complete(&self, summary: &AssemblySummary) {
            self.summaries.lock().unwrap().push(summary.clone());
        }
    }

    #[test]
    fn test_reporter_by_reference() {
        let reporter = RecordingReporter::default();
        let summary = AssemblySummary {
            file_name: "game.pkg".to_string(),
            size_mib: 1.5,
            throughput_mib_s: 3.0,
        };

        fn notify<R: ProgressReporter>(reporter: R, summary: &AssemblySummary) {
            reporter.on_complete(summary);
        }
        notify(&reporter, &summary);

        assert_eq!(*reporter.summaries.lock().unwrap(), vec![summary]);
    }
}
