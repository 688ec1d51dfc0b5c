//! Progress reporting.
//!
//! Reports are advisory; the scanner behaves the same whichever observer is
//! attached.

use crate::{scanner::ScanOutcome, state::ScanState};
use std::{
    io::{self, Write},
    ops::Range,
};

/// Running totals after one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    /// Window just scanned
    pub window: Range<u64>,
    /// Used addresses found in this window
    pub used_in_window: u64,
    /// Used addresses found so far
    pub detected: u64,
    /// Highest used index so far
    pub last_used_index: u64,
    /// Current gap
    pub gap: u64,
}

impl ProgressReport {
    /// Build a report from the state after scanning `window`.
    pub fn new(window: Range<u64>, used_in_window: u64, state: &ScanState) -> Self {
        Self {
            window,
            used_in_window,
            detected: state.detected,
            last_used_index: state.last_used_index,
            gap: state.cumulative_gap,
        }
    }
}

/// Receives a report after every window.
pub trait ProgressObserver: Send {
    /// Called after each window has been written to the sink.
    fn on_batch(&mut self, report: &ProgressReport);

    /// Called once when the scan stops without error.
    fn on_finish(&mut self, _outcome: &ScanOutcome) {}
}

/// Rewrites a single status line on stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    printed: bool,
}

impl ConsoleProgress {
    /// Create a new console reporter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_batch(&mut self, report: &ProgressReport) {
        let mut stdout = io::stdout().lock();
        // Write errors are ignored.
        let _ = write!(
            stdout,
            "\x1b[1K\rChecking Address: {}-{}, Used: {}, Last: {}, Gap {}",
            report.window.start,
            report.window.end,
            report.detected,
            report.last_used_index,
            report.gap
        );
        let _ = stdout.flush();
        self.printed = true;
    }

    fn on_finish(&mut self, _outcome: &ScanOutcome) {
        if self.printed {
            println!();
        }
    }
}

/// Discards all reports, for runs where stdout carries data.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_batch(&mut self, _report: &ProgressReport) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_state() {
        let mut state = ScanState::new();
        state.update_after_batch(250, 12, 2);

        let report = ProgressReport::new(0..250, 2, &state);
        assert_eq!(report.window, 0..250);
        assert_eq!(report.detected, 2);
        assert_eq!(report.last_used_index, 12);
        assert_eq!(report.gap, 238);
    }
}
