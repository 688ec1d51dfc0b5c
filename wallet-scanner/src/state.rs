//! Running state of a gap scan.
//!
//! The state lives only for the duration of one run; every invocation starts
//! from the configured index.

/// Accumulated results of the windows scanned so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Highest index confirmed used, 0 if none
    pub last_used_index: u64,

    /// End of the last window minus `last_used_index`
    pub cumulative_gap: u64,

    /// Total used addresses detected
    pub detected: u64,

    /// Number of windows scanned
    pub windows_scanned: u64,
}

impl ScanState {
    /// Create a new empty scan state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in the results of the window ending at `window_end`.
    pub fn update_after_batch(&mut self, window_end: u64, batch_max: u64, used: u64) {
        self.last_used_index = self.last_used_index.max(batch_max);
        self.cumulative_gap = window_end.saturating_sub(self.last_used_index);
        self.detected += used;
        self.windows_scanned += 1;
    }

    /// Format a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Scan State:\n  Windows scanned: {}\n  Used addresses: {}\n  Last used index: {}\n  Gap: {}",
            self.windows_scanned, self.detected, self.last_used_index, self.cumulative_gap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ScanState::default();
        assert_eq!(state.last_used_index, 0);
        assert_eq!(state.cumulative_gap, 0);
        assert_eq!(state.detected, 0);
    }

    #[test]
    fn test_update_after_batch() {
        let mut state = ScanState::new();

        state.update_after_batch(250, 12, 2);
        assert_eq!(state.last_used_index, 12);
        assert_eq!(state.cumulative_gap, 238);
        assert_eq!(state.detected, 2);

        state.update_after_batch(500, 0, 0);
        assert_eq!(state.last_used_index, 12);
        assert_eq!(state.cumulative_gap, 488);
        assert_eq!(state.windows_scanned, 2);
    }

    #[test]
    fn test_gap_shrinks_when_usage_found_later() {
        let mut state = ScanState::new();
        state.update_after_batch(250, 0, 0);
        state.update_after_batch(500, 0, 0);
        assert_eq!(state.cumulative_gap, 500);

        state.update_after_batch(750, 740, 1);
        assert_eq!(state.cumulative_gap, 10);
    }

    #[test]
    fn test_summary() {
        let mut state = ScanState::new();
        state.update_after_batch(250, 12, 2);
        let summary = state.summary();
        assert!(summary.contains("Used addresses: 2"));
        assert!(summary.contains("Last used index: 12"));
        assert!(summary.contains("Gap: 238"));
    }
}
