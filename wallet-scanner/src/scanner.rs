//! Gap-limit scanner.
//!
//! Addresses are derived and looked up one window at a time. After every
//! window the gap (window end minus the highest used index) is compared with
//! the lookahead; once it is larger the scan stops. The check only happens at
//! window boundaries, so a lookahead smaller than the window still scans the
//! whole window.

use std::{collections::HashMap, ops::Range, time::Instant};

use sia_account_keys::{derive_address, Address, Seed};

use crate::{
    cancel::CancellationToken,
    config::ScannerConfig,
    error::{ScanError, ScanResult},
    oracle::UsageOracle,
    output::ResultSink,
    progress::{ProgressObserver, ProgressReport},
    record::{BatchResult, UsedAddress},
    state::ScanState,
};

/// Default number of addresses per window.
pub const DEFAULT_BATCH_SIZE: u64 = 250;

/// Default lookahead.
pub const DEFAULT_LOOKAHEAD: u64 = 100_000;

/// Why a scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No used address within `lookahead` indices of the last window end
    GapExceeded,
    /// The cancellation token was triggered
    Cancelled,
}

/// Result of a completed scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Why the scan stopped
    pub stop_reason: StopReason,
    /// Totals at the time of stopping
    pub state: ScanState,
    /// First index that was not scanned
    pub next_index: u64,
}

impl ScanOutcome {
    /// Format a human-readable summary.
    pub fn summary(&self) -> String {
        let reason = match self.stop_reason {
            StopReason::GapExceeded => "gap limit reached",
            StopReason::Cancelled => "cancelled",
        };
        format!(
            "Scan stopped ({}) before index {}\n{}",
            reason,
            self.next_index,
            self.state.summary()
        )
    }
}

/// Scans the addresses of one seed for usage.
pub struct GapScanner {
    /// Seed the addresses are derived from
    seed: Seed,

    /// Source of usage information
    oracle: Box<dyn UsageOracle>,

    /// Largest tolerated gap before stopping
    lookahead: u64,

    /// Addresses per window
    batch_size: u64,

    /// Start of the next window
    next_index: u64,

    /// Totals so far
    state: ScanState,
}

impl GapScanner {
    /// Create a scanner starting at `start` with the default window size.
    pub fn new(seed: Seed, oracle: Box<dyn UsageOracle>, start: u64, lookahead: u64) -> Self {
        Self {
            seed,
            oracle,
            lookahead,
            batch_size: DEFAULT_BATCH_SIZE,
            next_index: start,
            state: ScanState::new(),
        }
    }

    /// Create a scanner from configuration.
    pub fn from_config(seed: Seed, oracle: Box<dyn UsageOracle>, config: &ScannerConfig) -> Self {
        Self::new(seed, oracle, config.start_index, config.lookahead)
            .with_batch_size(config.batch_size)
    }

    /// Use windows of `batch_size` addresses (at least one).
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Totals so far.
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// The window the next step will scan.
    pub fn next_window(&self) -> ScanResult<Range<u64>> {
        let end = self
            .next_index
            .checked_add(self.batch_size)
            .ok_or(ScanError::IndexOverflow(self.next_index))?;
        Ok(self.next_index..end)
    }

    /// Whether the gap after the last window exceeds the lookahead.
    pub fn gap_exceeded(&self) -> bool {
        self.state.windows_scanned > 0 && self.state.cumulative_gap > self.lookahead
    }

    /// Scan one window and write its used addresses to `sink`.
    pub async fn scan_step(&mut self, sink: &mut dyn ResultSink) -> ScanResult<BatchResult> {
        let window = self.next_window()?;
        let start = Instant::now();

        // The oracle answers with addresses, so keep the way back to indices.
        let mut index_of: HashMap<Address, u64> = HashMap::with_capacity(self.batch_size as usize);
        let addresses: Vec<Address> = window
            .clone()
            .map(|index| {
                let address = derive_address(&self.seed, index);
                index_of.insert(address, index);
                address
            })
            .collect();

        tracing::debug!(
            "Looking up {} addresses ({}-{})",
            addresses.len(),
            window.start,
            window.end
        );
        let usage = self.oracle.lookup_usage(&addresses).await?;

        let used = usage
            .into_iter()
            .map(|entry| {
                let index = index_of.get(&entry.address).copied().ok_or_else(|| {
                    ScanError::MalformedResponse(format!(
                        "address {} is not in window {}-{}",
                        entry.address, window.start, window.end
                    ))
                })?;
                Ok(UsedAddress::new(index, entry.address, entry.usage_type))
            })
            .collect::<ScanResult<Vec<_>>>()?;

        let mut batch = BatchResult::new(window.clone());
        batch.add_used(used);
        self.state
            .update_after_batch(window.end, batch.batch_max, batch.used.len() as u64);

        sink.write_batch(&batch.used).await?;
        if !batch.used.is_empty() {
            sink.flush().await?;
        }

        self.next_index = window.end;
        batch.duration_ms = start.elapsed().as_millis() as u64;
        Ok(batch)
    }

    /// Scan until the gap exceeds the lookahead or `cancel` is triggered.
    ///
    /// The sink is flushed before returning, whether the scan stopped,
    /// was cancelled, or failed.
    pub async fn run(
        &mut self,
        sink: &mut dyn ResultSink,
        progress: &mut dyn ProgressObserver,
        cancel: &CancellationToken,
    ) -> ScanResult<ScanOutcome> {
        tracing::info!(
            "Starting scan at index {} (lookahead {}, window {})",
            self.next_index,
            self.lookahead,
            self.batch_size
        );

        let result = self.scan_until_stopped(sink, progress, cancel).await;
        let flushed = sink.flush().await;

        let outcome = match (result, flushed) {
            (Ok(outcome), Ok(())) => outcome,
            (Err(e), _) | (Ok(_), Err(e)) => {
                tracing::error!("Scan failed at index {}: {}", self.next_index, e);
                return Err(e);
            }
        };

        tracing::info!(
            "Scan stopped ({:?}) at index {}: {} used, last used index {}",
            outcome.stop_reason,
            outcome.next_index,
            outcome.state.detected,
            outcome.state.last_used_index
        );
        progress.on_finish(&outcome);
        Ok(outcome)
    }

    async fn scan_until_stopped(
        &mut self,
        sink: &mut dyn ResultSink,
        progress: &mut dyn ProgressObserver,
        cancel: &CancellationToken,
    ) -> ScanResult<ScanOutcome> {
        loop {
            if cancel.is_cancelled() {
                return Ok(self.outcome(StopReason::Cancelled));
            }

            let batch = self.scan_step(sink).await?;
            tracing::info!(
                "Window {}-{} done in {}ms, {} used",
                batch.window.start,
                batch.window.end,
                batch.duration_ms,
                batch.used.len()
            );
            progress.on_batch(&ProgressReport::new(
                batch.window,
                batch.used.len() as u64,
                &self.state,
            ));

            if self.gap_exceeded() {
                return Ok(self.outcome(StopReason::GapExceeded));
            }
        }
    }

    fn outcome(&self, stop_reason: StopReason) -> ScanOutcome {
        ScanOutcome {
            stop_reason,
            state: self.state.clone(),
            next_index: self.next_index,
        }
    }
}
