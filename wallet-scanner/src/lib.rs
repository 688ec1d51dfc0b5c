//! Sia Wallet Scanner
//!
//! Recovers every address a wallet seed has used on the Sia blockchain.
//! This library provides:
//!
//! - Deterministic address derivation from a recovery phrase
//! - Gap-limit scanning in fixed size windows
//! - A pluggable usage oracle (HTTP by default)
//! - Result sinks for CSV files and JSON lines on stdout
//!
//! # Architecture
//!
//! [`GapScanner`] derives a window of addresses, asks a [`UsageOracle`]
//! which of them have appeared on chain, and writes the used ones to a
//! [`ResultSink`] in index order. Scanning stops once no address has been
//! used for more than `lookahead` consecutive indices, or when the
//! [`CancellationToken`] is triggered.
//!
//! # Security Model
//!
//! The seed never leaves this process. Only derived addresses are sent to
//! the oracle.

pub mod cancel;
pub mod config;
pub mod derive;
pub mod error;
pub mod oracle;
pub mod output;
pub mod progress;
pub mod record;
pub mod scanner;
pub mod state;

pub use cancel::CancellationToken;
pub use config::{OutputMode, ScannerConfig};
pub use error::{ScanError, ScanResult};
pub use oracle::{AddressUsage, SiaCentralOracle, UsageOracle};
pub use output::ResultSink;
pub use progress::{ProgressObserver, ProgressReport};
pub use record::{BatchResult, UsedAddress};
pub use scanner::{GapScanner, ScanOutcome, StopReason};
pub use state::ScanState;
