//! Errors raised while scanning.

use displaydoc::Display;
use thiserror::Error;

/// Errors that abort a scan.
#[derive(Debug, Display, Error)]
pub enum ScanError {
    /// Oracle request failed: {0}
    Transport(String),

    /// Oracle returned status {status}: {body}
    Status {
        /// HTTP status code
        status: u16,
        /// Start of the response body
        body: String,
    },

    /// Oracle response is malformed: {0}
    MalformedResponse(String),

    /// Oracle rejected the lookup: {0:?}
    Rejected(String),

    /// Failed to write results: {0}
    Sink(#[from] std::io::Error),

    /// Derivation index overflowed after {0}
    IndexOverflow(u64),
}

impl ScanError {
    /// Whether the same request may succeed if sent again.
    pub fn is_retryable(&self) -> bool {
        match self {
            ScanError::Transport(_) => true,
            ScanError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::Transport(err.to_string())
    }
}

/// Result type for scanning.
pub type ScanResult<T> = Result<T, ScanError>;
