//! Used address records.

use serde::{Deserialize, Serialize};
use sia_account_keys::Address;
use std::ops::Range;

/// An address the oracle reported as used, with its derivation index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsedAddress {
    /// Derivation index of the address
    pub index: u64,

    /// The address (76 hex characters)
    pub address: Address,

    /// How the oracle saw the address used (for example "sc" or "sf")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usage_type: String,
}

impl UsedAddress {
    /// Create a new record.
    pub fn new(index: u64, address: Address, usage_type: impl Into<String>) -> Self {
        Self {
            index,
            address,
            usage_type: usage_type.into(),
        }
    }

    /// Format as a CSV row without the trailing newline.
    pub fn to_csv_row(&self) -> String {
        format!("{},{}", self.index, self.address)
    }

    /// Convert to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Summary of one scanned window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Indices covered by this window
    pub window: Range<u64>,

    /// Used addresses in ascending index order
    pub used: Vec<UsedAddress>,

    /// Highest used index in the window, or 0 if none were used
    pub batch_max: u64,

    /// Time spent deriving and looking up the window
    pub duration_ms: u64,
}

impl BatchResult {
    /// Create a new empty batch result.
    pub fn new(window: Range<u64>) -> Self {
        Self {
            window,
            ..Default::default()
        }
    }

    /// Add used addresses, keeping them sorted and unique by index.
    pub fn add_used(&mut self, used: impl IntoIterator<Item = UsedAddress>) {
        self.used.extend(used);
        self.used.sort_by_key(|record| record.index);
        self.used.dedup_by_key(|record| record.index);
        self.batch_max = self.used.last().map_or(0, |record| record.index);
    }
}
