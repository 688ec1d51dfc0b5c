//! Usage oracles.
//!
//! An oracle answers one question for a batch of addresses: which of them
//! have ever appeared on chain. The scanner only talks to this trait, so it
//! can run against the HTTP service or an in-memory stand-in.

mod http;

pub use http::SiaCentralOracle;

use crate::error::ScanResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sia_account_keys::Address;

/// An address reported as used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressUsage {
    /// The used address
    pub address: Address,
    /// Kind of usage reported by the oracle
    #[serde(default)]
    pub usage_type: String,
}

/// Capability to look up which addresses have been used.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsageOracle: Send + Sync {
    /// Return the subset of `addresses` that have been used, in any order.
    async fn lookup_usage(&self, addresses: &[Address]) -> ScanResult<Vec<AddressUsage>>;
}
