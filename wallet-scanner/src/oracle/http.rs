//! HTTP usage oracle.
//!
//! Posts address batches to a SiaCentral-compatible endpoint.

use super::{AddressUsage, UsageOracle};
use crate::{
    config::ScannerConfig,
    error::{ScanError, ScanResult},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sia_account_keys::Address;
use std::time::Duration;

/// Request body: `{"addresses": [...]}`.
#[derive(Debug, Serialize)]
struct UsedAddressesRequest<'a> {
    addresses: &'a [Address],
}

/// Response body of the used-addresses endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct UsedAddressesResponse {
    #[serde(default)]
    message: String,
    #[serde(rename = "type")]
    status: String,
    #[serde(default)]
    addresses: Option<Vec<RawAddressUsage>>,
}

#[derive(Debug, Deserialize)]
struct RawAddressUsage {
    address: String,
    #[serde(default)]
    usage_type: String,
}

impl UsedAddressesResponse {
    /// Check the status and parse every reported address.
    pub(crate) fn into_usage(self) -> ScanResult<Vec<AddressUsage>> {
        if self.status != "success" {
            return Err(ScanError::Rejected(self.message));
        }

        self.addresses
            .unwrap_or_default()
            .into_iter()
            .map(|raw| {
                let address = raw.address.parse::<Address>().map_err(|e| {
                    ScanError::MalformedResponse(format!("address {:?}: {}", raw.address, e))
                })?;
                Ok(AddressUsage {
                    address,
                    usage_type: raw.usage_type,
                })
            })
            .collect()
    }
}

/// Oracle that POSTs batches to an HTTP endpoint.
pub struct SiaCentralOracle {
    /// HTTP client
    client: Client,
    /// Endpoint URL
    url: String,
    /// Number of retries on failure
    max_retries: u32,
    /// Base retry delay
    retry_delay: Duration,
    /// Cap on the retry delay
    max_retry_delay: Duration,
}

impl SiaCentralOracle {
    /// Create a new oracle client with the default timeouts and retries.
    pub fn new(url: &str) -> ScanResult<Self> {
        Self::from_config(&ScannerConfig {
            oracle_url: url.to_string(),
            ..Default::default()
        })
    }

    /// Create an oracle client from the scanner configuration.
    pub fn from_config(config: &ScannerConfig) -> ScanResult<Self> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;

        Ok(Self {
            client,
            url: config.oracle_url.clone(),
            max_retries: config.max_retries,
            retry_delay: config.retry_delay(),
            max_retry_delay: config.max_retry_delay(),
        })
    }

    /// Delay before retry number `attempt` (starting at 1).
    fn backoff(&self, attempt: u32) -> Duration {
        (self.retry_delay * attempt).min(self.max_retry_delay)
    }

    async fn post_with_retry(&self, addresses: &[Address]) -> ScanResult<UsedAddressesResponse> {
        let mut attempt = 0;
        loop {
            match self.post_once(addresses).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = self.backoff(attempt);
                    tracing::warn!(
                        "Oracle request failed ({}), retry {}/{} in {:?}",
                        e,
                        attempt,
                        self.max_retries,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn post_once(&self, addresses: &[Address]) -> ScanResult<UsedAddressesResponse> {
        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(&UsedAddressesRequest { addresses })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Retryability follows the status code; a JSON error message only
        // replaces the raw body in the error.
        if !status.is_success() {
            let body = match serde_json::from_str::<UsedAddressesResponse>(&body) {
                Ok(parsed) if !parsed.message.is_empty() => parsed.message,
                _ => body.chars().take(200).collect(),
            };
            return Err(ScanError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Oracle answered lookup of {} addresses", addresses.len());

        serde_json::from_str(&body).map_err(|e| ScanError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl UsageOracle for SiaCentralOracle {
    async fn lookup_usage(&self, addresses: &[Address]) -> ScanResult<Vec<AddressUsage>> {
        self.post_with_retry(addresses).await?.into_usage()
    }
}
