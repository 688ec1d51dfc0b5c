//! Configuration for the wallet scanner.

use crate::scanner::{DEFAULT_BATCH_SIZE, DEFAULT_LOOKAHEAD};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Largest window accepted by the oracle in one request.
pub const MAX_BATCH_SIZE: u64 = 10_000;

/// Where used addresses are written.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Append `index,address` rows to a CSV file
    #[default]
    Csv,
    /// Print records to stdout as JSON lines
    Stdout,
}

/// Scanner configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Endpoint answering which addresses have been used
    #[serde(default = "default_oracle_url")]
    pub oracle_url: String,

    /// Directory the CSV file is created in
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Name of the CSV file inside `output_dir`
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Output mode for used addresses
    #[serde(default)]
    pub output_mode: OutputMode,

    /// Stop once this many consecutive indices past the last used one are
    /// unused
    #[serde(default = "default_lookahead")]
    pub lookahead: u64,

    /// First derivation index to scan
    #[serde(default)]
    pub start_index: u64,

    /// Number of addresses looked up per request
    #[serde(default = "default_batch_size")]
    pub batch_size: u64,

    /// HTTP timeout per oracle request in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Retries after a failed oracle request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Delay before the first retry; later retries wait proportionally longer
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,

    /// Upper bound on the delay between retries
    #[serde(default = "default_max_retry_delay")]
    pub max_retry_delay_ms: u64,
}

fn default_oracle_url() -> String {
    "https://api.siacentral.com/v2/wallet/addresses/used".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_file() -> String {
    "addresses.csv".to_string()
}

fn default_lookahead() -> u64 {
    DEFAULT_LOOKAHEAD
}

fn default_batch_size() -> u64 {
    DEFAULT_BATCH_SIZE
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    1_000
}

fn default_max_retry_delay() -> u64 {
    10_000
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            oracle_url: default_oracle_url(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
            output_mode: OutputMode::default(),
            lookahead: default_lookahead(),
            start_index: 0,
            batch_size: default_batch_size(),
            request_timeout_secs: default_request_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay(),
            max_retry_delay_ms: default_max_retry_delay(),
        }
    }
}

impl ScannerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: ScannerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Check the oracle endpoint
        let url = reqwest::Url::parse(&self.oracle_url)
            .map_err(|e| anyhow::anyhow!("oracle_url is not a valid URL: {}", e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("oracle_url must use http or https, got {}", url.scheme());
        }

        // Check window size
        if self.batch_size == 0 {
            anyhow::bail!("batch_size must be at least 1");
        }
        if self.batch_size > MAX_BATCH_SIZE {
            anyhow::bail!(
                "batch_size must be at most {}, got {}",
                MAX_BATCH_SIZE,
                self.batch_size
            );
        }
        if self.start_index.checked_add(self.batch_size).is_none() {
            anyhow::bail!("start_index + batch_size overflows");
        }

        // Check output
        if self.output_mode == OutputMode::Csv && self.output_file.is_empty() {
            anyhow::bail!("output_file is required when output_mode = csv");
        }

        // Check retry settings
        if self.retry_delay_ms > self.max_retry_delay_ms {
            anyhow::bail!("retry_delay_ms must be <= max_retry_delay_ms");
        }

        if self.lookahead < self.batch_size {
            tracing::debug!(
                "lookahead ({}) is smaller than batch_size ({}); the scan stops at the first window past it",
                self.lookahead,
                self.batch_size
            );
        }

        Ok(())
    }

    /// Full path of the CSV output file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// HTTP timeout per oracle request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Delay before the first retry.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Upper bound on the delay between retries.
    pub fn max_retry_delay(&self) -> Duration {
        Duration::from_millis(self.max_retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ScannerConfig::default();
        assert_eq!(config.lookahead, 100_000);
        assert_eq!(config.start_index, 0);
        assert_eq!(config.batch_size, 250);
        assert_eq!(config.output_mode, OutputMode::Csv);
        assert_eq!(config.output_path(), PathBuf::from("./addresses.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(
            ScannerConfig::from_toml("").unwrap(),
            ScannerConfig::default()
        );
    }

    #[test]
    fn test_partial_file() {
        let config = ScannerConfig::from_toml(
            r#"
            lookahead = 500
            start_index = 1000
            output_mode = "stdout"
            "#,
        )
        .unwrap();
        assert_eq!(config.lookahead, 500);
        assert_eq!(config.start_index, 1000);
        assert_eq!(config.output_mode, OutputMode::Stdout);
        assert_eq!(config.batch_size, 250);
    }

    #[test]
    fn test_validate_batch_size() {
        let config = ScannerConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ScannerConfig {
            batch_size: MAX_BATCH_SIZE + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_oracle_url() {
        let config = ScannerConfig {
            oracle_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ScannerConfig {
            oracle_url: "ftp://example.com/used".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_index_overflow() {
        let config = ScannerConfig {
            start_index: u64::MAX - 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_retry_delays() {
        let config = ScannerConfig {
            retry_delay_ms: 5_000,
            max_retry_delay_ms: 1_000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scanner.toml");

        assert_eq!(
            ScannerConfig::load_or_default(&path).unwrap(),
            ScannerConfig::default()
        );

        std::fs::write(&path, "lookahead = 42\n").unwrap();
        assert_eq!(ScannerConfig::load_or_default(&path).unwrap().lookahead, 42);

        std::fs::write(&path, "batch_size = 0\n").unwrap();
        assert!(ScannerConfig::load_or_default(&path).is_err());
    }
}
