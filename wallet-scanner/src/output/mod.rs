//! Result sinks for used addresses.
//!
//! This module provides different ways to output used addresses:
//! - CSV file (`index,address` rows, no header)
//! - Stdout (JSON lines)

mod csv;
mod stdout;

pub use self::csv::CsvFileSink;
pub use stdout::StdoutSink;

use crate::{
    config::{OutputMode, ScannerConfig},
    error::ScanResult,
    record::UsedAddress,
};
use async_trait::async_trait;

/// Trait for used address sinks.
#[async_trait]
pub trait ResultSink: Send {
    /// Write a single record.
    async fn write(&mut self, record: &UsedAddress) -> ScanResult<()>;

    /// Write a batch of records in order.
    async fn write_batch(&mut self, records: &[UsedAddress]) -> ScanResult<()> {
        for record in records {
            self.write(record).await?;
        }
        Ok(())
    }

    /// Flush any buffered output.
    async fn flush(&mut self) -> ScanResult<()> {
        Ok(())
    }
}

/// Create a sink based on configuration.
pub fn create_sink(config: &ScannerConfig) -> ScanResult<Box<dyn ResultSink>> {
    match config.output_mode {
        OutputMode::Csv => Ok(Box::new(CsvFileSink::create(&config.output_path())?)),
        OutputMode::Stdout => Ok(Box::new(StdoutSink::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_csv_sink_from_config() {
        let dir = tempdir().unwrap();
        let config = ScannerConfig {
            output_dir: dir.path().join("out"),
            output_file: "used.csv".to_string(),
            ..Default::default()
        };

        let mut sink = create_sink(&config).unwrap();
        sink.flush().await.unwrap();
        assert!(dir.path().join("out").join("used.csv").exists());
    }
}
