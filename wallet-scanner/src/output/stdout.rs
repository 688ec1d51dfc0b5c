//! Stdout result sink.
//!
//! Outputs records as JSON lines to stdout, suitable for piping to other tools.

use super::ResultSink;
use crate::{error::ScanResult, record::UsedAddress};
use async_trait::async_trait;
use std::io::Write;

/// Sink that prints records to stdout as JSON lines.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Create a new stdout sink.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultSink for StdoutSink {
    async fn write(&mut self, record: &UsedAddress) -> ScanResult<()> {
        println!("{}", record.to_json());
        Ok(())
    }

    async fn flush(&mut self) -> ScanResult<()> {
        std::io::stdout().flush()?;
        Ok(())
    }
}
