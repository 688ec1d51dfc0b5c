//! CSV file result sink.

use super::ResultSink;
use crate::{error::ScanResult, record::UsedAddress};
use async_trait::async_trait;
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

/// Sink that writes `index,address` rows to a file.
///
/// The file is truncated on creation; rows are buffered until [`flush`]
/// which also syncs them to disk.
///
/// [`write`] and the buffer drain in [`flush`] use blocking `std::fs` I/O on
/// the calling task. Rows are small and buffered, so these calls rarely touch
/// the disk. The `fsync` in [`flush`] runs on the blocking thread pool.
///
/// [`write`]: ResultSink::write
/// [`flush`]: ResultSink::flush
pub struct CsvFileSink {
    writer: BufWriter<File>,
    path: PathBuf,
    rows: u64,
}

impl CsvFileSink {
    /// Create (or truncate) the file at `path`, creating parent directories.
    pub fn create(path: &Path) -> ScanResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        tracing::debug!("Writing used addresses to {:?}", path);

        Ok(Self {
            writer: BufWriter::new(file),
            path: path.to_path_buf(),
            rows: 0,
        })
    }

    /// Path of the output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }
}

#[async_trait]
impl ResultSink for CsvFileSink {
    async fn write(&mut self, record: &UsedAddress) -> ScanResult<()> {
        writeln!(self.writer, "{}", record.to_csv_row())?;
        self.rows += 1;
        Ok(())
    }

    async fn flush(&mut self) -> ScanResult<()> {
        self.writer.flush()?;
        let file = self.writer.get_ref().try_clone()?;
        tokio::task::spawn_blocking(move || file.sync_data())
            .await
            .map_err(io::Error::other)??;
        Ok(())
    }
}
