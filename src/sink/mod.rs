//! Result recording.
//!
//! Classified domains are appended to two line-oriented files, one for active
//! and one for inactive domains. Writers are serialized per file so concurrent
//! evaluations never interleave partial lines.

mod format;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error_handling::SinkError;
use crate::models::Classification;

pub use format::{active_line, console_line, inactive_line};

/// Records one classified outcome per domain.
#[async_trait]
pub trait ResultSink: Send + Sync {
    async fn record(&self, domain: &str, classification: &Classification) -> Result<(), SinkError>;
}

/// One append-only output file guarded by an async mutex.
struct AppendFile {
    path: PathBuf,
    file: Mutex<File>,
}

impl AppendFile {
    async fn open(path: &Path) -> Result<Self, SinkError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|source| SinkError::Open {
                path: path.display().to_string(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    async fn append(&self, line: &str) -> Result<(), SinkError> {
        let mut file = self.file.lock().await;
        let written = async {
            file.write_all(line.as_bytes()).await?;
            // tokio files complete writes in the background; flush surfaces errors
            file.flush().await
        }
        .await;
        written.map_err(|source| SinkError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// `ResultSink` writing the active and inactive output files.
///
/// Files are created if absent and always appended to, never truncated.
pub struct FileSink {
    active: AppendFile,
    inactive: AppendFile,
}

impl FileSink {
    /// Opens (or creates) both output files.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Open` if either file cannot be opened for appending.
    pub async fn open(active: &Path, inactive: &Path) -> Result<Self, SinkError> {
        Ok(Self {
            active: AppendFile::open(active).await?,
            inactive: AppendFile::open(inactive).await?,
        })
    }
}

#[async_trait]
impl ResultSink for FileSink {
    async fn record(&self, domain: &str, classification: &Classification) -> Result<(), SinkError> {
        match classification {
            Classification::Active {
                url, redirected_to, ..
            } => {
                self.active
                    .append(&active_line(url, redirected_to.as_deref()))
                    .await
            }
            Classification::Inactive { .. } => self.inactive.append(&inactive_line(domain)).await,
        }
    }
}
