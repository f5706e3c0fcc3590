//! Types for download client operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during download client operations.
#[derive(Debug, Error)]
pub enum DownloadClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Torrent not found: {0}")]
    TorrentNotFound(String),

    #[error("Torrent not finished: {0}")]
    NotFinished(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A torrent that has finished downloading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishedTorrent {
    /// Info hash (lowercase hex).
    pub hash: String,
    /// Torrent name.
    pub name: String,
    /// Directory on disk containing the torrent's content.
    pub content_root: PathBuf,
    /// Paths of the torrent's files, relative to `content_root`.
    pub files: Vec<String>,
    /// When the torrent completed downloading.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl FinishedTorrent {
    /// The torrent's own file paths as a set.
    ///
    /// Files in this set are still needed for seeding; anything else
    /// found under `content_root` is a byproduct that can be moved away.
    pub fn file_name_set(&self) -> HashSet<String> {
        self.files.iter().cloned().collect()
    }
}

/// Trait for download client backends.
#[async_trait]
pub trait DownloadClient: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Fetch a finished torrent by hash.
    ///
    /// Fails with [`DownloadClientError::NotFinished`] if the torrent
    /// exists but is still downloading.
    async fn finished_torrent(&self, hash: &str) -> Result<FinishedTorrent, DownloadClientError>;

    /// Advance a torrent from the download stage to the seeding stage.
    async fn advance_lifecycle(&self, hash: &str) -> Result<(), DownloadClientError>;
}
