//! Mock download client for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::download_client::{DownloadClient, DownloadClientError, FinishedTorrent};

/// Mock implementation of the DownloadClient trait.
///
/// Provides controllable behavior for testing:
/// - Pre-populate finished torrents
/// - Track lifecycle advancements for assertions
/// - Simulate failures on fetch and advance independently
///
/// # Example
///
/// ```rust,ignore
/// let client = MockDownloadClient::new();
/// client.add_finished_torrent(torrent).await;
///
/// let torrent = client.finished_torrent("abc123").await?;
/// client.advance_lifecycle("abc123").await?;
/// assert!(client.was_advanced("abc123").await);
/// ```
#[derive(Debug)]
pub struct MockDownloadClient {
    /// Finished torrents by hash.
    torrents: Arc<RwLock<HashMap<String, FinishedTorrent>>>,
    /// Hashes advanced to the seeding stage, in call order.
    advanced: Arc<RwLock<Vec<String>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<DownloadClientError>>>,
    /// If set, the next advance will fail with this error.
    next_advance_error: Arc<RwLock<Option<DownloadClientError>>>,
}

impl Default for MockDownloadClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDownloadClient {
    /// Create a new mock download client.
    pub fn new() -> Self {
        Self {
            torrents: Arc::new(RwLock::new(HashMap::new())),
            advanced: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
            next_advance_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Pre-populate a finished torrent.
    pub async fn add_finished_torrent(&self, torrent: FinishedTorrent) {
        self.torrents
            .write()
            .await
            .insert(torrent.hash.clone(), torrent);
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: DownloadClientError) {
        *self.next_error.write().await = Some(error);
    }

    /// Configure the next advance to fail with the given error.
    pub async fn set_next_advance_error(&self, error: DownloadClientError) {
        *self.next_advance_error.write().await = Some(error);
    }

    /// Get all advanced hashes, in call order.
    pub async fn advanced_hashes(&self) -> Vec<String> {
        self.advanced.read().await.clone()
    }

    /// Check whether a torrent was advanced.
    pub async fn was_advanced(&self, hash: &str) -> bool {
        self.advanced.read().await.iter().any(|h| h == hash)
    }
}

#[async_trait]
impl DownloadClient for MockDownloadClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn finished_torrent(&self, hash: &str) -> Result<FinishedTorrent, DownloadClientError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.torrents
            .read()
            .await
            .get(hash)
            .cloned()
            .ok_or_else(|| DownloadClientError::TorrentNotFound(hash.to_string()))
    }

    async fn advance_lifecycle(&self, hash: &str) -> Result<(), DownloadClientError> {
        if let Some(err) = self.next_advance_error.write().await.take() {
            return Err(err);
        }

        if !self.torrents.read().await.contains_key(hash) {
            return Err(DownloadClientError::TorrentNotFound(hash.to_string()));
        }

        self.advanced.write().await.push(hash.to_string());
        Ok(())
    }
}
