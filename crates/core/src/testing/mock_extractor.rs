//! Mock extractor for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::extract::{ExtractError, Extractor};

/// A recorded extraction for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedExtraction {
    /// Torrent root passed to the call.
    pub torrent_root: PathBuf,
    /// Archive path passed to the call.
    pub archive_path: String,
}

/// Mock implementation of the Extractor trait.
///
/// Provides controllable behavior for testing:
/// - Configure extraction results per archive
/// - Record every extraction for assertions
/// - Simulate failures
///
/// Unconfigured archives fail with `ArchiveNotFound`, like the real
/// extractor on a missing file.
#[derive(Debug)]
pub struct MockExtractor {
    /// Configured results keyed by archive path.
    extractions: Arc<RwLock<HashMap<String, Vec<String>>>>,
    /// Recorded extract calls.
    recorded: Arc<RwLock<Vec<RecordedExtraction>>>,
    /// If set, the next call will fail with this error.
    next_error: Arc<RwLock<Option<ExtractError>>>,
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockExtractor {
    /// Create a new mock extractor.
    pub fn new() -> Self {
        Self {
            extractions: Arc::new(RwLock::new(HashMap::new())),
            recorded: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the files returned for an archive path.
    pub async fn set_extraction(&self, archive_path: impl Into<String>, files: Vec<String>) {
        self.extractions
            .write()
            .await
            .insert(archive_path.into(), files);
    }

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: ExtractError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get all recorded extract calls.
    pub async fn extractions(&self) -> Vec<RecordedExtraction> {
        self.recorded.read().await.clone()
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<ExtractError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Extractor for MockExtractor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn extract(
        &self,
        torrent_root: &Path,
        archive_path: &str,
    ) -> Result<Vec<String>, ExtractError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.recorded.write().await.push(RecordedExtraction {
            torrent_root: torrent_root.to_path_buf(),
            archive_path: archive_path.to_string(),
        });

        self.extractions
            .read()
            .await
            .get(archive_path)
            .cloned()
            .ok_or_else(|| ExtractError::ArchiveNotFound {
                path: torrent_root.join(archive_path),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_configured_extraction() {
        let extractor = MockExtractor::new();
        extractor
            .set_extraction("pack/archive.rar", vec!["pack/movie.mkv".to_string()])
            .await;

        let files = extractor
            .extract(Path::new("/downloads/t"), "pack/archive.rar")
            .await
            .unwrap();
        assert_eq!(files, vec!["pack/movie.mkv"]);
    }

    #[tokio::test]
    async fn test_unknown_archive_fails() {
        let extractor = MockExtractor::new();
        let err = extractor
            .extract(Path::new("/downloads/t"), "nope.rar")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::ArchiveNotFound { .. }));
    }

    #[tokio::test]
    async fn test_records_calls() {
        let extractor = MockExtractor::new();
        extractor.set_extraction("a.rar", vec![]).await;

        extractor
            .extract(Path::new("/downloads/t"), "a.rar")
            .await
            .unwrap();

        let recorded = extractor.extractions().await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].archive_path, "a.rar");
        assert_eq!(recorded[0].torrent_root, PathBuf::from("/downloads/t"));
    }

    #[tokio::test]
    async fn test_error_injection() {
        let extractor = MockExtractor::new();
        extractor.set_extraction("a.rar", vec![]).await;
        extractor
            .set_next_error(ExtractError::Timeout { timeout_secs: 300 })
            .await;

        let result = extractor.extract(Path::new("/downloads/t"), "a.rar").await;
        assert!(matches!(result, Err(ExtractError::Timeout { .. })));

        // Error should be consumed
        let result = extractor.extract(Path::new("/downloads/t"), "a.rar").await;
        assert!(result.is_ok());
    }
}
