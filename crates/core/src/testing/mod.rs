//! Testing utilities and mock implementations for E2E tests.
//!
//! This module provides mock implementations of all external service traits,
//! allowing comprehensive E2E testing without real infrastructure.
//!
//! # Example
//!
//! ```rust,ignore
//! use tidyseed_core::testing::{MockClassifier, MockDownloadClient, MockNotifier};
//!
//! let classifier = MockClassifier::new();
//! let client = MockDownloadClient::new();
//! let notifier = MockNotifier::new();
//!
//! // Configure mock responses
//! client.add_finished_torrent(torrent).await;
//! classifier.set_response(classification).await;
//!
//! // Use in a TorrentPipeline...
//! ```

mod mock_classifier;
mod mock_download_client;
mod mock_extractor;
mod mock_notifier;

pub use mock_classifier::MockClassifier;
pub use mock_download_client::MockDownloadClient;
pub use mock_extractor::{MockExtractor, RecordedExtraction};
pub use mock_notifier::MockNotifier;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::PathBuf;

    use crate::classify::{Classification, ClassifiedFile};
    use crate::download_client::FinishedTorrent;

    /// Create a finished torrent with reasonable defaults.
    pub fn finished_torrent(
        hash: &str,
        name: &str,
        content_root: impl Into<PathBuf>,
        files: &[&str],
    ) -> FinishedTorrent {
        FinishedTorrent {
            hash: hash.to_string(),
            name: name.to_string(),
            content_root: content_root.into(),
            files: files.iter().map(|f| f.to_string()).collect(),
            completed_at: None,
        }
    }

    /// Create a movie classification entry.
    pub fn movie(title: &str, file_path: &str) -> ClassifiedFile {
        ClassifiedFile::Movie {
            title: title.to_string(),
            file_path: file_path.to_string(),
            not_part_of_torrent: false,
        }
    }

    /// Create a series episode classification entry.
    pub fn episode(series_title: &str, season: u32, episode: u32, file_path: &str) -> ClassifiedFile {
        ClassifiedFile::Series {
            series_title: series_title.to_string(),
            season,
            episode,
            episode_title: None,
            file_path: file_path.to_string(),
            not_part_of_torrent: false,
        }
    }

    /// Create a classification with the given entries.
    pub fn classification(
        description: &str,
        icon: &str,
        files: Vec<ClassifiedFile>,
    ) -> Classification {
        Classification {
            files,
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }
}
