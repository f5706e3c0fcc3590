//! Error types for the extract module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during archive extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Archive file not found.
    #[error("Archive not found: {path}")]
    ArchiveNotFound { path: PathBuf },

    /// unrar binary not found.
    #[error("unrar not found at path: {path}")]
    UnrarNotFound { path: PathBuf },

    /// Extraction process failed.
    #[error("Extraction failed: {reason}")]
    ExtractionFailed {
        reason: String,
        stderr: Option<String>,
    },

    /// Extraction timed out.
    #[error("Extraction timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error during extraction.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Creates a new extraction failed error with stderr output.
    pub fn extraction_failed(reason: impl Into<String>, stderr: Option<String>) -> Self {
        Self::ExtractionFailed {
            reason: reason.into(),
            stderr,
        }
    }
}
