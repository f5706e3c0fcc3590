//! Configuration for the extract module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the unrar-based extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Path to the unrar binary.
    #[serde(default = "default_unrar_path")]
    pub unrar_path: PathBuf,

    /// Timeout for a single extraction in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_unrar_path() -> PathBuf {
    PathBuf::from("unrar")
}

fn default_timeout() -> u64 {
    300 // 5 minutes
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            unrar_path: default_unrar_path(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ExtractionConfig {
    /// Sets the unrar binary path.
    pub fn with_unrar_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.unrar_path = path.into();
        self
    }

    /// Sets the extraction timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
