use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Destination roots for organized media.
///
/// Both directories are expected to exist and be writable before a run;
/// the engine only creates per-series season directories underneath
/// `series_root`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Directory receiving movie files.
    pub movies_root: PathBuf,
    /// Directory receiving series season trees.
    pub series_root: PathBuf,
}

impl LibraryConfig {
    pub fn new(movies_root: impl Into<PathBuf>, series_root: impl Into<PathBuf>) -> Self {
        Self {
            movies_root: movies_root.into(),
            series_root: series_root.into(),
        }
    }
}
