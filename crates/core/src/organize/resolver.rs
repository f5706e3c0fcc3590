//! Canonical destination paths for classified files.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::classify::ClassifiedFile;
use crate::organize::{LibraryConfig, OrganizeError};

/// Maps classified files to canonical library paths.
///
/// Path computation is pure and infallible; [`PathResolver::resolve`]
/// additionally makes sure a series file's season directory exists.
/// Creation is recursive and idempotent, so concurrent workers resolving
/// episodes of the same season cannot fail each other.
#[derive(Debug, Clone)]
pub struct PathResolver {
    movies_root: PathBuf,
    series_root: PathBuf,
}

impl PathResolver {
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            movies_root: config.movies_root.clone(),
            series_root: config.series_root.clone(),
        }
    }

    /// Compute the destination path without touching the filesystem.
    ///
    /// Movies land directly under the movies root as `{title}{ext}`;
    /// episodes land under `{series}/Season {n}` as `S{nn}E{nn}{ext}`.
    /// The extension is carried over verbatim from the source path.
    /// Season and episode numbers are zero-padded to two digits and widen
    /// naturally past 99.
    pub fn destination(&self, file: &ClassifiedFile) -> PathBuf {
        match file {
            ClassifiedFile::Movie {
                title, file_path, ..
            } => self
                .movies_root
                .join(format!("{}{}", title, extension_of(file_path))),
            ClassifiedFile::Series {
                series_title,
                season,
                episode,
                file_path,
                ..
            } => self
                .series_root
                .join(series_title)
                .join(format!("Season {}", season))
                .join(format!(
                    "S{:02}E{:02}{}",
                    season,
                    episode,
                    extension_of(file_path)
                )),
        }
    }

    /// Compute the destination, creating the season directory if needed.
    ///
    /// Movie destinations sit directly in the movies root, which is
    /// required to pre-exist, so only series files create anything here.
    pub async fn resolve(&self, file: &ClassifiedFile) -> Result<PathBuf, OrganizeError> {
        let destination = self.destination(file);
        if matches!(file, ClassifiedFile::Series { .. }) {
            if let Some(season_dir) = destination.parent() {
                fs::create_dir_all(season_dir).await.map_err(|e| {
                    OrganizeError::DirectoryCreationFailed {
                        path: season_dir.to_path_buf(),
                        source: e,
                    }
                })?;
            }
        }
        Ok(destination)
    }
}

/// File extension with its leading dot, empty when the path has none.
fn extension_of(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
