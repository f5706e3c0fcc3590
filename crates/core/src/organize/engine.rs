//! Concurrent per-file placement into the media library.

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use tokio::fs;
use tracing::{debug, info, warn};

use crate::classify::ClassifiedFile;
use crate::metrics;
use crate::organize::{
    LibraryConfig, OrganizeError, OrganizeOutcome, OrganizeResult, PathResolver,
};

/// Places one torrent's classified files into the media library.
///
/// Every file of a batch is placed concurrently and independently; a
/// failure is caught at its own file's boundary and recorded, so a batch
/// partially succeeds rather than aborting. The destination tree doubles
/// as the durable state: a destination that already exists is skipped,
/// never overwritten, which makes re-running a whole batch a safe no-op.
///
/// Placement policy: a file whose source path appears in the torrent's
/// original file list is hard-linked (the source keeps seeding); anything
/// else is an extraction byproduct and is moved instead.
///
/// # Example
///
/// ```rust,ignore
/// let organizer = Organizer::new(&config.library);
/// let result = organizer
///     .organize(&torrent_root, &original_files, &classification.files)
///     .await;
/// assert_eq!(result.total(), classification.files.len());
/// ```
#[derive(Debug, Clone)]
pub struct Organizer {
    resolver: PathResolver,
}

impl Organizer {
    pub fn new(config: &LibraryConfig) -> Self {
        Self {
            resolver: PathResolver::new(config),
        }
    }

    /// Place every classified file, returning the aggregated result.
    ///
    /// `original_files` is the list the download client reported at
    /// torrent creation, with paths relative to `torrent_root`; membership
    /// in it decides hard-link versus move. The four result buckets
    /// partition the input exactly, independent of interleaving.
    pub async fn organize(
        &self,
        torrent_root: &Path,
        original_files: &HashSet<String>,
        files: &[ClassifiedFile],
    ) -> OrganizeResult {
        let start = Instant::now();

        debug!(
            files = files.len(),
            root = %torrent_root.display(),
            "Starting organize batch"
        );

        // Place all files concurrently
        let placements: Vec<_> = files
            .iter()
            .map(|file| async move {
                let outcome = self.place_file(torrent_root, original_files, file).await;
                (file.file_path().to_string(), outcome)
            })
            .collect();

        let outcomes = futures::future::join_all(placements).await;

        let mut result = OrganizeResult::default();
        for (file_path, outcome) in outcomes {
            match outcome {
                Ok(outcome) => {
                    metrics::FILES_ORGANIZED
                        .with_label_values(&[outcome.as_str()])
                        .inc();
                    result.record_outcome(file_path, outcome);
                }
                Err(e) => {
                    warn!(file = %file_path, error = %e, "Placement failed");
                    metrics::FILES_ORGANIZED.with_label_values(&["error"]).inc();
                    result.record_error(file_path, e.to_string());
                }
            }
        }

        metrics::ORGANIZE_DURATION
            .with_label_values(&[])
            .observe(start.elapsed().as_secs_f64());

        info!(
            linked = result.linked.len(),
            moved = result.moved.len(),
            exists = result.exists.len(),
            errors = result.errors.len(),
            "Organize batch complete"
        );

        result
    }

    /// Place a single file. Failures are returned, never raised past here.
    async fn place_file(
        &self,
        torrent_root: &Path,
        original_files: &HashSet<String>,
        file: &ClassifiedFile,
    ) -> Result<OrganizeOutcome, OrganizeError> {
        let source = torrent_root.join(file.file_path());
        let destination = self.resolver.resolve(file).await?;

        // An existing destination wins over everything, including a
        // missing source: the library copy is already in place.
        let dest_exists = fs::try_exists(&destination).await.map_err(|e| {
            OrganizeError::ExistenceCheckFailed {
                path: destination.clone(),
                source: e,
            }
        })?;
        if dest_exists {
            debug!(dest = %destination.display(), "Destination already present, skipping");
            return Ok(OrganizeOutcome::AlreadyExists);
        }

        if !fs::try_exists(&source).await.unwrap_or(false) {
            return Err(OrganizeError::SourceNotFound { path: source });
        }

        if original_files.contains(file.file_path()) {
            fs::hard_link(&source, &destination)
                .await
                .map_err(|e| OrganizeError::LinkFailed {
                    source_path: source.clone(),
                    dest_path: destination.clone(),
                    source: e,
                })?;
            debug!(
                source = %source.display(),
                dest = %destination.display(),
                "Hard-linked into library"
            );
            Ok(OrganizeOutcome::Linked)
        } else {
            fs::rename(&source, &destination)
                .await
                .map_err(|e| OrganizeError::MoveFailed {
                    source_path: source.clone(),
                    dest_path: destination.clone(),
                    source: e,
                })?;
            debug!(
                source = %source.display(),
                dest = %destination.display(),
                "Moved byproduct into library"
            );
            Ok(OrganizeOutcome::Moved)
        }
    }
}
