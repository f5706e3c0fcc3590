//! Torrent pipeline implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::classify::{Classifier, ClassifyError, ClassifyRequest, InvalidClassification};
use crate::download_client::{DownloadClient, DownloadClientError, FinishedTorrent};
use crate::extract::{is_archive_head, Extractor};
use crate::metrics::{
    EXTRACTIONS_TOTAL, LIFECYCLE_ADVANCED, NOTIFICATIONS_TOTAL, TORRENTS_PROCESSED,
};
use crate::notify::Notifier;
use crate::organize::{Organizer, OrganizeResult};
use crate::report::{format_classification_failed, format_finished, format_organized};

use super::config::PipelineConfig;
use super::types::PipelineReport;

/// Error type for pipeline runs.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The download client could not produce the torrent.
    #[error("Download client error: {0}")]
    Client(#[from] DownloadClientError),

    /// Classification failed.
    #[error("Classification failed: {0}")]
    Classify(#[from] ClassifyError),

    /// The classifier produced files that cannot be organized.
    #[error("Invalid classification: {0}")]
    InvalidClassification(#[from] InvalidClassification),
}

impl PipelineError {
    /// Metrics label for the failed run.
    fn result_label(&self) -> &'static str {
        match self {
            PipelineError::Client(_) => "client_error",
            PipelineError::Classify(_) => "classify_failed",
            PipelineError::InvalidClassification(_) => "invalid_classification",
        }
    }
}

/// Drives one finished torrent from the download directory into the library.
///
/// The run is linear: fetch the torrent, announce it, expand any RAR
/// archives, classify the candidate files, organize them, optionally
/// advance the torrent to seeding, and deliver the summary. Archive and
/// notification failures are absorbed with a warning; classification
/// failures abort the run after telling the user.
pub struct TorrentPipeline {
    config: PipelineConfig,
    classifier: Arc<dyn Classifier>,
    extractor: Arc<dyn Extractor>,
    download_client: Arc<dyn DownloadClient>,
    notifier: Arc<dyn Notifier>,
    organizer: Organizer,
}

impl TorrentPipeline {
    /// Creates a new pipeline.
    pub fn new(
        config: PipelineConfig,
        classifier: Arc<dyn Classifier>,
        extractor: Arc<dyn Extractor>,
        download_client: Arc<dyn DownloadClient>,
        notifier: Arc<dyn Notifier>,
        organizer: Organizer,
    ) -> Self {
        Self {
            config,
            classifier,
            extractor,
            download_client,
            notifier,
            organizer,
        }
    }

    /// Processes one finished torrent end to end.
    pub async fn process_torrent(&self, hash: &str) -> Result<PipelineReport, PipelineError> {
        let run_id = Uuid::new_v4().to_string();
        debug!(run_id = %run_id, hash = %hash, "Pipeline run starting");

        let result = self.run(&run_id, hash).await;
        match &result {
            Ok(report) => {
                TORRENTS_PROCESSED.with_label_values(&["organized"]).inc();
                info!(
                    run_id = %run_id,
                    hash = %hash,
                    files = report.result.total(),
                    errors = report.result.errors.len(),
                    advanced = report.advanced,
                    "Torrent organized"
                );
            }
            Err(e) => {
                TORRENTS_PROCESSED
                    .with_label_values(&[e.result_label()])
                    .inc();
                warn!(run_id = %run_id, hash = %hash, error = %e, "Pipeline run failed");
            }
        }
        result
    }

    async fn run(&self, run_id: &str, hash: &str) -> Result<PipelineReport, PipelineError> {
        let torrent = self.download_client.finished_torrent(hash).await?;
        info!(
            run_id = %run_id,
            name = %torrent.name,
            files = torrent.files.len(),
            "Processing finished torrent"
        );

        self.notify(&format_finished(&torrent.name)).await;

        let mut file_names = torrent.files.clone();
        self.expand_archives(&torrent, &mut file_names).await;

        let request = ClassifyRequest::new(&torrent.name, file_names);
        let classification = match self.classifier.classify(request).await {
            Ok(classification) => classification,
            Err(e) => {
                self.notify(&format_classification_failed(&torrent.name))
                    .await;
                return Err(e.into());
            }
        };

        // A classification that names unusable paths is as dead as a failed
        // one; tell the user the same thing before aborting.
        if let Err(e) = classification.validate() {
            self.notify(&format_classification_failed(&torrent.name))
                .await;
            return Err(e.into());
        }
        debug!(
            run_id = %run_id,
            classified = classification.files.len(),
            "Classification validated"
        );

        let original_files = torrent.file_name_set();
        let result = self
            .organizer
            .organize(&torrent.content_root, &original_files, &classification.files)
            .await;

        let advanced = self.maybe_advance(hash, &result).await;

        let report_text = format_organized(&torrent.name, &classification, &result, advanced);
        self.notify(&report_text).await;

        Ok(PipelineReport {
            torrent,
            classification,
            result,
            advanced,
            report_text,
        })
    }

    /// Expands RAR archive heads found among the torrent's files.
    ///
    /// Extracted files are appended to `file_names` so they get
    /// classified together with the torrent's own content. A failed
    /// archive is skipped with a warning; its contents simply never
    /// reach the classifier.
    async fn expand_archives(&self, torrent: &FinishedTorrent, file_names: &mut Vec<String>) {
        for archive in torrent.files.iter().filter(|f| is_archive_head(f)) {
            match self
                .extractor
                .extract(&torrent.content_root, archive)
                .await
            {
                Ok(extracted) => {
                    EXTRACTIONS_TOTAL.with_label_values(&["ok"]).inc();
                    info!(
                        archive = %archive,
                        files = extracted.len(),
                        "Archive expanded"
                    );
                    file_names.extend(extracted);
                }
                Err(e) => {
                    EXTRACTIONS_TOTAL.with_label_values(&["failed"]).inc();
                    warn!(archive = %archive, error = %e, "Archive extraction failed, skipping it");
                }
            }
        }
    }

    /// Advances the torrent to seeding when the run earned it.
    ///
    /// Requires `advance_completed` plus a clean result with at least one
    /// organized file. A client failure here leaves the torrent where it
    /// is and the report says so.
    async fn maybe_advance(&self, hash: &str, result: &OrganizeResult) -> bool {
        if !self.config.advance_completed {
            return false;
        }
        if !result.is_complete_success() {
            info!(
                hash = %hash,
                errors = result.errors.len(),
                organized = result.success_count(),
                "Not advancing torrent lifecycle"
            );
            return false;
        }

        match self.download_client.advance_lifecycle(hash).await {
            Ok(()) => {
                LIFECYCLE_ADVANCED.inc();
                info!(hash = %hash, "Torrent advanced to seeding stage");
                true
            }
            Err(e) => {
                warn!(hash = %hash, error = %e, "Failed to advance torrent lifecycle");
                false
            }
        }
    }

    /// Best-effort notification delivery.
    async fn notify(&self, message: &str) {
        match self.notifier.notify(message).await {
            Ok(()) => {
                NOTIFICATIONS_TOTAL.with_label_values(&["ok"]).inc();
            }
            Err(e) => {
                NOTIFICATIONS_TOTAL.with_label_values(&["failed"]).inc();
                warn!(
                    notifier = self.notifier.name(),
                    error = %e,
                    "Notification delivery failed"
                );
            }
        }
    }
}
