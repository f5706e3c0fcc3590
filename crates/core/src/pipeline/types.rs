//! Types for the pipeline module.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;
use crate::download_client::FinishedTorrent;
use crate::organize::OrganizeResult;

/// Result of processing one finished torrent end to end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    /// The torrent as the download client reported it.
    pub torrent: FinishedTorrent,
    /// The validated classification that drove organization.
    pub classification: Classification,
    /// Per-file placement outcomes.
    pub result: OrganizeResult,
    /// Whether the torrent advanced to the seeding stage.
    pub advanced: bool,
    /// The rendered summary delivered to the user.
    pub report_text: String,
}
