//! Outcome types for organize runs.

use serde::{Deserialize, Serialize};

/// How a single file was placed in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizeOutcome {
    /// Hard-linked into the library; the source stays in place for seeding.
    Linked,
    /// Moved into the library, consuming the source.
    Moved,
    /// The destination already existed; nothing was touched.
    AlreadyExists,
}

impl OrganizeOutcome {
    /// String representation for logging and metrics labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizeOutcome::Linked => "linked",
            OrganizeOutcome::Moved => "moved",
            OrganizeOutcome::AlreadyExists => "exists",
        }
    }
}

/// A placement failure captured at one file's boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizeFailure {
    /// Source path of the file, relative to the torrent root.
    pub file_path: String,
    /// Human-readable failure message.
    pub error: String,
}

/// Aggregated result of one organize run.
///
/// The four buckets partition the input: every classified file lands in
/// exactly one, so the bucket sizes always total the batch size. All
/// recorded paths are the torrent-relative source paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizeResult {
    /// Files hard-linked into the library.
    pub linked: Vec<String>,
    /// Files moved into the library.
    pub moved: Vec<String>,
    /// Files whose destination already existed.
    pub exists: Vec<String>,
    /// Files that failed to place.
    pub errors: Vec<OrganizeFailure>,
}

impl OrganizeResult {
    /// Files that reached a non-error outcome.
    pub fn success_count(&self) -> usize {
        self.linked.len() + self.moved.len() + self.exists.len()
    }

    /// Files accounted for across all four buckets.
    pub fn total(&self) -> usize {
        self.success_count() + self.errors.len()
    }

    /// Whether the caller's conventional advancement policy holds: no
    /// errors and at least one file reached a non-error outcome.
    pub fn is_complete_success(&self) -> bool {
        self.errors.is_empty() && self.success_count() > 0
    }

    pub(crate) fn record_outcome(&mut self, file_path: String, outcome: OrganizeOutcome) {
        match outcome {
            OrganizeOutcome::Linked => self.linked.push(file_path),
            OrganizeOutcome::Moved => self.moved.push(file_path),
            OrganizeOutcome::AlreadyExists => self.exists.push(file_path),
        }
    }

    pub(crate) fn record_error(&mut self, file_path: String, error: String) {
        self.errors.push(OrganizeFailure { file_path, error });
    }
}
