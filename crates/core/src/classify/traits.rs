//! Classifier abstraction.

use async_trait::async_trait;

use crate::classify::{Classification, ClassifyError};

/// Everything the classifier gets to see for one torrent: its display name
/// plus every candidate file path, original contents and extraction
/// byproducts alike.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifyRequest {
    /// Torrent display name.
    pub torrent_name: String,
    /// Candidate file paths, relative to the torrent root.
    pub file_names: Vec<String>,
}

impl ClassifyRequest {
    pub fn new(torrent_name: impl Into<String>, file_names: Vec<String>) -> Self {
        Self {
            torrent_name: torrent_name.into(),
            file_names,
        }
    }
}

/// Trait for classification backends.
///
/// The production backend lives outside this crate (it talks to an LLM);
/// the engine only depends on this seam.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Backend name for logging (e.g. "mock").
    fn name(&self) -> &str;

    /// Classify every candidate file of one torrent.
    async fn classify(&self, request: ClassifyRequest) -> Result<Classification, ClassifyError>;
}
