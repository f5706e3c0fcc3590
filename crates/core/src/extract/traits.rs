//! Archive extractor abstraction.

use async_trait::async_trait;
use std::path::Path;

use crate::extract::ExtractError;

/// Trait for archive extractors.
///
/// An extractor unpacks one archive inside a torrent's contents and
/// reports the files it produced, so they can join the classification
/// candidates as byproducts.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extractor name for logging (e.g. "unrar", "mock").
    fn name(&self) -> &str;

    /// Extract the archive at `archive_path` (relative to `torrent_root`)
    /// next to itself, returning the torrent-root-relative paths of the
    /// extracted files.
    async fn extract(
        &self,
        torrent_root: &Path,
        archive_path: &str,
    ) -> Result<Vec<String>, ExtractError>;
}
