//! unrar-based extractor implementation.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

use super::config::ExtractionConfig;
use super::error::ExtractError;
use super::traits::Extractor;

static PART_VOLUME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.part(\d+)\.rar$").unwrap());

/// Whether a path looks like the head volume of a RAR set.
///
/// Plain `.rar` files and `.part1.rar`-style heads qualify; continuation
/// volumes (`.part2.rar`, `.r00`, ...) would extract the same set twice
/// and do not.
pub fn is_archive_head(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    if !lower.ends_with(".rar") {
        return false;
    }
    if let Some(caps) = PART_VOLUME.captures(&lower) {
        return caps
            .get(1)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .map(|n| n == 1)
            .unwrap_or(false);
    }
    true
}

/// unrar-based extractor.
///
/// Lists archive contents with `unrar lb` and extracts with
/// `unrar e -o+` into the archive's own directory, flattening any paths
/// inside the archive.
pub struct UnrarExtractor {
    config: ExtractionConfig,
}

impl UnrarExtractor {
    /// Creates a new extractor with the given configuration.
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Creates an extractor with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ExtractionConfig::default())
    }

    async fn run_unrar(&self, args: &[&str]) -> Result<Output, ExtractError> {
        debug!(unrar = %self.config.unrar_path.display(), ?args, "Running unrar");

        let result = timeout(
            Duration::from_secs(self.config.timeout_secs),
            Command::new(&self.config.unrar_path)
                .args(args)
                .kill_on_drop(true)
                .output(),
        )
        .await
        .map_err(|_| ExtractError::Timeout {
            timeout_secs: self.config.timeout_secs,
        })?;

        result.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExtractError::UnrarNotFound {
                    path: self.config.unrar_path.clone(),
                }
            } else {
                ExtractError::Io(e)
            }
        })
    }
}

#[async_trait]
impl Extractor for UnrarExtractor {
    fn name(&self) -> &str {
        "unrar"
    }

    async fn extract(
        &self,
        torrent_root: &Path,
        archive_path: &str,
    ) -> Result<Vec<String>, ExtractError> {
        let archive = torrent_root.join(archive_path);
        if !tokio::fs::try_exists(&archive).await.unwrap_or(false) {
            return Err(ExtractError::ArchiveNotFound { path: archive });
        }

        let archive_str = archive.to_string_lossy().to_string();

        let listing = self.run_unrar(&["lb", &archive_str]).await?;
        if !listing.status.success() {
            return Err(ExtractError::extraction_failed(
                format!("unrar lb exited with code {:?}", listing.status.code()),
                Some(String::from_utf8_lossy(&listing.stderr).to_string()),
            ));
        }

        let names = parse_listing(&String::from_utf8_lossy(&listing.stdout));
        if names.is_empty() {
            warn!(archive = %archive.display(), "Archive listed no files");
            return Ok(Vec::new());
        }

        // Extract next to the archive, overwriting stale partial output.
        let dest_dir = archive
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| torrent_root.to_path_buf());
        let dest_arg = format!("{}/", dest_dir.display());

        let extraction = self
            .run_unrar(&["e", "-o+", &archive_str, &dest_arg])
            .await?;
        if !extraction.status.success() {
            return Err(ExtractError::extraction_failed(
                format!("unrar e exited with code {:?}", extraction.status.code()),
                Some(String::from_utf8_lossy(&extraction.stderr).to_string()),
            ));
        }

        let extracted = byproduct_paths(archive_path, &names);
        info!(
            archive = %archive.display(),
            files = extracted.len(),
            "Archive extracted"
        );
        Ok(extracted)
    }
}

/// Parse `unrar lb` output into the archive's file names.
fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Torrent-root-relative paths of the extracted files.
///
/// `unrar e` flattens archive-internal paths, so every extracted file
/// lands as a basename in the archive's own directory.
fn byproduct_paths(archive_path: &str, names: &[String]) -> Vec<String> {
    let archive_dir = Path::new(archive_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_default();

    names
        .iter()
        .filter_map(|name| Path::new(name).file_name())
        .map(|base| archive_dir.join(base).to_string_lossy().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plain_rar_is_a_head() {
        assert!(is_archive_head("movie.rar"));
        assert!(is_archive_head("nested/dir/Movie.RAR"));
    }

    #[test]
    fn test_only_first_part_volume_is_a_head() {
        assert!(is_archive_head("movie.part1.rar"));
        assert!(is_archive_head("movie.part01.rar"));
        assert!(!is_archive_head("movie.part2.rar"));
        assert!(!is_archive_head("movie.part10.rar"));
    }

    #[test]
    fn test_non_rar_files_are_not_heads() {
        assert!(!is_archive_head("movie.mkv"));
        assert!(!is_archive_head("movie.r00"));
        assert!(!is_archive_head("movie.zip"));
        assert!(!is_archive_head("rar"));
    }

    #[test]
    fn test_parse_listing_skips_blank_lines() {
        let names = parse_listing("movie.mkv\n\n  \nsample/sample.mkv\n");
        assert_eq!(names, vec!["movie.mkv", "sample/sample.mkv"]);
    }

    #[test]
    fn test_byproduct_paths_flatten_into_archive_dir() {
        let names = vec!["movie.mkv".to_string(), "subs/english.srt".to_string()];
        assert_eq!(
            byproduct_paths("pack/archive.rar", &names),
            vec!["pack/movie.mkv", "pack/english.srt"]
        );
    }

    #[test]
    fn test_byproduct_paths_for_root_level_archive() {
        let names = vec!["movie.mkv".to_string()];
        assert_eq!(byproduct_paths("archive.rar", &names), vec!["movie.mkv"]);
    }

    #[tokio::test]
    async fn test_missing_archive_is_reported() {
        let temp = TempDir::new().unwrap();
        let extractor = UnrarExtractor::with_defaults();

        let err = extractor
            .extract(temp.path(), "nope.rar")
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::ArchiveNotFound { .. }));
    }

    #[tokio::test]
    async fn test_missing_binary_is_reported() {
        let temp = TempDir::new().unwrap();
        tokio::fs::write(temp.path().join("x.rar"), b"not a real archive")
            .await
            .unwrap();

        let extractor = UnrarExtractor::new(
            ExtractionConfig::default().with_unrar_path("/nonexistent/unrar-for-tests"),
        );

        let err = extractor.extract(temp.path(), "x.rar").await.unwrap_err();
        assert!(matches!(err, ExtractError::UnrarNotFound { .. }));
    }
}
