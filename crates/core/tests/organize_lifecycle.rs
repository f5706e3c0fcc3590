//! Organize lifecycle integration tests.
//!
//! These tests drive the organizer against a real filesystem:
//! - Library tree layout for movies and series
//! - Hard-link versus move decided by torrent membership
//! - Idempotent reruns and existing-destination handling
//! - Per-file error isolation and report rendering

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use tidyseed_core::classify::{Classification, ClassifiedFile};
use tidyseed_core::organize::{LibraryConfig, OrganizeResult, Organizer};
use tidyseed_core::report::format_organized;
use tidyseed_core::testing::fixtures::{episode, movie};

/// Test helper wrapping an organizer and its directories.
struct TestHarness {
    organizer: Organizer,
    downloads: TempDir,
    library: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        let downloads = TempDir::new().expect("Failed to create downloads dir");
        let library = TempDir::new().expect("Failed to create library dir");

        let config =
            LibraryConfig::new(library.path().join("movies"), library.path().join("series"));
        std::fs::create_dir_all(&config.movies_root).expect("Failed to create movies root");
        std::fs::create_dir_all(&config.series_root).expect("Failed to create series root");

        Self {
            organizer: Organizer::new(&config),
            downloads,
            library,
        }
    }

    fn torrent_root(&self) -> &Path {
        self.downloads.path()
    }

    fn movies_root(&self) -> PathBuf {
        self.library.path().join("movies")
    }

    fn series_root(&self) -> PathBuf {
        self.library.path().join("series")
    }

    fn write_source(&self, rel: &str, contents: &str) {
        let path = self.downloads.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create source parent");
        }
        std::fs::write(&path, contents).expect("Failed to write source file");
    }

    fn source_exists(&self, rel: &str) -> bool {
        self.downloads.path().join(rel).exists()
    }

    async fn organize(&self, original: &[&str], files: &[ClassifiedFile]) -> OrganizeResult {
        let original: HashSet<String> = original.iter().map(|f| f.to_string()).collect();
        self.organizer
            .organize(self.torrent_root(), &original, files)
            .await
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Failed to read file")
}

// =============================================================================
// Library Layout Tests
// =============================================================================

#[tokio::test]
async fn test_series_files_land_in_season_tree() {
    let harness = TestHarness::new();
    harness.write_source("bb1.mkv", "episode one");
    harness.write_source("bb2.mkv", "episode two");

    let result = harness
        .organize(
            &["bb1.mkv", "bb2.mkv"],
            &[
                episode("Breaking Bad", 1, 1, "bb1.mkv"),
                episode("Breaking Bad", 1, 2, "bb2.mkv"),
            ],
        )
        .await;

    assert_eq!(result.linked.len(), 2, "Both episodes should be linked");
    assert!(result.errors.is_empty());

    let season_dir = harness.series_root().join("Breaking Bad").join("Season 1");
    assert_eq!(read(&season_dir.join("S01E01.mkv")), "episode one");
    assert_eq!(read(&season_dir.join("S01E02.mkv")), "episode two");
}

#[tokio::test]
async fn test_movie_files_land_flat_in_movies_root() {
    let harness = TestHarness::new();
    harness.write_source("inception.mkv", "movie bytes");

    let result = harness
        .organize(&["inception.mkv"], &[movie("Inception", "inception.mkv")])
        .await;

    assert_eq!(result.linked.len(), 1);
    assert_eq!(
        read(&harness.movies_root().join("Inception.mkv")),
        "movie bytes"
    );
}

#[tokio::test]
async fn test_episode_numbers_beyond_two_digits_widen() {
    let harness = TestHarness::new();
    harness.write_source("ep.mkv", "x");

    harness
        .organize(&["ep.mkv"], &[episode("One Piece", 1, 1015, "ep.mkv")])
        .await;

    let dest = harness
        .series_root()
        .join("One Piece")
        .join("Season 1")
        .join("S01E1015.mkv");
    assert!(dest.exists(), "Wide episode number should keep all digits");
}

#[tokio::test]
async fn test_nested_source_paths_resolve_against_torrent_root() {
    let harness = TestHarness::new();
    harness.write_source("Season 1/nested.mkv", "nested bytes");

    let result = harness
        .organize(
            &["Season 1/nested.mkv"],
            &[episode("Dark", 1, 3, "Season 1/nested.mkv")],
        )
        .await;

    assert_eq!(result.linked, vec!["Season 1/nested.mkv"]);
    let dest = harness.series_root().join("Dark").join("Season 1").join("S01E03.mkv");
    assert_eq!(read(&dest), "nested bytes");
}

// =============================================================================
// Link versus Move Tests
// =============================================================================

#[tokio::test]
async fn test_torrent_members_are_linked_and_byproducts_moved() {
    let harness = TestHarness::new();
    harness.write_source("ep1.mkv", "member");
    harness.write_source("pack/extracted.mkv", "byproduct");

    let result = harness
        .organize(
            &["ep1.mkv", "pack/archive.rar"],
            &[
                episode("Westworld", 1, 1, "ep1.mkv"),
                movie("Extracted Movie", "pack/extracted.mkv"),
            ],
        )
        .await;

    assert_eq!(result.linked, vec!["ep1.mkv"]);
    assert_eq!(result.moved, vec!["pack/extracted.mkv"]);

    // The linked member still seeds from the download directory.
    assert!(harness.source_exists("ep1.mkv"));
    // The extraction byproduct is gone from it.
    assert!(!harness.source_exists("pack/extracted.mkv"));
}

// =============================================================================
// Idempotency Tests
// =============================================================================

#[tokio::test]
async fn test_rerun_skips_everything_already_placed() {
    let harness = TestHarness::new();
    harness.write_source("ep1.mkv", "member");
    harness.write_source("extra.mkv", "byproduct");

    let files = [
        episode("Westworld", 1, 1, "ep1.mkv"),
        movie("Extra", "extra.mkv"),
    ];
    let original = ["ep1.mkv"];

    let first = harness.organize(&original, &files).await;
    assert_eq!(first.linked.len(), 1);
    assert_eq!(first.moved.len(), 1);

    // Second run: every destination exists, including the one whose source
    // was consumed by the move.
    let second = harness.organize(&original, &files).await;
    assert_eq!(second.exists.len(), 2, "Rerun should skip all files");
    assert!(second.errors.is_empty());
    assert_eq!(second.linked.len() + second.moved.len(), 0);
}

#[tokio::test]
async fn test_existing_destination_is_never_overwritten() {
    let harness = TestHarness::new();
    harness.write_source("inception.mkv", "new bytes");

    let dest = harness.movies_root().join("Inception.mkv");
    std::fs::write(&dest, "old bytes").expect("Failed to seed destination");

    let result = harness
        .organize(&["inception.mkv"], &[movie("Inception", "inception.mkv")])
        .await;

    assert_eq!(result.exists, vec!["inception.mkv"]);
    assert_eq!(read(&dest), "old bytes", "Existing file must win");
    assert!(harness.source_exists("inception.mkv"));
}

// =============================================================================
// Error Isolation Tests
// =============================================================================

#[tokio::test]
async fn test_missing_source_fails_alone() {
    let harness = TestHarness::new();
    harness.write_source("good1.mkv", "one");
    harness.write_source("good2.mkv", "two");

    let result = harness
        .organize(
            &["good1.mkv", "good2.mkv", "ghost.mkv"],
            &[
                episode("Dark", 1, 1, "good1.mkv"),
                episode("Dark", 1, 2, "good2.mkv"),
                episode("Dark", 1, 3, "ghost.mkv"),
            ],
        )
        .await;

    assert_eq!(result.linked.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].file_path, "ghost.mkv");
    assert!(
        result.errors[0].error.contains("not found"),
        "Error message should name the failure: {}",
        result.errors[0].error
    );
    assert_eq!(result.total(), 3, "Every input lands in exactly one bucket");
}

// =============================================================================
// Report Rendering Tests
// =============================================================================

#[tokio::test]
async fn test_report_after_real_run() {
    let harness = TestHarness::new();
    harness.write_source("ww1.mkv", "e1");
    harness.write_source("ww2.mkv", "e2");
    harness.write_source("bonus.mkv", "bonus");

    let classification = Classification {
        files: vec![
            episode("Westworld", 1, 1, "ww1.mkv"),
            episode("Westworld", 1, 2, "ww2.mkv"),
            movie("Bonus Feature", "bonus.mkv"),
        ],
        description: "Westworld season opener plus a bonus feature".to_string(),
        icon: "📺".to_string(),
    };

    let result = harness
        .organize(&["ww1.mkv", "ww2.mkv"], &classification.files)
        .await;

    let text = format_organized("Westworld.S01.Pack", &classification, &result, false);

    assert_eq!(
        text,
        "📥 Torrent organized\n\
         Westworld.S01.Pack\n\
         \n\
         📺 Westworld season opener plus a bonus feature\n\
         \n\
         📺 Westworld\n\
         - Season 1 Episode 1→2\n\
         \n\
         🎬 Bonus Feature\n\
         \n\
         ♻️ Linked: 2 files\n\
         🗂️ Moved: 1 files\n\
         \n\
         ⚠️ Torrent left in download directory"
    );
}
