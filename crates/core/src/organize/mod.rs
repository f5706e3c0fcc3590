//! Organize module for placing classified files into the media library.
//!
//! This module turns a torrent's classification into filesystem layout: it
//! computes canonical library paths, places every file concurrently, and
//! aggregates outcomes into an [`OrganizeResult`] for the reporting layer.
//!
//! # Features
//!
//! - Canonical movie and series destination paths
//! - Hard link for original torrent contents, move for extraction byproducts
//! - Existing destinations are skipped, never overwritten
//! - Per-file failure isolation; a batch partially succeeds
//! - Idempotent season directory creation under concurrency
//!
//! # Example
//!
//! ```ignore
//! use tidyseed_core::organize::{LibraryConfig, Organizer};
//!
//! let organizer = Organizer::new(&LibraryConfig::new("/library/movies", "/library/series"));
//!
//! let result = organizer
//!     .organize(&torrent_root, &original_files, &classification.files)
//!     .await;
//! println!(
//!     "linked {} moved {} exists {} errors {}",
//!     result.linked.len(),
//!     result.moved.len(),
//!     result.exists.len(),
//!     result.errors.len(),
//! );
//! ```

mod config;
mod engine;
mod error;
mod resolver;
mod types;

pub use config::LibraryConfig;
pub use engine::Organizer;
pub use error::OrganizeError;
pub use resolver::PathResolver;
pub use types::{OrganizeFailure, OrganizeOutcome, OrganizeResult};
