//! Pipeline module for finished-torrent processing.
//!
//! This module provides the `TorrentPipeline` which coordinates:
//! - Archive expansion: unpacking RAR payloads before classification
//! - Classification: deciding where every file belongs
//! - Organization: linking or moving files into the library
//! - Lifecycle: optionally advancing the torrent to seeding
//! - Notification: announcing the run and delivering the summary
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tidyseed_core::notify::LogNotifier;
//! use tidyseed_core::organize::{LibraryConfig, Organizer};
//! use tidyseed_core::pipeline::{PipelineConfig, TorrentPipeline};
//!
//! let organizer = Organizer::new(&LibraryConfig::new("/media/movies", "/media/series"));
//! let pipeline = TorrentPipeline::new(
//!     PipelineConfig::default(),
//!     classifier,
//!     extractor,
//!     download_client,
//!     Arc::new(LogNotifier::new()),
//!     organizer,
//! );
//!
//! let report = pipeline.process_torrent("abc123").await?;
//! println!("{}", report.report_text);
//! ```

mod config;
mod runner;
mod types;

pub use config::PipelineConfig;
pub use runner::{PipelineError, TorrentPipeline};
pub use types::PipelineReport;
