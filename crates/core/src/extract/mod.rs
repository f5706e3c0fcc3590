//! Archive extraction for finished torrents.
//!
//! Some torrents ship their payload inside RAR archives. This module
//! detects head volumes, shells out to `unrar` to unpack them in place,
//! and reports the extracted files so they can be classified alongside
//! the torrent's own content.
//!
//! # Features
//!
//! - Head-volume detection that skips continuation volumes
//! - Listing and extraction via the `unrar` binary with a timeout
//! - Extracted paths reported relative to the torrent root
//!
//! # Example
//!
//! ```no_run
//! use tidyseed_core::extract::{ExtractionConfig, Extractor, UnrarExtractor};
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = UnrarExtractor::new(ExtractionConfig::default());
//! let files = extractor
//!     .extract(Path::new("/downloads/Some.Torrent"), "pack/archive.rar")
//!     .await?;
//! println!("extracted {} files", files.len());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod traits;
mod unrar;

pub use config::ExtractionConfig;
pub use error::ExtractError;
pub use traits::Extractor;
pub use unrar::{is_archive_head, UnrarExtractor};
