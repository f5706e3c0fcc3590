//! Download client abstraction.
//!
//! This module provides a `DownloadClient` trait for reading finished
//! torrents out of a download backend and advancing them to the seeding
//! stage once their content has been organized.

mod types;

pub use types::*;
