//! Report module for rendering run summaries as plain text.
//!
//! The rendered text is handed to a notification collaborator for
//! delivery; transport concerns (markup escaping, length limits, retries)
//! live entirely on that side of the seam.

mod formatter;
mod ranges;

pub use formatter::{format_classification_failed, format_finished, format_organized};
pub use ranges::consolidate;
