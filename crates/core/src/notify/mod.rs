//! User-facing notifications.
//!
//! This module provides a `Notifier` trait for delivering progress and
//! report messages to the user, plus a log-backed implementation for
//! running without a chat backend.

mod log;
mod traits;

pub use log::*;
pub use traits::*;
