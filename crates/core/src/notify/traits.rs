use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Delivery failed: {0}")]
    Delivery(String),

    #[error("Notification service unavailable: {0}")]
    Unavailable(String),
}

/// Trait for notification backends.
///
/// Messages are plain text, possibly spanning multiple lines. Backends
/// must not escape or reflow them.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Deliver a message to the user.
    async fn notify(&self, message: &str) -> Result<(), NotifyError>;
}
