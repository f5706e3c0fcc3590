use async_trait::async_trait;
use tracing::info;

use super::traits::{Notifier, NotifyError};

/// Notifier that writes messages to the application log.
///
/// Useful as a default when no chat backend is configured.
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        info!(target: "tidyseed::notify", "{message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_always_succeeds() {
        let notifier = LogNotifier::new();
        notifier.notify("line one\nline two").await.unwrap();
    }

    #[test]
    fn test_log_notifier_name() {
        let notifier = LogNotifier::default();
        assert_eq!(notifier.name(), "log");
    }
}
