//! Mock notifier for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::notify::{Notifier, NotifyError};

/// Mock implementation of the Notifier trait.
///
/// Records every delivered message for assertions and can simulate
/// delivery failures. A failed delivery is not recorded.
#[derive(Debug)]
pub struct MockNotifier {
    /// Delivered messages, in call order.
    messages: Arc<RwLock<Vec<String>>>,
    /// If set, the next call will fail with this error.
    next_error: Arc<RwLock<Option<NotifyError>>>,
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNotifier {
    /// Create a new mock notifier.
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: NotifyError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get all delivered messages, in call order.
    pub async fn messages(&self) -> Vec<String> {
        self.messages.read().await.clone()
    }

    /// Get the last delivered message.
    pub async fn last_message(&self) -> Option<String> {
        self.messages.read().await.last().cloned()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn notify(&self, message: &str) -> Result<(), NotifyError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.messages.write().await.push(message.to_string());
        Ok(())
    }
}
