//! Mock classifier for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::classify::{Classification, Classifier, ClassifyError, ClassifyRequest};

/// Mock implementation of the Classifier trait.
///
/// Provides controllable behavior for testing:
/// - Configure the classification to return
/// - Record every request for assertions
/// - Simulate failures
///
/// # Example
///
/// ```rust,ignore
/// let classifier = MockClassifier::new();
/// classifier.set_response(classification).await;
///
/// let result = classifier.classify(request).await?;
///
/// let seen = classifier.requests().await;
/// assert_eq!(seen.len(), 1);
/// ```
#[derive(Debug)]
pub struct MockClassifier {
    /// Classification returned by every call (empty when unset).
    response: Arc<RwLock<Option<Classification>>>,
    /// Recorded classify calls.
    requests: Arc<RwLock<Vec<ClassifyRequest>>>,
    /// If set, the next call will fail with this error.
    next_error: Arc<RwLock<Option<ClassifyError>>>,
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClassifier {
    /// Create a new mock classifier.
    pub fn new() -> Self {
        Self {
            response: Arc::new(RwLock::new(None)),
            requests: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a mock that always returns the given classification.
    pub fn with_response(classification: Classification) -> Self {
        Self {
            response: Arc::new(RwLock::new(Some(classification))),
            ..Self::new()
        }
    }

    /// Set the classification returned by subsequent calls.
    pub async fn set_response(&self, classification: Classification) {
        *self.response.write().await = Some(classification);
    }

    /// Configure the next call to fail with the given error.
    pub async fn set_next_error(&self, error: ClassifyError) {
        *self.next_error.write().await = Some(error);
    }

    /// Get all recorded classify requests.
    pub async fn requests(&self) -> Vec<ClassifyRequest> {
        self.requests.read().await.clone()
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<ClassifyError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl Classifier for MockClassifier {
    fn name(&self) -> &str {
        "mock"
    }

    async fn classify(&self, request: ClassifyRequest) -> Result<Classification, ClassifyError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.requests.write().await.push(request);

        Ok(self
            .response
            .read()
            .await
            .clone()
            .unwrap_or(Classification {
                files: Vec::new(),
                description: String::new(),
                icon: String::new(),
            }))
    }
}
