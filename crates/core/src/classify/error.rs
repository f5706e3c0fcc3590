use std::time::Duration;
use thiserror::Error;

/// Error type for classification backends.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Malformed classifier response: {0}")]
    MalformedResponse(String),

    #[error("Classifier timed out after {0:?}")]
    Timeout(Duration),
}
