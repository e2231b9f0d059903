use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The only failure the list controller knows about.
///
/// Network errors, non-success statuses and undecodable payloads all
/// collapse into this; the controller logs it and renders an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct FetchFailed {
    pub operation: &'static str,
    pub message: String,
}

impl FetchFailed {
    pub fn new(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self {
            operation,
            message: err.to_string(),
        }
    }
}
