//! Error types for the EventSphere core.

use thiserror::Error;

/// Errors that can occur in EventSphere operations.
#[derive(Error, Debug)]
pub enum EventSphereError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for EventSphereError {
    fn from(err: reqwest::Error) -> Self {
        EventSphereError::Network(err.to_string())
    }
}

/// Result type alias for EventSphere operations.
pub type EventSphereResult<T> = Result<T, EventSphereError>;
