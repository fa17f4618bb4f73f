//! Error Taxonomy
//!
//! Storage and tracker errors. Only `ValidationError` ever reaches the UI;
//! the rest are recovered locally and logged.

use thiserror::Error;
use crate::domain::ValidationError;

/// Errors raised by a key-value backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend could not be reached (no window, storage disabled, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    /// Backend-specific failure (quota exceeded, ...)
    #[error("backend error: {0}")]
    Backend(String),
}

/// Errors raised inside tracker operations
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("failed to decode `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to persist `{key}`: {source}")]
    Persistence {
        key: String,
        #[source]
        source: StoreError,
    },
}

/// Common result type for tracker internals
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TrackerError::NotFound { kind: "task", id: "#3".to_string() };
        assert_eq!(err.to_string(), "task #3 not found");

        let err = TrackerError::Persistence {
            key: "orders".to_string(),
            source: StoreError::Backend("quota exceeded".to_string()),
        };
        assert_eq!(err.to_string(), "failed to persist `orders`: backend error: quota exceeded");

        let err: TrackerError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Please enter order name");
    }
}
