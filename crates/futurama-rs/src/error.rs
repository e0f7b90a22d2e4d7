//! Error types for the Futurama API client

use std::time::Duration;
use thiserror::Error;

/// Errors returned by [`FuturamaClient`](crate::FuturamaClient) and config loading
#[derive(Debug, Error)]
pub enum FuturamaError {
    /// The request did not settle within the client timeout
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Connection, DNS, or TLS failure
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the expected JSON shape
    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("config not found: {0}")]
    ConfigNotFound(String),

    #[error("invalid config: {0}")]
    ConfigInvalid(String),

    #[error("could not determine home directory")]
    NoHomeDirectory,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl FuturamaError {
    /// Map a reqwest failure, keeping timeouts distinct from other transport errors
    pub(crate) fn from_request(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            FuturamaError::Timeout(timeout)
        } else if error.is_decode() {
            FuturamaError::Decode(error.to_string())
        } else {
            FuturamaError::Transport(error)
        }
    }

    /// True for failures of the request itself (as opposed to local config problems)
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            FuturamaError::Timeout(_)
                | FuturamaError::Transport(_)
                | FuturamaError::Status { .. }
                | FuturamaError::Decode(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = FuturamaError::Timeout(Duration::from_millis(8000));
        assert_eq!(err.to_string(), "request timed out after 8000ms");
    }

    #[test]
    fn test_request_failure_classification() {
        assert!(FuturamaError::Timeout(Duration::from_secs(1)).is_request_failure());
        assert!(
            FuturamaError::Status {
                status: 500,
                body: String::new()
            }
            .is_request_failure()
        );
        assert!(FuturamaError::Decode("eof".into()).is_request_failure());
        assert!(!FuturamaError::NoHomeDirectory.is_request_failure());
        assert!(!FuturamaError::ConfigNotFound("/x".into()).is_request_failure());
    }
}
