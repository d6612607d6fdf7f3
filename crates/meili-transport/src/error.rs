//! Transport error types

use meili_core::{ApiError, Error};
use thiserror::Error;

/// Result type alias for transport operations
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Transport-specific error types
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status
    #[error("Unexpected status {status}")]
    Status { status: u16, body: Vec<u8> },
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_builder() {
            TransportError::InvalidUrl(e.to_string())
        } else {
            TransportError::Connection(e.to_string())
        }
    }
}

fn api_error(body: &[u8]) -> Option<ApiError> {
    serde_json::from_slice(body).ok()
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Status { status: 404, body } => Error::NotFound(
                api_error(&body)
                    .map(|err| err.to_string())
                    .unwrap_or_else(|| "resource not found".to_string()),
            ),
            TransportError::Status { status, body } => {
                let error = api_error(&body).unwrap_or_else(|| {
                    ApiError::from_message(String::from_utf8_lossy(&body).into_owned())
                });
                Error::Api { status, error }
            }
            TransportError::InvalidUrl(msg) => Error::Config(msg),
            other => Error::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_maps_to_not_found() {
        let body = br#"{"message": "Document `42` not found.", "code": "document_not_found", "type": "invalid_request"}"#;
        let err: Error = TransportError::Status {
            status: 404,
            body: body.to_vec(),
        }
        .into();

        match err {
            Error::NotFound(msg) => assert!(msg.contains("document_not_found")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_404_without_body() {
        let err: Error = TransportError::Status {
            status: 404,
            body: Vec::new(),
        }
        .into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_status_maps_to_api_error() {
        let body = br#"{"message": "The provided API key is invalid.", "code": "invalid_api_key", "type": "auth"}"#;
        let err: Error = TransportError::Status {
            status: 403,
            body: body.to_vec(),
        }
        .into();

        match err {
            Error::Api { status, error } => {
                assert_eq!(status, 403);
                assert_eq!(error.code, "invalid_api_key");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_unstructured_error_body() {
        let err: Error = TransportError::Status {
            status: 502,
            body: b"Bad Gateway".to_vec(),
        }
        .into();

        match err {
            Error::Api { status, error } => {
                assert_eq!(status, 502);
                assert_eq!(error.message, "Bad Gateway");
            }
            other => panic!("expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_connection_failure_maps_to_transport() {
        let err: Error = TransportError::Connection("connection refused".to_string()).into();
        assert_eq!(err.to_string(), "Transport error: Connection error: connection refused");
    }
}
