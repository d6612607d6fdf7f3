//! Error types for Meili Core

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::{Task, TaskId};

/// Result type alias using Meili's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the server, also embedded in failed tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,

    /// Machine-readable code, e.g. `index_not_found`
    #[serde(default)]
    pub code: String,

    #[serde(rename = "type", default)]
    pub error_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ApiError {
    /// Build an error from a body the server did not shape as an API error
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: String::new(),
            error_type: String::new(),
            link: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} ({})", self.message, self.code)
        }
    }
}

/// Meili error types
#[derive(Error, Debug)]
pub enum Error {
    /// Connection, TLS or request-timeout failure. Never retried.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error (HTTP {status}): {error}")]
    Api { status: u16, error: ApiError },

    #[error("Decoding error: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The task did not reach a terminal status within the wait budget
    #[error("Timed out waiting for task {task_id} after {elapsed:?}")]
    Timeout {
        task_id: TaskId,
        elapsed: Duration,
        last_seen: Option<Box<Task>>,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Last task snapshot observed before a timeout
    pub fn last_seen(&self) -> Option<&Task> {
        match self {
            Self::Timeout { last_seen, .. } => last_seen.as_deref(),
            _ => None,
        }
    }
}
