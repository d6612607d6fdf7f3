//! Transport trait definitions

use std::fmt::{self, Debug};

use async_trait::async_trait;

use crate::error::TransportResult;

/// HTTP method of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request relative to the configured host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,

    /// Path including the rendered query string, e.g. `/indexes?limit=2`
    pub path: String,

    /// JSON payload
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Vec<u8>) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Vec<u8>) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    pub fn patch(path: impl Into<String>, body: Vec<u8>) -> Self {
        Self::new(Method::Patch, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Executes requests against the server.
///
/// Implementations return the raw response body for success statuses and
/// [`TransportError::Status`](crate::TransportError::Status) otherwise.
/// They must not retry.
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn execute(&self, request: Request) -> TransportResult<Vec<u8>>;
}
