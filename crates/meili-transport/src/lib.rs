//! Meili Transport - Request execution against a search server
//!
//! This crate provides the [`Transport`] trait used by the client, an HTTP
//! implementation backed by reqwest, and a scripted in-memory implementation
//! for tests.

pub mod error;
pub mod memory;
pub mod traits;

#[cfg(feature = "http")]
pub mod http;

pub use error::{TransportError, TransportResult};
pub use memory::{MemoryTransport, MockResponse};
pub use traits::{Method, Request, Transport};

#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpTransport};
