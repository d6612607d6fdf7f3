//! Meili Client - Typed async client for a Meili search server
//!
//! Provides resource clients for documents, indexes and tasks, plus a task
//! poller that turns the server's asynchronous writes into a future the
//! caller can await.
//!
//! ```no_run
//! use meili_client::{Client, ClientConfig, PollOptions};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Movie {
//!     id: u32,
//!     title: String,
//! }
//!
//! # async fn run() -> meili_client::Result<()> {
//! let client = Client::new(ClientConfig::new("http://localhost:7700").with_api_key("masterKey"))?;
//! let movies = vec![Movie { id: 1, title: "Alice In Wonderland".to_string() }];
//!
//! let info = client.documents("movies").add(&movies, Some("id")).await?;
//! let task = client.wait_for_task(&info, PollOptions::default()).await?;
//! println!("task {} finished as {}", task.uid, task.status);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod documents;
pub mod indexes;
pub mod poller;
pub mod tasks;

#[cfg(test)]
mod test_support;

pub use client::Client;
pub use config::ClientConfig;
pub use documents::Documents;
pub use indexes::Indexes;
pub use poller::TaskPoller;
pub use tasks::Tasks;

pub use meili_core::{
    ApiError, CodecConfig, DocumentsQuery, Error, Health, Index, IndexesQuery, JsonCodec, Page,
    PollOptions, Result, Task, TaskDetails, TaskId, TaskInfo, TaskStatus, TaskType, TasksPage,
    TasksQuery, Version,
};
pub use meili_transport::{MemoryTransport, MockResponse, Transport};
