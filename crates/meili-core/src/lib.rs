//! Meili Core - Types shared by the Meili search server client
//!
//! This crate provides the data model returned by the server (tasks,
//! indexes, pages of documents), the JSON codec, query-string rendering
//! and the error type used across the workspace. It performs no I/O.

pub mod codec;
pub mod error;
pub mod index;
pub mod limits;
pub mod poll;
pub mod query;
pub mod task;

pub use codec::{CodecConfig, JsonCodec};
pub use error::{ApiError, Error, Result};
pub use index::{Health, Index, Version};
pub use limits::ValidationError;
pub use poll::PollOptions;
pub use query::{DocumentsQuery, IndexesQuery, Page, QueryString, TasksPage, TasksQuery};
pub use task::{
    DocumentAdditionDetails, DocumentDeletionDetails, IndexDeletionDetails, IndexDetails, Task,
    TaskCancelationDetails, TaskDeletionDetails, TaskDetails, TaskId, TaskInfo, TaskStatus,
    TaskType,
};
