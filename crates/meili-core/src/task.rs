//! Task records and the handles returned by asynchronous writes
//!
//! Every write accepted by the server is processed in the background. The
//! write itself only answers with a [`TaskInfo`]; the full [`Task`] record,
//! including its [`TaskDetails`], is fetched later by [`TaskId`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Server-assigned task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl TaskId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<&TaskInfo> for TaskId {
    fn from(info: &TaskInfo) -> Self {
        info.task_uid
    }
}

impl From<&Task> for TaskId {
    fn from(task: &Task) -> Self {
        task.uid
    }
}

/// Task lifecycle: `enqueued` -> `processing` -> one of the terminal states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Enqueued,
    Processing,
    Succeeded,
    Failed,
    Canceled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        Self::Enqueued,
        Self::Processing,
        Self::Succeeded,
        Self::Failed,
        Self::Canceled,
    ];

    /// Polling stops once a task reaches one of these
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enqueued => "enqueued",
            Self::Processing => "processing",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown task status: {}", s))
    }
}

/// Kind of operation a task performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskType {
    IndexCreation,
    IndexUpdate,
    IndexDeletion,
    IndexSwap,
    DocumentAdditionOrUpdate,
    DocumentDeletion,
    SettingsUpdate,
    DumpCreation,
    TaskCancelation,
    TaskDeletion,
    SnapshotCreation,
    /// A type this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl TaskType {
    pub const KNOWN: [TaskType; 11] = [
        Self::IndexCreation,
        Self::IndexUpdate,
        Self::IndexDeletion,
        Self::IndexSwap,
        Self::DocumentAdditionOrUpdate,
        Self::DocumentDeletion,
        Self::SettingsUpdate,
        Self::DumpCreation,
        Self::TaskCancelation,
        Self::TaskDeletion,
        Self::SnapshotCreation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndexCreation => "indexCreation",
            Self::IndexUpdate => "indexUpdate",
            Self::IndexDeletion => "indexDeletion",
            Self::IndexSwap => "indexSwap",
            Self::DocumentAdditionOrUpdate => "documentAdditionOrUpdate",
            Self::DocumentDeletion => "documentDeletion",
            Self::SettingsUpdate => "settingsUpdate",
            Self::DumpCreation => "dumpCreation",
            Self::TaskCancelation => "taskCancelation",
            Self::TaskDeletion => "taskDeletion",
            Self::SnapshotCreation => "snapshotCreation",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::KNOWN
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown task type: {}", s))
    }
}

/// Lightweight handle returned synchronously by every write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInfo {
    pub task_uid: TaskId,

    #[serde(default)]
    pub index_uid: Option<String>,

    pub status: TaskStatus,

    #[serde(rename = "type")]
    pub task_type: TaskType,

    pub enqueued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentAdditionDetails {
    #[serde(default)]
    pub received_documents: Option<u64>,
    #[serde(default)]
    pub indexed_documents: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDeletionDetails {
    #[serde(default)]
    pub provided_ids: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filter: Option<String>,
    #[serde(default)]
    pub deleted_documents: Option<u64>,
}

/// Details of index creation and update tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDetails {
    #[serde(default)]
    pub primary_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexDeletionDetails {
    #[serde(default)]
    pub deleted_documents: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCancelationDetails {
    #[serde(default)]
    pub matched_tasks: Option<u64>,
    #[serde(default)]
    pub canceled_tasks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDeletionDetails {
    #[serde(default)]
    pub matched_tasks: Option<u64>,
    #[serde(default)]
    pub deleted_tasks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_filter: Option<String>,
}

/// Type-dependent payload of a task, keyed by [`TaskType`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskDetails {
    DocumentAdditionOrUpdate(DocumentAdditionDetails),
    DocumentDeletion(DocumentDeletionDetails),
    IndexCreation(IndexDetails),
    IndexUpdate(IndexDetails),
    IndexDeletion(IndexDeletionDetails),
    TaskCancelation(TaskCancelationDetails),
    TaskDeletion(TaskDeletionDetails),
    /// Details for task types without a dedicated shape, kept verbatim
    Other(serde_json::Value),
}

impl TaskDetails {
    /// Second decode pass: interpret raw details according to the task type
    pub fn decode(task_type: TaskType, raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match task_type {
            TaskType::DocumentAdditionOrUpdate => {
                Self::DocumentAdditionOrUpdate(serde_json::from_value(raw)?)
            }
            TaskType::DocumentDeletion => Self::DocumentDeletion(serde_json::from_value(raw)?),
            TaskType::IndexCreation => Self::IndexCreation(serde_json::from_value(raw)?),
            TaskType::IndexUpdate => Self::IndexUpdate(serde_json::from_value(raw)?),
            TaskType::IndexDeletion => Self::IndexDeletion(serde_json::from_value(raw)?),
            TaskType::TaskCancelation => Self::TaskCancelation(serde_json::from_value(raw)?),
            TaskType::TaskDeletion => Self::TaskDeletion(serde_json::from_value(raw)?),
            TaskType::IndexSwap
            | TaskType::SettingsUpdate
            | TaskType::DumpCreation
            | TaskType::SnapshotCreation
            | TaskType::Unknown => Self::Other(raw),
        })
    }
}

/// Full server-side record of one asynchronous operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTask")]
pub struct Task {
    pub uid: TaskId,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_uid: Option<String>,

    pub status: TaskStatus,

    #[serde(rename = "type")]
    pub task_type: TaskType,

    /// Present once the server knows the counts for this kind of task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<TaskDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub canceled_by: Option<TaskId>,

    /// ISO-8601 duration, e.g. `PT0.107S`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    pub enqueued_at: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == TaskStatus::Succeeded
    }

    pub fn is_failed(&self) -> bool {
        self.status == TaskStatus::Failed
    }
}

/// First decode pass: the record with `details` left undecoded
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTask {
    uid: TaskId,
    #[serde(default)]
    index_uid: Option<String>,
    status: TaskStatus,
    #[serde(rename = "type")]
    task_type: TaskType,
    #[serde(default)]
    details: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<ApiError>,
    #[serde(default)]
    canceled_by: Option<TaskId>,
    #[serde(default)]
    duration: Option<String>,
    enqueued_at: DateTime<Utc>,
    #[serde(default)]
    started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    finished_at: Option<DateTime<Utc>>,
}

impl TryFrom<RawTask> for Task {
    type Error = serde_json::Error;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let details = raw
            .details
            .map(|value| TaskDetails::decode(raw.task_type, value))
            .transpose()?;

        Ok(Self {
            uid: raw.uid,
            index_uid: raw.index_uid,
            status: raw.status,
            task_type: raw.task_type,
            details,
            error: raw.error,
            canceled_by: raw.canceled_by,
            duration: raw.duration,
            enqueued_at: raw.enqueued_at,
            started_at: raw.started_at,
            finished_at: raw.finished_at,
        })
    }
}
