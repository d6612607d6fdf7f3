//! Query parameters and paginated results
//!
//! Query strings are rendered deterministically: absent parameters are
//! omitted, list values are comma-joined, and keys always appear in the
//! same order for a given query type.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus, TaskType};

/// Ordered query-string builder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` when a value is present
    pub fn push<V: ToString>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            self.pairs.push((key, urlencoding::encode(&value).into_owned()));
        }
        self
    }

    /// Append `key=a,b,c` when a list is present; an empty list renders `key=`
    pub fn push_list<I, S>(mut self, key: &'static str, values: Option<I>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Some(values) = values {
            let joined = values
                .into_iter()
                .map(|v| urlencoding::encode(v.as_ref()).into_owned())
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((key, joined));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `?k=v&k2=v2`, or an empty string when nothing was pushed
    pub fn render(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let body = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", body)
    }
}

/// Parameters for `GET /indexes/{index}/documents`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,

    /// Attributes to return; `Some(vec![])` is sent as an empty projection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl DocumentsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn to_query(&self) -> String {
        QueryString::new()
            .push_list("fields", self.fields.as_ref())
            .push("limit", self.limit)
            .push("offset", self.offset)
            .render()
    }
}

/// Parameters for `GET /indexes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexesQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl IndexesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn to_query(&self) -> String {
        QueryString::new()
            .push("limit", self.limit)
            .push("offset", self.offset)
            .render()
    }
}

/// Filters for `GET /tasks`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_uids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<TaskStatus>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<TaskType>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Uid of the first task to return; tasks are listed newest first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u64>,
}

impl TasksQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_uid(mut self, uid: impl Into<String>) -> Self {
        self.index_uids.get_or_insert_with(Vec::new).push(uid.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.statuses.get_or_insert_with(Vec::new).push(status);
        self
    }

    pub fn with_type(mut self, task_type: TaskType) -> Self {
        self.types.get_or_insert_with(Vec::new).push(task_type);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to_query(&self) -> String {
        QueryString::new()
            .push_list("indexUids", self.index_uids.as_ref())
            .push_list(
                "statuses",
                self.statuses
                    .as_ref()
                    .map(|s| s.iter().map(|status| status.as_str())),
            )
            .push_list(
                "types",
                self.types.as_ref().map(|t| t.iter().map(|kind| kind.as_str())),
            )
            .push("limit", self.limit)
            .push("from", self.from)
            .render()
    }
}

/// Offset-paginated results, as returned for documents and indexes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_more(&self) -> bool {
        self.offset + self.results.len() < self.total
    }
}

/// Cursor-paginated task list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksPage {
    pub results: Vec<Task>,
    pub limit: usize,
    #[serde(default)]
    pub from: Option<u64>,
    /// Pass as `from` to fetch the next page
    #[serde(default)]
    pub next: Option<u64>,
    #[serde(default)]
    pub total: Option<usize>,
}
