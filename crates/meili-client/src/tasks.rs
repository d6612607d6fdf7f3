//! Task lookups

use meili_core::{PollOptions, Result, Task, TaskId, TasksPage, TasksQuery};
use meili_transport::Request;

use crate::client::Client;
use crate::poller::TaskPoller;

/// Resource client for `/tasks`
#[derive(Debug, Clone)]
pub struct Tasks<'a> {
    client: &'a Client,
}

impl<'a> Tasks<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch the current record of a task
    pub async fn get(&self, task: impl Into<TaskId>) -> Result<Task> {
        let id = task.into();
        self.client.send(Request::get(format!("/tasks/{}", id))).await
    }

    pub async fn list(&self, query: Option<&TasksQuery>) -> Result<TasksPage> {
        let query = query.map(TasksQuery::to_query).unwrap_or_default();
        self.client.send(Request::get(format!("/tasks{}", query))).await
    }

    pub async fn wait_for(&self, task: impl Into<TaskId>, options: PollOptions) -> Result<Task> {
        TaskPoller::new(self.client, options).wait(task).await
    }
}
