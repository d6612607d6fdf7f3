//! Task poller
//!
//! Writes on the server are asynchronous: every mutating call returns a
//! [`TaskInfo`](meili_core::TaskInfo) and the actual work happens later. The
//! poller fetches `/tasks/{id}` at a fixed interval until the task reaches a
//! terminal status or the wait budget runs out.

use meili_core::{Error, PollOptions, Result, Task, TaskId};
use tokio::time::{sleep, Instant};

use crate::client::Client;

/// Waits for one task at a time with fixed options
#[derive(Debug, Clone)]
pub struct TaskPoller<'a> {
    client: &'a Client,
    options: PollOptions,
}

impl<'a> TaskPoller<'a> {
    pub fn new(client: &'a Client, options: PollOptions) -> Self {
        Self { client, options }
    }

    pub fn options(&self) -> PollOptions {
        self.options
    }

    /// Poll until the task is `succeeded`, `failed` or `canceled`.
    ///
    /// Fetch errors are returned as soon as they happen. When the budget is
    /// exhausted the error carries the last snapshot seen.
    pub async fn wait(&self, task: impl Into<TaskId>) -> Result<Task> {
        self.options.validate()?;
        let task_id = task.into();
        let started = Instant::now();
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let task = self.client.tasks().get(task_id).await?;
            tracing::debug!(
                task = %task_id,
                status = %task.status,
                attempt = attempts,
                "Polled task"
            );

            if task.is_terminal() {
                tracing::info!(
                    task = %task_id,
                    status = %task.status,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Task finished"
                );
                return Ok(task);
            }

            let remaining = self.options.timeout.saturating_sub(started.elapsed());
            sleep(self.options.interval.min(remaining)).await;

            let elapsed = started.elapsed();
            if elapsed >= self.options.timeout {
                tracing::warn!(
                    task = %task_id,
                    status = %task.status,
                    attempts,
                    "Gave up waiting for task"
                );
                return Err(Error::Timeout {
                    task_id,
                    elapsed,
                    last_seen: Some(Box::new(task)),
                });
            }
        }
    }
}
