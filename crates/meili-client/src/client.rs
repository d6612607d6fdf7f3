//! Client entry point

use std::sync::Arc;

use meili_core::{Health, JsonCodec, PollOptions, Result, Task, TaskId, Version};
use meili_transport::{Request, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::documents::Documents;
use crate::indexes::Indexes;
use crate::poller::TaskPoller;
use crate::tasks::Tasks;

/// Handle to one search server.
///
/// Cloning is cheap: clones share the transport and copy the codec.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    codec: JsonCodec,
}

impl Client {
    /// Connect over HTTP
    #[cfg(feature = "http")]
    pub fn new(config: crate::ClientConfig) -> Result<Self> {
        let transport = meili_transport::HttpTransport::new(config.http_config())?;
        Ok(Self::with_transport(
            Arc::new(transport),
            JsonCodec::new(config.codec),
        ))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, codec: JsonCodec) -> Self {
        Self { transport, codec }
    }

    pub fn codec(&self) -> &JsonCodec {
        &self.codec
    }

    /// Documents of one index
    pub fn documents(&self, index_uid: impl Into<String>) -> Documents<'_> {
        Documents::new(self, index_uid.into())
    }

    pub fn indexes(&self) -> Indexes<'_> {
        Indexes::new(self)
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(self)
    }

    /// Wait until a task reaches a terminal status.
    ///
    /// Accepts a raw [`TaskId`] or a `&TaskInfo` / `&Task` handle. A task
    /// that ends as `failed` or `canceled` is returned as `Ok`; inspect its
    /// `status` and `error`.
    pub async fn wait_for_task(&self, task: impl Into<TaskId>, options: PollOptions) -> Result<Task> {
        TaskPoller::new(self, options).wait(task).await
    }

    pub async fn health(&self) -> Result<Health> {
        self.send(Request::get("/health")).await
    }

    /// `true` when the server answers `/health` with `available`
    pub async fn is_healthy(&self) -> bool {
        match self.health().await {
            Ok(health) => health.is_available(),
            Err(e) => {
                tracing::debug!("Health check failed: {}", e);
                false
            }
        }
    }

    pub async fn version(&self) -> Result<Version> {
        self.send(Request::get("/version")).await
    }

    pub(crate) async fn send<R: DeserializeOwned>(&self, request: Request) -> Result<R> {
        tracing::debug!(method = %request.method, path = %request.path, "Sending request");
        let body = self.transport.execute(request).await?;
        self.codec.decode(&body)
    }

    pub(crate) fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        self.codec.encode(value)
    }
}
