//! Index management

use meili_core::limits::validate_index_uid;
use meili_core::{Index, IndexesQuery, Page, Result, TaskInfo};
use meili_transport::Request;
use serde::Serialize;

use crate::client::Client;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateIndexRequest<'a> {
    uid: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_key: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateIndexRequest<'a> {
    primary_key: Option<&'a str>,
}

/// Resource client for `/indexes`
#[derive(Debug, Clone)]
pub struct Indexes<'a> {
    client: &'a Client,
}

impl<'a> Indexes<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    fn path(uid: &str) -> Result<String> {
        validate_index_uid(uid)?;
        Ok(format!("/indexes/{}", uid))
    }

    pub async fn create(&self, uid: &str, primary_key: Option<&str>) -> Result<TaskInfo> {
        validate_index_uid(uid)?;
        let body = self.client.encode(&CreateIndexRequest { uid, primary_key })?;
        tracing::debug!(index = uid, "Creating index");
        self.client.send(Request::post("/indexes", body)).await
    }

    pub async fn get(&self, uid: &str) -> Result<Index> {
        self.client.send(Request::get(Self::path(uid)?)).await
    }

    pub async fn list(&self, query: Option<&IndexesQuery>) -> Result<Page<Index>> {
        let query = query.map(IndexesQuery::to_query).unwrap_or_default();
        self.client
            .send(Request::get(format!("/indexes{}", query)))
            .await
    }

    /// Set the primary key of an index that has no documents yet
    pub async fn update(&self, uid: &str, primary_key: Option<&str>) -> Result<TaskInfo> {
        let body = self.client.encode(&UpdateIndexRequest { primary_key })?;
        self.client
            .send(Request::patch(Self::path(uid)?, body))
            .await
    }

    pub async fn delete(&self, uid: &str) -> Result<TaskInfo> {
        self.client.send(Request::delete(Self::path(uid)?)).await
    }
}
