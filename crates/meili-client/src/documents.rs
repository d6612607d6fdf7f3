//! Document operations on one index
//!
//! Reads decode straight into the caller's type. Writes return a
//! [`TaskInfo`] as soon as the server has enqueued them; use
//! [`Client::wait_for_task`] to confirm they were applied.

use meili_core::limits::{validate_document_id, validate_index_uid};
use meili_core::{DocumentsQuery, Page, QueryString, Result, TaskInfo};
use meili_transport::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Client;

/// Resource client for `/indexes/{index}/documents`
#[derive(Debug, Clone)]
pub struct Documents<'a> {
    client: &'a Client,
    index_uid: String,
}

impl<'a> Documents<'a> {
    pub(crate) fn new(client: &'a Client, index_uid: String) -> Self {
        Self { client, index_uid }
    }

    pub fn index_uid(&self) -> &str {
        &self.index_uid
    }

    fn base_path(&self) -> Result<String> {
        validate_index_uid(&self.index_uid)?;
        Ok(format!("/indexes/{}/documents", self.index_uid))
    }

    fn document_path(&self, document_id: &str) -> Result<String> {
        validate_document_id(document_id)?;
        Ok(format!("{}/{}", self.base_path()?, document_id))
    }

    fn write_path(&self, primary_key: Option<&str>) -> Result<String> {
        let query = QueryString::new().push("primaryKey", primary_key).render();
        Ok(format!("{}{}", self.base_path()?, query))
    }

    /// Fetch one document, optionally restricted to `fields` (in the given order)
    pub async fn get_one<T: DeserializeOwned>(
        &self,
        document_id: &str,
        fields: Option<&[&str]>,
    ) -> Result<T> {
        let query = QueryString::new().push_list("fields", fields).render();
        let path = format!("{}{}", self.document_path(document_id)?, query);
        self.client.send(Request::get(path)).await
    }

    /// Fetch a page of documents
    pub async fn get_all<T: DeserializeOwned>(
        &self,
        query: Option<&DocumentsQuery>,
    ) -> Result<Page<T>> {
        let query = query.map(DocumentsQuery::to_query).unwrap_or_default();
        let path = format!("{}{}", self.base_path()?, query);
        self.client.send(Request::get(path)).await
    }

    /// Add documents, replacing any existing document with the same id
    pub async fn add<T: Serialize>(
        &self,
        documents: &[T],
        primary_key: Option<&str>,
    ) -> Result<TaskInfo> {
        let payload = self.client.encode(documents)?;
        tracing::debug!(index = %self.index_uid, count = documents.len(), "Adding documents");
        self.add_raw(payload, primary_key).await
    }

    /// Add documents from an already encoded JSON array
    pub async fn add_raw(
        &self,
        payload: impl Into<Vec<u8>>,
        primary_key: Option<&str>,
    ) -> Result<TaskInfo> {
        let path = self.write_path(primary_key)?;
        self.client.send(Request::post(path, payload.into())).await
    }

    /// Add documents, merging fields into existing documents with the same id
    pub async fn update<T: Serialize>(
        &self,
        documents: &[T],
        primary_key: Option<&str>,
    ) -> Result<TaskInfo> {
        let payload = self.client.encode(documents)?;
        tracing::debug!(index = %self.index_uid, count = documents.len(), "Updating documents");
        self.update_raw(payload, primary_key).await
    }

    pub async fn update_raw(
        &self,
        payload: impl Into<Vec<u8>>,
        primary_key: Option<&str>,
    ) -> Result<TaskInfo> {
        let path = self.write_path(primary_key)?;
        self.client.send(Request::put(path, payload.into())).await
    }

    pub async fn delete(&self, document_id: &str) -> Result<TaskInfo> {
        let path = self.document_path(document_id)?;
        self.client.send(Request::delete(path)).await
    }

    pub async fn delete_all(&self) -> Result<TaskInfo> {
        let path = self.base_path()?;
        self.client.send(Request::delete(path)).await
    }

    /// Delete several documents, sent as a JSON array of string ids
    pub async fn delete_batch<S: AsRef<str>>(&self, document_ids: &[S]) -> Result<TaskInfo> {
        let ids: Vec<&str> = document_ids.iter().map(|id| id.as_ref()).collect();
        let payload = self.client.encode(&ids)?;
        let path = format!("{}/delete-batch", self.base_path()?);
        self.client.send(Request::post(path, payload)).await
    }
}
