//! Document store transport.
//!
//! `DocumentStore` is the only seam between the site and the hosted database.
//! `AppwriteClient` talks to the REST API from the browser with `gloo-net`;
//! tests swap in the in-memory store.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::appwrite::error::StoreError;
use crate::appwrite::query::{query_string, Query};
use crate::config::{AppwriteConfig, ConfigError, EnvKey};

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

/// Placeholder id that asks the store to mint one itself.
pub const UNIQUE_ID: &str = "unique()";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentList {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub documents: Vec<Value>,
}

#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Value, StoreError>;

    async fn get_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<Value, StoreError>;

    async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<DocumentList, StoreError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppwriteClient {
    endpoint: Option<String>,
    project_id: Option<String>,
}

impl AppwriteClient {
    pub fn new(config: &AppwriteConfig) -> Self {
        Self {
            endpoint: config.get(EnvKey::Endpoint).map(String::from),
            project_id: config.get(EnvKey::ProjectId).map(String::from),
        }
    }

    fn target(&self) -> Result<(&str, &str), StoreError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(ConfigError::Missing { key: EnvKey::Endpoint })?;
        let project = self
            .project_id
            .as_deref()
            .ok_or(ConfigError::Missing { key: EnvKey::ProjectId })?;
        Ok((endpoint.trim_end_matches('/'), project))
    }
}

pub fn documents_url(base: &str, database_id: &str, collection_id: &str) -> String {
    format!(
        "{}/databases/{}/collections/{}/documents",
        base.trim_end_matches('/'),
        urlencoding::encode(database_id),
        urlencoding::encode(collection_id)
    )
}

pub fn document_url(base: &str, database_id: &str, collection_id: &str, document_id: &str) -> String {
    format!(
        "{}/{}",
        documents_url(base, database_id, collection_id),
        urlencoding::encode(document_id)
    )
}

pub fn list_url(base: &str, database_id: &str, collection_id: &str, queries: &[Query]) -> String {
    let url = documents_url(base, database_id, collection_id);
    if queries.is_empty() {
        url
    } else {
        format!("{}?{}", url, query_string(queries))
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(StoreError::from_response(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| StoreError::Decode(e.to_string()))
}

impl DocumentStore for AppwriteClient {
    async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Value, StoreError> {
        let (base, project) = self.target()?;
        let body = json!({ "documentId": document_id, "data": data });
        let response = Request::post(&documents_url(base, database_id, collection_id))
            .header("X-Appwrite-Project", project)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| StoreError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        read_json(response).await
    }

    async fn get_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<Value, StoreError> {
        let (base, project) = self.target()?;
        let response = Request::get(&document_url(base, database_id, collection_id, document_id))
            .header("X-Appwrite-Project", project)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        read_json(response).await
    }

    async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<DocumentList, StoreError> {
        let (base, project) = self.target()?;
        let response = Request::get(&list_url(base, database_id, collection_id, queries))
            .header("X-Appwrite-Project", project)
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;
        read_json(response).await
    }
}
