//! Typed reads and writes against the store.
//!
//! Every identifier is looked up in the config when a call starts, so a
//! missing key fails the call before anything goes over the wire. Reads
//! distinguish "nothing there" (`Ok(None)` / empty list) from failures, which
//! are always returned to the caller.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::appwrite::client::{AppwriteClient, DocumentStore, UNIQUE_ID};
use crate::appwrite::error::{classify, StoreError};
use crate::appwrite::query::Query;
use crate::config::{AppwriteConfig, EnvKey};
use crate::i18n::Language;
use crate::services::models::{
    ContactPayload, DownloadLinks, MetricsDocument, OrganizerLeadPayload, SiteMetrics, Stamped,
    TestimonialDocument, TestimonialRecord,
};

#[cfg(test)]
#[path = "site_data_test.rs"]
mod site_data_test;

pub const INITIAL_STATUS: &str = "new";

pub struct SiteData<S> {
    store: S,
    config: AppwriteConfig,
}

impl SiteData<AppwriteClient> {
    /// Browser instance configured from the build environment.
    pub fn live() -> Self {
        let config = AppwriteConfig::from_build_env();
        Self::new(AppwriteClient::new(&config), config)
    }
}

fn decode<T: DeserializeOwned>(document: Value) -> Result<T, StoreError> {
    serde_json::from_value(document).map_err(|e| StoreError::Decode(e.to_string()))
}

impl<S: DocumentStore> SiteData<S> {
    pub fn new(store: S, config: AppwriteConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AppwriteConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn database_id(&self) -> Result<&str, StoreError> {
        Ok(self.config.require(EnvKey::DatabaseId)?)
    }

    async fn create_stamped<T: Serialize>(
        &self,
        collection_key: EnvKey,
        payload: &T,
    ) -> Result<Option<String>, StoreError> {
        let collection_id = self.config.require(collection_key)?;
        let database_id = self.database_id()?;

        let stamped = Stamped {
            payload,
            created_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            status: INITIAL_STATUS,
        };
        let data = serde_json::to_value(&stamped).map_err(|e| StoreError::Encode(e.to_string()))?;

        let created = self
            .store
            .create_document(database_id, collection_id, UNIQUE_ID, data)
            .await?;
        // The write already happened; a response without an id is still a success.
        let id = created.get("$id").and_then(Value::as_str).map(String::from);
        if id.is_none() {
            log::warn!("Created document in {} has no $id", collection_id);
        }
        Ok(id)
    }

    /// Store a contact form message. Returns the new document id when the store reports one.
    pub async fn submit_contact_message(
        &self,
        payload: &ContactPayload,
    ) -> Result<Option<String>, StoreError> {
        self.create_stamped(EnvKey::ContactCollectionId, payload).await
    }

    /// Store an organizer lead. Returns the new document id when the store reports one.
    pub async fn submit_organizer_lead(
        &self,
        payload: &OrganizerLeadPayload,
    ) -> Result<Option<String>, StoreError> {
        self.create_stamped(EnvKey::LeadsCollectionId, payload).await
    }

    pub async fn fetch_download_links(&self) -> Result<Option<DownloadLinks>, StoreError> {
        let collection_id = self.config.require(EnvKey::DownloadsCollectionId)?;
        let document_id = self.config.require(EnvKey::DownloadsDocumentId)?;
        let database_id = self.database_id()?;

        let fetched = classify(
            self.store
                .get_document(database_id, collection_id, document_id)
                .await,
        )?;
        match fetched.into_option() {
            Some(document) => Ok(Some(decode::<DownloadLinks>(document)?)),
            None => {
                log::warn!("Download links document not found.");
                Ok(None)
            }
        }
    }

    /// Newest-published first, filtered by the store.
    pub async fn fetch_testimonials_by_language(
        &self,
        language: Language,
    ) -> Result<Vec<TestimonialRecord>, StoreError> {
        let collection_id = self.config.require(EnvKey::TestimonialsCollectionId)?;
        let database_id = self.database_id()?;

        let queries = [
            Query::equal("language", language.code()),
            Query::order_desc("publishedAt"),
        ];
        let list = self
            .store
            .list_documents(database_id, collection_id, &queries)
            .await?;

        list.documents
            .into_iter()
            .map(|doc| decode::<TestimonialDocument>(doc).map(TestimonialRecord::from))
            .collect()
    }

    pub async fn fetch_site_metrics(&self) -> Result<Option<SiteMetrics>, StoreError> {
        let collection_id = self.config.require(EnvKey::MetricsCollectionId)?;
        let database_id = self.database_id()?;

        let fetched = classify(
            self.store
                .list_documents(database_id, collection_id, &[Query::limit(1)])
                .await,
        )?;
        let latest = fetched
            .into_option()
            .and_then(|list| list.documents.into_iter().next());
        match latest {
            Some(document) => Ok(Some(decode::<MetricsDocument>(document)?.into())),
            None => Ok(None),
        }
    }
}
