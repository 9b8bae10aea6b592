//! Build-time store settings.
//!
//! Values are baked into the wasm bundle with `option_env!`, so they are read
//! from the environment of the `trunk build` invocation, not from the browser.
//! Nothing is validated up front: each store call asks for exactly the keys it
//! needs and fails with [`ConfigError::Missing`] if one is absent.

use thiserror::Error;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Names of every setting the site reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKey {
    Endpoint,
    ProjectId,
    DatabaseId,
    BucketId,
    ContactCollectionId,
    LeadsCollectionId,
    TestimonialsCollectionId,
    MetricsCollectionId,
    DownloadsCollectionId,
    DownloadsDocumentId,
}

impl EnvKey {
    pub fn as_str(self) -> &'static str {
        match self {
            EnvKey::Endpoint => "VITE_APPWRITE_ENDPOINT",
            EnvKey::ProjectId => "VITE_APPWRITE_PROJECT_ID",
            EnvKey::DatabaseId => "VITE_APPWRITE_DATABASE_ID",
            EnvKey::BucketId => "VITE_APPWRITE_BUCKET_ID",
            EnvKey::ContactCollectionId => "VITE_APPWRITE_CONTACT_COLLECTION_ID",
            EnvKey::LeadsCollectionId => "VITE_APPWRITE_LEADS_COLLECTION_ID",
            EnvKey::TestimonialsCollectionId => "VITE_APPWRITE_TESTIMONIALS_COLLECTION_ID",
            EnvKey::MetricsCollectionId => "VITE_APPWRITE_METRICS_COLLECTION_ID",
            EnvKey::DownloadsCollectionId => "VITE_APPWRITE_DOWNLOADS_COLLECTION_ID",
            EnvKey::DownloadsDocumentId => "VITE_APPWRITE_DOWNLOADS_DOCUMENT_ID",
        }
    }
}

impl std::fmt::Display for EnvKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {key}")]
    Missing { key: EnvKey },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppwriteConfig {
    pub endpoint: Option<String>,
    pub project_id: Option<String>,
    pub database_id: Option<String>,
    pub bucket_id: Option<String>,
    pub contact_collection_id: Option<String>,
    pub leads_collection_id: Option<String>,
    pub testimonials_collection_id: Option<String>,
    pub metrics_collection_id: Option<String>,
    pub downloads_collection_id: Option<String>,
    pub downloads_document_id: Option<String>,
}

fn baked(value: Option<&'static str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}

impl AppwriteConfig {
    pub fn from_build_env() -> Self {
        Self {
            endpoint: baked(option_env!("VITE_APPWRITE_ENDPOINT")),
            project_id: baked(option_env!("VITE_APPWRITE_PROJECT_ID")),
            database_id: baked(option_env!("VITE_APPWRITE_DATABASE_ID")),
            bucket_id: baked(option_env!("VITE_APPWRITE_BUCKET_ID")),
            contact_collection_id: baked(option_env!("VITE_APPWRITE_CONTACT_COLLECTION_ID")),
            leads_collection_id: baked(option_env!("VITE_APPWRITE_LEADS_COLLECTION_ID")),
            testimonials_collection_id: baked(option_env!(
                "VITE_APPWRITE_TESTIMONIALS_COLLECTION_ID"
            )),
            metrics_collection_id: baked(option_env!("VITE_APPWRITE_METRICS_COLLECTION_ID")),
            downloads_collection_id: baked(option_env!("VITE_APPWRITE_DOWNLOADS_COLLECTION_ID")),
            downloads_document_id: baked(option_env!("VITE_APPWRITE_DOWNLOADS_DOCUMENT_ID")),
        }
    }

    /// Raw lookup. Blank values count as unset.
    pub fn get(&self, key: EnvKey) -> Option<&str> {
        let slot = match key {
            EnvKey::Endpoint => &self.endpoint,
            EnvKey::ProjectId => &self.project_id,
            EnvKey::DatabaseId => &self.database_id,
            EnvKey::BucketId => &self.bucket_id,
            EnvKey::ContactCollectionId => &self.contact_collection_id,
            EnvKey::LeadsCollectionId => &self.leads_collection_id,
            EnvKey::TestimonialsCollectionId => &self.testimonials_collection_id,
            EnvKey::MetricsCollectionId => &self.metrics_collection_id,
            EnvKey::DownloadsCollectionId => &self.downloads_collection_id,
            EnvKey::DownloadsDocumentId => &self.downloads_document_id,
        };
        slot.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn require(&self, key: EnvKey) -> Result<&str, ConfigError> {
        self.get(key).ok_or(ConfigError::Missing { key })
    }

    /// Warn once at startup when the client cannot possibly reach the store.
    pub fn warn_if_incomplete(&self) {
        if self.get(EnvKey::Endpoint).is_none() || self.get(EnvKey::ProjectId).is_none() {
            log::warn!(
                "Missing Appwrite configuration. Please set {} and {} when building the site.",
                EnvKey::Endpoint,
                EnvKey::ProjectId
            );
        }
    }
}
