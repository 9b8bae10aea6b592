use super::*;

#[test]
fn require_returns_configured_value() {
    let config = AppwriteConfig {
        database_id: Some("site".to_string()),
        ..AppwriteConfig::default()
    };
    assert_eq!(config.require(EnvKey::DatabaseId), Ok("site"));
}

#[test]
fn require_names_the_missing_key() {
    let err = AppwriteConfig::default()
        .require(EnvKey::DatabaseId)
        .unwrap_err();
    assert_eq!(err, ConfigError::Missing { key: EnvKey::DatabaseId });
    assert_eq!(
        err.to_string(),
        "Missing environment variable: VITE_APPWRITE_DATABASE_ID"
    );
}

#[test]
fn blank_values_count_as_unset() {
    let config = AppwriteConfig {
        bucket_id: Some("   ".to_string()),
        ..AppwriteConfig::default()
    };
    assert!(config.get(EnvKey::BucketId).is_none());
    assert!(config.require(EnvKey::BucketId).is_err());
}

#[test]
fn values_are_trimmed() {
    let config = AppwriteConfig {
        project_id: Some(" ribera \n".to_string()),
        ..AppwriteConfig::default()
    };
    assert_eq!(config.get(EnvKey::ProjectId), Some("ribera"));
}

#[test]
fn every_key_maps_to_its_own_slot() {
    let keys = [
        EnvKey::Endpoint,
        EnvKey::ProjectId,
        EnvKey::DatabaseId,
        EnvKey::BucketId,
        EnvKey::ContactCollectionId,
        EnvKey::LeadsCollectionId,
        EnvKey::TestimonialsCollectionId,
        EnvKey::MetricsCollectionId,
        EnvKey::DownloadsCollectionId,
        EnvKey::DownloadsDocumentId,
    ];
    for key in keys {
        let mut config = AppwriteConfig::default();
        match key {
            EnvKey::Endpoint => config.endpoint = Some("x".into()),
            EnvKey::ProjectId => config.project_id = Some("x".into()),
            EnvKey::DatabaseId => config.database_id = Some("x".into()),
            EnvKey::BucketId => config.bucket_id = Some("x".into()),
            EnvKey::ContactCollectionId => config.contact_collection_id = Some("x".into()),
            EnvKey::LeadsCollectionId => config.leads_collection_id = Some("x".into()),
            EnvKey::TestimonialsCollectionId => {
                config.testimonials_collection_id = Some("x".into());
            }
            EnvKey::MetricsCollectionId => config.metrics_collection_id = Some("x".into()),
            EnvKey::DownloadsCollectionId => config.downloads_collection_id = Some("x".into()),
            EnvKey::DownloadsDocumentId => config.downloads_document_id = Some("x".into()),
        }
        let set: Vec<EnvKey> = keys.iter().copied().filter(|k| config.get(*k).is_some()).collect();
        assert_eq!(set, vec![key], "{key} leaked into another slot");
    }
}
