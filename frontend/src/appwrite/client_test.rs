use super::*;
use futures::executor::block_on;

#[test]
fn documents_url_nests_database_and_collection() {
    assert_eq!(
        documents_url("https://cloud.appwrite.io/v1/", "site", "leads"),
        "https://cloud.appwrite.io/v1/databases/site/collections/leads/documents"
    );
}

#[test]
fn document_url_encodes_the_id() {
    assert_eq!(
        document_url("https://x/v1", "db", "downloads", "latest links"),
        "https://x/v1/databases/db/collections/downloads/documents/latest%20links"
    );
}

#[test]
fn list_url_appends_queries_only_when_present() {
    let bare = list_url("https://x/v1", "db", "metrics", &[]);
    assert!(!bare.contains('?'));

    let limited = list_url("https://x/v1", "db", "metrics", &[Query::limit(1)]);
    assert!(limited.starts_with("https://x/v1/databases/db/collections/metrics/documents?queries%5B0%5D="));
}

#[test]
fn document_list_tolerates_missing_fields() {
    let list: DocumentList = serde_json::from_str("{}").unwrap();
    assert_eq!(list, DocumentList::default());
}

#[test]
fn missing_endpoint_fails_before_any_request() {
    let client = AppwriteClient::new(&AppwriteConfig {
        project_id: Some("ribera".into()),
        ..AppwriteConfig::default()
    });
    let err = block_on(client.get_document("db", "downloads", "links")).unwrap_err();
    assert_eq!(err, StoreError::Config(ConfigError::Missing { key: EnvKey::Endpoint }));
}

#[test]
fn missing_project_fails_before_any_request() {
    let client = AppwriteClient::new(&AppwriteConfig {
        endpoint: Some("https://cloud.appwrite.io/v1".into()),
        ..AppwriteConfig::default()
    });
    let err = block_on(client.create_document("db", "contact", UNIQUE_ID, json!({}))).unwrap_err();
    assert_eq!(err, StoreError::Config(ConfigError::Missing { key: EnvKey::ProjectId }));

    let err = block_on(client.list_documents("db", "metrics", &[Query::limit(1)])).unwrap_err();
    assert_eq!(err, StoreError::Config(ConfigError::Missing { key: EnvKey::ProjectId }));
}
