use super::*;
use crate::config::EnvKey;

#[test]
fn from_response_reads_store_error_body() {
    let body = r#"{"message":"Document with the requested ID could not be found.","code":404,"type":"document_not_found","version":"1.5.7"}"#;
    let err = StoreError::from_response(404, body);
    assert_eq!(
        err,
        StoreError::Service {
            code: 404,
            kind: "document_not_found".to_string(),
            message: "Document with the requested ID could not be found.".to_string(),
        }
    );
    assert!(err.is_not_found());
}

#[test]
fn from_response_falls_back_to_http_status() {
    let err = StoreError::from_response(502, "<html>Bad Gateway</html>");
    match err {
        StoreError::Service { code, kind, .. } => {
            assert_eq!(code, 502);
            assert_eq!(kind, "unknown");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn body_without_code_uses_status() {
    let err = StoreError::from_response(404, r#"{"message":"gone"}"#);
    assert!(err.is_not_found());
}

#[test]
fn only_404_service_errors_are_not_found() {
    assert!(!StoreError::Transport("offline".into()).is_not_found());
    assert!(!StoreError::from_response(401, r#"{"code":401,"type":"user_unauthorized"}"#).is_not_found());
    assert!(!StoreError::Config(ConfigError::Missing { key: EnvKey::DatabaseId }).is_not_found());
}

#[test]
fn classify_separates_empty_from_failure() {
    assert_eq!(classify::<u8>(Ok(3)), Ok(Fetched::Found(3)));
    assert_eq!(
        classify::<u8>(Err(StoreError::from_response(404, ""))),
        Ok(Fetched::NotFound)
    );
    let offline = StoreError::Transport("offline".into());
    assert_eq!(classify::<u8>(Err(offline.clone())), Err(offline));
}

#[test]
fn fetched_into_option() {
    assert_eq!(Fetched::Found("x").into_option(), Some("x"));
    assert_eq!(Fetched::<u8>::NotFound.into_option(), None);
}
