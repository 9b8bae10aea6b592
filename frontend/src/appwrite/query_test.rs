use super::*;

fn parsed(query: &Query) -> Value {
    serde_json::from_str(&query.to_json()).expect("query is valid json")
}

#[test]
fn equal_carries_attribute_and_values() {
    assert_eq!(
        parsed(&Query::equal("language", "sw")),
        json!({ "method": "equal", "attribute": "language", "values": ["sw"] })
    );
}

#[test]
fn order_desc_has_no_values() {
    assert_eq!(
        parsed(&Query::order_desc("publishedAt")),
        json!({ "method": "orderDesc", "attribute": "publishedAt" })
    );
}

#[test]
fn limit_has_no_attribute() {
    assert_eq!(parsed(&Query::limit(1)), json!({ "method": "limit", "values": [1] }));
}

#[test]
fn query_string_indexes_and_encodes() {
    let qs = query_string(&[Query::limit(1), Query::order_desc("name")]);
    let parts: Vec<&str> = qs.split('&').collect();
    assert_eq!(parts.len(), 2);
    assert!(parts[0].starts_with("queries%5B0%5D="));
    assert!(parts[1].starts_with("queries%5B1%5D="));
    assert!(!qs.contains('{'));
    assert!(!qs.contains('"'));

    let (_, encoded) = parts[0].split_once('=').unwrap();
    let decoded = urlencoding::decode(encoded).unwrap();
    assert_eq!(decoded, Query::limit(1).to_json());
}

#[test]
fn empty_query_list_is_empty_string() {
    assert_eq!(query_string(&[]), "");
}
