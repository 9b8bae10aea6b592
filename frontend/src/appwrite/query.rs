//! List filters in the store's JSON query syntax.

use serde_json::{json, Value};

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Equal { attribute: String, values: Vec<Value> },
    OrderDesc(String),
    Limit(u32),
}

impl Query {
    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        Query::Equal {
            attribute: attribute.to_string(),
            values: vec![value.into()],
        }
    }

    pub fn order_desc(attribute: &str) -> Self {
        Query::OrderDesc(attribute.to_string())
    }

    pub fn limit(count: u32) -> Self {
        Query::Limit(count)
    }

    pub fn to_json(&self) -> String {
        let value = match self {
            Query::Equal { attribute, values } => json!({
                "method": "equal",
                "attribute": attribute,
                "values": values,
            }),
            Query::OrderDesc(attribute) => json!({ "method": "orderDesc", "attribute": attribute }),
            Query::Limit(count) => json!({ "method": "limit", "values": [count] }),
        };
        value.to_string()
    }
}

/// `queries[0]=..&queries[1]=..`, each query URL-encoded.
pub fn query_string(queries: &[Query]) -> String {
    queries
        .iter()
        .enumerate()
        .map(|(i, query)| {
            format!(
                "{}={}",
                urlencoding::encode(&format!("queries[{i}]")),
                urlencoding::encode(&query.to_json())
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
