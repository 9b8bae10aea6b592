//! In-memory `DocumentStore` for tests.
//!
//! Behaves like the hosted store for the calls the site makes: unknown
//! collections and documents answer 404, `equal`/`order*`/`limit` queries are
//! applied, and created documents get a generated `$id`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use serde_json::{json, Value};

use crate::appwrite::client::{DocumentList, DocumentStore, UNIQUE_ID};
use crate::appwrite::error::StoreError;
use crate::appwrite::query::Query;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create { collection: String, data: Value },
    Get { collection: String, document: String },
    List { collection: String, queries: Vec<Query> },
}

#[derive(Default)]
pub struct MemoryStore {
    collections: RefCell<HashMap<(String, String), Vec<Value>>>,
    calls: RefCell<Vec<Call>>,
    failure: RefCell<Option<StoreError>>,
    next_id: Cell<u32>,
    hide_ids: Cell<bool>,
}

fn not_found(kind: &str) -> StoreError {
    StoreError::Service {
        code: 404,
        kind: kind.to_string(),
        message: "The requested resource could not be found.".to_string(),
    }
}

fn compare(a: &Value, b: &Value) -> std::cmp::Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(std::cmp::Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Null, Value::Null) => std::cmp::Ordering::Equal,
        (Value::Null, _) => std::cmp::Ordering::Less,
        (_, Value::Null) => std::cmp::Ordering::Greater,
        _ => std::cmp::Ordering::Equal,
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection so it answers lists instead of 404.
    pub fn with_collection(self, database: &str, collection: &str) -> Self {
        self.collections
            .borrow_mut()
            .entry((database.to_string(), collection.to_string()))
            .or_default();
        self
    }

    pub fn with_document(self, database: &str, collection: &str, document: Value) -> Self {
        self.collections
            .borrow_mut()
            .entry((database.to_string(), collection.to_string()))
            .or_default()
            .push(document);
        self
    }

    /// Every subsequent call fails with `error`.
    pub fn failing(self, error: StoreError) -> Self {
        *self.failure.borrow_mut() = Some(error);
        self
    }

    /// Created documents are stored as usual but answered without `$id`.
    pub fn hiding_created_ids(self) -> Self {
        self.hide_ids.set(true);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn documents(&self, database: &str, collection: &str) -> Vec<Value> {
        self.collections
            .borrow()
            .get(&(database.to_string(), collection.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    fn check_failure(&self) -> Result<(), StoreError> {
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl DocumentStore for MemoryStore {
    async fn create_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
        data: Value,
    ) -> Result<Value, StoreError> {
        self.calls.borrow_mut().push(Call::Create {
            collection: collection_id.to_string(),
            data: data.clone(),
        });
        self.check_failure()?;

        let id = if document_id == UNIQUE_ID {
            self.next_id.set(self.next_id.get() + 1);
            format!("doc-{}", self.next_id.get())
        } else {
            document_id.to_string()
        };
        let mut document = json!({ "$id": id });
        if let (Some(target), Value::Object(fields)) = (document.as_object_mut(), data) {
            target.extend(fields);
        }
        self.collections
            .borrow_mut()
            .entry((database_id.to_string(), collection_id.to_string()))
            .or_default()
            .push(document.clone());
        if self.hide_ids.get() {
            if let Some(fields) = document.as_object_mut() {
                fields.remove("$id");
            }
        }
        Ok(document)
    }

    async fn get_document(
        &self,
        database_id: &str,
        collection_id: &str,
        document_id: &str,
    ) -> Result<Value, StoreError> {
        self.calls.borrow_mut().push(Call::Get {
            collection: collection_id.to_string(),
            document: document_id.to_string(),
        });
        self.check_failure()?;

        let collections = self.collections.borrow();
        let documents = collections
            .get(&(database_id.to_string(), collection_id.to_string()))
            .ok_or_else(|| not_found("collection_not_found"))?;
        documents
            .iter()
            .find(|doc| doc.get("$id").and_then(Value::as_str) == Some(document_id))
            .cloned()
            .ok_or_else(|| not_found("document_not_found"))
    }

    async fn list_documents(
        &self,
        database_id: &str,
        collection_id: &str,
        queries: &[Query],
    ) -> Result<DocumentList, StoreError> {
        self.calls.borrow_mut().push(Call::List {
            collection: collection_id.to_string(),
            queries: queries.to_vec(),
        });
        self.check_failure()?;

        let collections = self.collections.borrow();
        let mut documents = collections
            .get(&(database_id.to_string(), collection_id.to_string()))
            .cloned()
            .ok_or_else(|| not_found("collection_not_found"))?;

        let mut limit = None;
        for query in queries {
            match query {
                Query::Equal { attribute, values } => {
                    documents.retain(|doc| {
                        doc.get(attribute).map_or(false, |v| values.contains(v))
                    });
                }
                Query::OrderDesc(attribute) => {
                    documents.sort_by(|a, b| {
                        compare(&b[attribute.as_str()], &a[attribute.as_str()])
                    });
                }
                Query::Limit(count) => limit = Some(*count as usize),
            }
        }
        let total = documents.len() as u64;
        if let Some(limit) = limit {
            documents.truncate(limit);
        }
        Ok(DocumentList { total, documents })
    }
}
