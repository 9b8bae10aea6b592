use serde::Deserialize;
use thiserror::Error;

use crate::config::ConfigError;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("store returned {code} ({kind}): {message}")]
    Service {
        code: u16,
        kind: String,
        message: String,
    },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Service { code: 404, .. })
    }

    /// Build an error from a non-2xx response. The store answers with
    /// `{"message", "code", "type"}`; anything else keeps the HTTP status.
    pub fn from_response(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            #[serde(default)]
            message: String,
            #[serde(default)]
            code: u16,
            #[serde(default, rename = "type")]
            kind: String,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => StoreError::Service {
                code: if parsed.code == 0 { status } else { parsed.code },
                kind: if parsed.kind.is_empty() { "unknown".to_string() } else { parsed.kind },
                message: parsed.message,
            },
            Err(_) => StoreError::Service {
                code: status,
                kind: "unknown".to_string(),
                message: body.trim().to_string(),
            },
        }
    }
}

/// Outcome of a single-record read, kept apart from failures so an empty
/// collection is never mistaken for an outage.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Found(T),
    NotFound,
}

impl<T> Fetched<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Found(value) => Some(value),
            Fetched::NotFound => None,
        }
    }
}

/// Turn a 404 into `NotFound`; every other error is passed through untouched.
pub fn classify<T>(result: Result<T, StoreError>) -> Result<Fetched<T>, StoreError> {
    match result {
        Ok(value) => Ok(Fetched::Found(value)),
        Err(err) if err.is_not_found() => Ok(Fetched::NotFound),
        Err(err) => Err(err),
    }
}
