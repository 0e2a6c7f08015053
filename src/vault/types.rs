//! Request and response types for the batch protocol.
//!
//! The batch request arrives on stdin as `{"secrets": ["name", ...]}`.
//! The response is a single JSON object mapping each requested name to
//! `{"value": ..., "error": ...}` with exactly one of the two populated.
//! Entry order follows request order (serde_json's `preserve_order`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, VaultFetchError};

/// Error string recorded for any secret that could not be fetched.
///
/// Deliberately generic: the actual cause (network, 404, malformed body)
/// is only visible through the logging side-channel, never to the
/// consumer of the response.
pub const UNABLE_TO_RETRIEVE: &str = "Unable to retrieve secret.";

/// A batch request: the ordered list of secret names to fetch.
#[derive(Debug, Deserialize)]
pub struct SecretRequest {
    pub secrets: Vec<String>,
}

/// Outcome for a single requested secret.
///
/// Both keys are always serialized so consumers can rely on the shape;
/// the absent side is `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretResult {
    pub value: Option<String>,
    pub error: Option<String>,
}

impl SecretResult {
    /// A successfully fetched value.
    pub fn ok(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            error: None,
        }
    }

    /// A failed fetch, recorded as an error string.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            value: None,
            error: Some(error.into()),
        }
    }
}

/// The assembled batch response, one entry per requested name.
///
/// Duplicate names collapse to a single entry (last fetch wins), matching
/// plain JSON object semantics.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct SecretResponse(Map<String, Value>);

impl SecretResponse {
    pub fn insert(&mut self, name: &str, result: &SecretResult) -> Result<()> {
        let value = serde_json::to_value(result)
            .map_err(|e| VaultFetchError::SerializationError(e.to_string()))?;
        self.0.insert(name.to_string(), value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the response as a single JSON line for stdout.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.0)
            .map_err(|e| VaultFetchError::SerializationError(e.to_string()))
    }
}
