//! Firebase connection descriptor.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Collection prefix used when none is configured.
pub const DEFAULT_COLLECTION_PREFIX: &str = "reality_graph";

/// Where the service-account credentials come from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FirebaseCredentials {
    /// Path to a service-account JSON file
    Path(PathBuf),
    /// Service-account JSON supplied inline
    Inline(#[serde(serialize_with = "redact")] Map<String, Value>),
}

fn redact<S: Serializer>(_: &Map<String, Value>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str("<redacted>")
}

/// Parse inline service-account credentials.
///
/// The text must hold a JSON object.
pub fn parse_credentials_json(json: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(json).map_err(ConfigError::MalformedCredentials)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ConfigError::invalid_value(
            "firebase_credentials_json",
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Firebase project and credentials.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FirebaseConfig {
    pub project_id: String,
    pub credentials: FirebaseCredentials,
    pub collection_prefix: String,
}

impl FirebaseConfig {
    /// Build a descriptor from a project id and exactly one credential source.
    ///
    /// Fails when the project id is blank, when zero or two credential sources
    /// are given, or when the credential path does not exist.
    pub fn new(
        project_id: impl Into<String>,
        credentials_path: Option<PathBuf>,
        credentials_json: Option<Map<String, Value>>,
    ) -> Result<Self> {
        let project_id = project_id.into();
        if project_id.trim().is_empty() {
            return Err(ConfigError::MissingProjectId);
        }

        let credentials = match (credentials_path, credentials_json) {
            (None, None) => return Err(ConfigError::MissingCredentials),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingCredentials),
            (Some(path), None) => {
                if !path.exists() {
                    return Err(ConfigError::CredentialsNotFound(path));
                }
                FirebaseCredentials::Path(path)
            }
            (None, Some(map)) => FirebaseCredentials::Inline(map),
        };

        Ok(Self {
            project_id,
            credentials,
            collection_prefix: DEFAULT_COLLECTION_PREFIX.to_string(),
        })
    }

    /// Replace the collection prefix
    pub fn with_collection_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.collection_prefix = prefix.into();
        self
    }

    /// Full collection name for `name` under the configured prefix.
    pub fn collection(&self, name: &str) -> String {
        if self.collection_prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}_{}", self.collection_prefix, name)
        }
    }
}
