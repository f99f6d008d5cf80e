//! Error types for configuration loading.

use std::path::PathBuf;

/// Errors raised while building or validating configuration.
///
/// Every variant except [`ConfigError::CredentialsNotFound`] describes a bad
/// value; that one reports a credential file missing from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No Firebase project identifier was supplied
    #[error("FIREBASE_PROJECT_ID is required")]
    MissingProjectId,

    /// Neither credential source was supplied
    #[error("Either FIREBASE_CREDENTIALS_PATH or FIREBASE_CREDENTIALS_JSON must be set")]
    MissingCredentials,

    /// Both credential sources were supplied
    #[error("Only one of FIREBASE_CREDENTIALS_PATH or FIREBASE_CREDENTIALS_JSON may be set")]
    ConflictingCredentials,

    /// The credential path does not exist
    #[error("Firebase credentials file not found: {}", .0.display())]
    CredentialsNotFound(PathBuf),

    /// Inline credentials are not valid JSON
    #[error("Invalid JSON in FIREBASE_CREDENTIALS_JSON: {0}")]
    MalformedCredentials(#[source] serde_json::Error),

    /// Routing weights do not sum to 1.0
    #[error("Routing weights must sum to 1.0 (got {sum:.4})")]
    WeightSum {
        /// Actual sum of the three weights
        sum: f64,
    },

    /// A field has an invalid value
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Name of the field
        field: &'static str,
        /// Human-readable reason
        reason: String,
    },

    /// The environment could not be parsed into typed settings
    #[error(transparent)]
    Args(#[from] clap::Error),
}

impl ConfigError {
    /// Construct an [`ConfigError::InvalidValue`] error.
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// True for the missing-file error, false for value errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CredentialsNotFound(_))
    }
}

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguished() {
        let err = ConfigError::CredentialsNotFound(PathBuf::from("/nope/creds.json"));
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/nope/creds.json"));

        assert!(!ConfigError::MissingProjectId.is_not_found());
        assert!(!ConfigError::WeightSum { sum: 0.9 }.is_not_found());
    }

    #[test]
    fn test_weight_sum_message() {
        let err = ConfigError::WeightSum { sum: 1.25 };
        assert_eq!(err.to_string(), "Routing weights must sum to 1.0 (got 1.2500)");
    }
}
