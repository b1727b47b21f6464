//! Validator configuration.

use crate::metadata::{ANNOTATION_NAMESPACE, FIELD_MARKER};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration text was not valid JSON for this shape
    #[error("Invalid validator configuration: {0}")]
    Invalid(#[from] serde_json::Error),

    /// The field marker must be non-empty, or every metadata key would match
    #[error("Field marker must not be empty")]
    EmptyFieldMarker,
}

/// How metadata keys and annotation tags are recognized.
///
/// Missing keys in a JSON configuration fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Prefix marking a metadata key as a field entry
    pub field_marker: String,

    /// Prefix stripped from annotation tags before matching the kind
    pub annotation_namespace: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            field_marker: FIELD_MARKER.to_string(),
            annotation_namespace: ANNOTATION_NAMESPACE.to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Load a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    pub(crate) fn check(&self) -> Result<(), ConfigError> {
        if self.field_marker.is_empty() {
            return Err(ConfigError::EmptyFieldMarker);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_metadata_prefixes() {
        let config = ValidatorConfig::default();
        assert_eq!(config.field_marker, "$field$");
        assert_eq!(config.annotation_namespace, "constraint:1:");
    }

    #[test]
    fn from_json_reads_overrides() {
        let config = ValidatorConfig::from_json(
            r#"{"fieldMarker": "@field", "annotationNamespace": "acme/constraint:"}"#,
        )
        .unwrap();

        assert_eq!(config.field_marker, "@field");
        assert_eq!(config.annotation_namespace, "acme/constraint:");
    }

    #[test]
    fn from_json_fills_missing_keys_with_defaults() {
        let config = ValidatorConfig::from_json(r#"{"annotationNamespace": ""}"#).unwrap();

        assert_eq!(config.field_marker, "$field$");
        assert_eq!(config.annotation_namespace, "");
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        let err = ValidatorConfig::from_json("{fieldMarker").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn from_json_rejects_empty_marker() {
        let err = ValidatorConfig::from_json(r#"{"fieldMarker": ""}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyFieldMarker));
        assert_eq!(err.to_string(), "Field marker must not be empty");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ValidatorConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ValidatorConfig::from_json(&json).unwrap(), config);
    }
}
