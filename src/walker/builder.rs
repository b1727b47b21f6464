//! Builder API for configuring a validator.

use super::config::{ConfigError, ValidatorConfig};
use super::validator::Validator;
use crate::metadata::MetadataProvider;

/// Builder for [`Validator`]
pub struct ValidatorBuilder {
    config: ValidatorConfig,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the prefix that marks field entries in metadata
    pub fn field_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.field_marker = marker.into();
        self
    }

    /// Set the namespace stripped from annotation tags
    pub fn annotation_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.annotation_namespace = namespace.into();
        self
    }

    /// Build a validator reading metadata from `provider`.
    pub fn build<P: MetadataProvider>(self, provider: P) -> Result<Validator<P>, ConfigError> {
        self.config.check()?;
        Ok(Validator::with_config(provider, self.config))
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let validator = ValidatorBuilder::new().build(()).unwrap();
        assert_eq!(validator.config(), &ValidatorConfig::default());
    }

    #[test]
    fn builder_overrides_prefixes() {
        let validator = ValidatorBuilder::new()
            .field_marker("@f")
            .annotation_namespace("acme:")
            .build(())
            .unwrap();

        assert_eq!(validator.config().field_marker, "@f");
        assert_eq!(validator.config().annotation_namespace, "acme:");
    }

    #[test]
    fn builder_accepts_loaded_config() {
        let config = ValidatorConfig::from_json(r#"{"fieldMarker": "@"}"#).unwrap();
        let validator = ValidatorBuilder::new()
            .config(config.clone())
            .build(())
            .unwrap();

        assert_eq!(validator.config(), &config);
    }

    #[test]
    fn builder_rejects_empty_marker() {
        let result = ValidatorBuilder::new().field_marker("").build(());
        assert!(matches!(result, Err(ConfigError::EmptyFieldMarker)));
    }
}
