//! Recursive record walker.

use super::config::ValidatorConfig;
use super::violations::{ConstraintError, FailureSet};
use crate::constraints::{self, ConstraintKind, ConstraintValidation};
use crate::core::{Record, Value};
use crate::metadata::{Annotation, MetadataEntry, MetadataProvider, FIELD_SEPARATOR};
use stillwater::validation::Validation;

/// Validates record graphs against the metadata of a provider.
///
/// Each record's own constrained fields are checked first, then every
/// nested record is walked. Each step returns its own validation and the
/// caller combines them, so ALL violations in the graph are reported.
///
/// # Example
///
/// ```rust
/// use fieldcheck::core::{Record, Value};
/// use fieldcheck::metadata::MetadataRegistry;
/// use fieldcheck::record_constraints;
/// use fieldcheck::walker::Validator;
///
/// let registry = MetadataRegistry::new().with(
///     "Person",
///     record_constraints! {
///         name: String { minLength: 3 },
///         age: Number { minValue: 18 },
///     },
/// );
/// let validator = Validator::new(registry);
///
/// let person = Value::from(Record::new("Person").with("name", "Al").with("age", 15));
/// let failed = validator.failed_constraints(&person);
///
/// assert_eq!(failed.names(), vec!["minValue", "minLength"]);
/// assert!(validator.validate(&person).is_err());
/// ```
pub struct Validator<P> {
    provider: P,
    config: ValidatorConfig,
}

impl<P: MetadataProvider> Validator<P> {
    /// Create a validator with the default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ValidatorConfig::default())
    }

    pub(crate) fn with_config(provider: P, config: ValidatorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a value, reporting every violated constraint in one error.
    ///
    /// Values that are not records are trivially valid.
    pub fn validate(&self, value: &Value) -> Result<(), ConstraintError> {
        let failed = self.failed_constraints(value);
        if failed.is_empty() {
            Ok(())
        } else {
            Err(ConstraintError::Violation { failed })
        }
    }

    /// The set of constraint names violated anywhere in the value's record graph.
    pub fn failed_constraints(&self, value: &Value) -> FailureSet {
        FailureSet::from(self.check(value))
    }

    /// Walk the value and accumulate ALL violations.
    pub fn check(&self, value: &Value) -> ConstraintValidation {
        let Some(record) = value.as_record() else {
            tracing::debug!(kind = value.type_name(), "skipping non-record value");
            return Validation::success(());
        };

        let result = self.walk(record);
        tracing::debug!(
            type_name = record.type_name().unwrap_or("<untyped>"),
            valid = result.is_success(),
            "validated record graph"
        );
        result
    }

    fn walk(&self, record: &Record) -> ConstraintValidation {
        let mut checks = self.check_fields(record);

        for (name, value) in record.fields() {
            if let Value::Record(nested) = value {
                tracing::trace!(field = name, "descending into nested record");
                checks.push(self.walk(nested));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Check the record's own constrained fields.
    fn check_fields(&self, record: &Record) -> Vec<ConstraintValidation> {
        let Some(metadata) = record
            .type_name()
            .and_then(|type_name| self.provider.metadata_for(type_name))
        else {
            return Vec::new();
        };

        metadata
            .entries()
            .iter()
            .filter_map(|entry| Some((self.field_name(entry)?, entry)))
            .flat_map(|(field, entry)| {
                let value = record.get(field);
                entry
                    .annotations
                    .iter()
                    .filter_map(move |annotation| self.check_annotation(field, annotation, value))
            })
            .collect()
    }

    fn check_annotation(
        &self,
        field: &str,
        annotation: &Annotation,
        value: Option<&Value>,
    ) -> Option<ConstraintValidation> {
        let tag = annotation
            .tag
            .strip_prefix(self.config.annotation_namespace.as_str())
            .unwrap_or(&annotation.tag);

        let Some(kind) = ConstraintKind::from_tag(tag) else {
            tracing::trace!(field, tag, "ignoring unrecognized constraint tag");
            return None;
        };

        let result = constraints::evaluate(kind, &annotation.params, value);
        tracing::trace!(field, tag, passed = result.is_success(), "evaluated constraints");
        Some(result)
    }

    /// Field name of a field entry; `None` for entries without the field marker.
    fn field_name<'m>(&self, entry: &'m MetadataEntry) -> Option<&'m str> {
        let rest = entry
            .key
            .strip_prefix(self.config.field_marker.as_str())?;
        Some(rest.strip_prefix(FIELD_SEPARATOR).unwrap_or(rest))
    }
}
