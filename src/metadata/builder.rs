//! Builder API for declaring record metadata.

use super::{Annotation, MetadataEntry, RecordMetadata};
use super::{ANNOTATION_NAMESPACE, FIELD_MARKER, FIELD_SEPARATOR};
use crate::constraints::{ConstraintKind, ConstraintParam};

/// Builder for [`RecordMetadata`].
///
/// Field keys and annotation tags are written with the default marker
/// and namespace unless [`prefixes`](Self::prefixes) overrides them.
/// Constraining the same field twice adds a second annotation to it.
pub struct RecordMetadataBuilder {
    field_marker: String,
    annotation_namespace: String,
    entries: Vec<MetadataEntry>,
}

impl RecordMetadataBuilder {
    pub fn new() -> Self {
        Self {
            field_marker: FIELD_MARKER.to_string(),
            annotation_namespace: ANNOTATION_NAMESPACE.to_string(),
            entries: Vec::new(),
        }
    }

    /// Use a custom field marker and annotation namespace for subsequent declarations
    pub fn prefixes(mut self, field_marker: &str, annotation_namespace: &str) -> Self {
        self.field_marker = field_marker.to_string();
        self.annotation_namespace = annotation_namespace.to_string();
        self
    }

    /// Constrain a field with one of the built-in kinds
    pub fn constrain<I, P>(self, field: &str, kind: ConstraintKind, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ConstraintParam>,
    {
        self.annotate(field, kind.tag(), params)
    }

    /// Constrain a field with an arbitrary kind tag.
    ///
    /// The tag is namespaced like the built-in ones. Tags the validator
    /// does not recognize are kept and later skipped.
    pub fn annotate<I, P>(mut self, field: &str, tag: &str, params: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ConstraintParam>,
    {
        let key = format!("{}{}{}", self.field_marker, FIELD_SEPARATOR, field);
        let annotation = Annotation::new(
            format!("{}{}", self.annotation_namespace, tag),
            params.into_iter().map(Into::into).collect(),
        );

        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.annotations.push(annotation),
            None => self.entries.push(MetadataEntry {
                key,
                annotations: vec![annotation],
            }),
        }
        self
    }

    /// Add an entry verbatim, without applying marker or namespace.
    pub fn raw_entry(mut self, key: impl Into<String>, annotations: Vec<Annotation>) -> Self {
        self.entries.push(MetadataEntry {
            key: key.into(),
            annotations,
        });
        self
    }

    pub fn build(self) -> RecordMetadata {
        RecordMetadata {
            entries: self.entries,
        }
    }
}

impl Default for RecordMetadataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Literal;

    #[test]
    fn constrain_writes_marked_key_and_namespaced_tag() {
        let metadata = RecordMetadataBuilder::new()
            .constrain("age", ConstraintKind::Int, [("minValue", 18)])
            .build();

        let entry = &metadata.entries()[0];
        assert_eq!(entry.key, "$field$.age");
        assert_eq!(entry.annotations[0].tag, "constraint:1:Int");
        assert_eq!(
            entry.annotations[0].params,
            vec![ConstraintParam::new("minValue", 18)]
        );
    }

    #[test]
    fn entries_keep_declaration_order() {
        let metadata = RecordMetadataBuilder::new()
            .constrain("b", ConstraintKind::String, [("length", 1)])
            .constrain("a", ConstraintKind::String, [("length", 2)])
            .build();

        let keys: Vec<&str> = metadata.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["$field$.b", "$field$.a"]);
    }

    #[test]
    fn repeated_field_collects_annotations() {
        let metadata = RecordMetadataBuilder::new()
            .constrain("code", ConstraintKind::String, [("minLength", 2)])
            .annotate("code", "Pattern", Vec::<ConstraintParam>::new())
            .build();

        assert_eq!(metadata.len(), 1);
        let tags: Vec<&str> = metadata.entries()[0]
            .annotations
            .iter()
            .map(|a| a.tag.as_str())
            .collect();
        assert_eq!(tags, vec!["constraint:1:String", "constraint:1:Pattern"]);
    }

    #[test]
    fn custom_prefixes_apply() {
        let metadata = RecordMetadataBuilder::new()
            .prefixes("@f", "ns/")
            .constrain("x", ConstraintKind::Float, [("maxValue", 1.5)])
            .build();

        let entry = &metadata.entries()[0];
        assert_eq!(entry.key, "@f.x");
        assert_eq!(entry.annotations[0].tag, "ns/Float");
        assert_eq!(entry.annotations[0].params[0].value, Literal::Float(1.5));
    }

    #[test]
    fn raw_entry_is_stored_verbatim() {
        let metadata = RecordMetadataBuilder::new()
            .raw_entry("display", vec![Annotation::new("ui:Label", Vec::new())])
            .build();

        assert_eq!(metadata.entries()[0].key, "display");
        assert_eq!(metadata.entries()[0].annotations[0].tag, "ui:Label");
    }
}
