//! Records: named-field values that may nest other records.

use super::value::Value;
use std::collections::BTreeMap;

/// A structured value with named fields.
///
/// The declared type name is what the validator looks up in its metadata
/// provider. Untyped records carry no constraints of their own but are
/// still walked for nested records.
///
/// Records own their nested records, so a record graph is always a tree.
///
/// # Example
///
/// ```rust
/// use fieldcheck::core::{Record, Value};
///
/// let person = Record::new("Person")
///     .with("name", "Al")
///     .with("age", 15);
///
/// assert_eq!(person.type_name(), Some("Person"));
/// assert_eq!(person.get("age"), Some(&Value::Int(15)));
/// assert!(person.get("email").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    type_name: Option<String>,
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Create an empty record of the given declared type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: Some(type_name.into()),
            fields: BTreeMap::new(),
        }
    }

    /// Create an empty record with no declared type.
    pub fn untyped() -> Self {
        Self::default()
    }

    /// Return the record with `name` set to `value`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// Iterate over all fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_type_and_no_fields() {
        let record = Record::new("Order");
        assert_eq!(record.type_name(), Some("Order"));
        assert!(record.is_empty());
    }

    #[test]
    fn untyped_record_has_no_type() {
        assert_eq!(Record::untyped().type_name(), None);
    }

    #[test]
    fn insert_replaces_existing_field() {
        let mut record = Record::untyped();
        assert!(record.insert("qty", 1).is_none());
        assert_eq!(record.insert("qty", 2), Some(Value::Int(1)));
        assert_eq!(record.get("qty"), Some(&Value::Int(2)));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn fields_iterate_in_name_order() {
        let record = Record::untyped().with("b", 2).with("a", 1).with("c", 3);
        let names: Vec<&str> = record.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn nested_records_are_stored_as_values() {
        let inner = Record::new("Address").with("city", "Oslo");
        let outer = Record::new("Person").with("address", inner.clone());

        let nested = outer.get("address").and_then(Value::as_record);
        assert_eq!(nested, Some(&inner));
    }
}
