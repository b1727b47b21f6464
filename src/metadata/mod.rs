//! Constraint metadata and the providers that supply it.
//!
//! Metadata is attached to record types statically, through a
//! [`MetadataProvider`], instead of being discovered at runtime. The
//! validator only reads it.
//!
//! Metadata is stored in its declared shape: each entry key is a field
//! marker followed by the field name (`$field$.age`), and each annotation
//! tag is namespaced (`constraint:1:Number`). Entries that are not field
//! entries, and tags the validator does not recognize, are carried along
//! untouched.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::constraints::ConstraintKind;
//! use fieldcheck::metadata::{MetadataProvider, MetadataRegistry, RecordMetadata};
//!
//! let person = RecordMetadata::builder()
//!     .constrain("name", ConstraintKind::String, [("minLength", 3)])
//!     .constrain("age", ConstraintKind::Number, [("minValue", 18)])
//!     .build();
//!
//! let registry = MetadataRegistry::new().with("Person", person);
//! assert!(registry.metadata_for("Person").is_some());
//! assert!(registry.metadata_for("Address").is_none());
//! ```

pub mod builder;
pub mod macros;
pub mod registry;

pub use builder::RecordMetadataBuilder;
pub use registry::MetadataRegistry;

use crate::constraints::ConstraintParam;

/// Marker that prefixes the key of every field entry.
pub const FIELD_MARKER: &str = "$field$";

/// Separator between the field marker and the field name.
pub const FIELD_SEPARATOR: char = '.';

/// Namespace that prefixes every constraint annotation tag.
pub const ANNOTATION_NAMESPACE: &str = "constraint:1:";

/// One constraint annotation on a field: a kind tag and its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub tag: String,
    pub params: Vec<ConstraintParam>,
}

impl Annotation {
    pub fn new(tag: impl Into<String>, params: Vec<ConstraintParam>) -> Self {
        Self {
            tag: tag.into(),
            params,
        }
    }
}

/// A metadata entry: the declared key and the annotations attached to it.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataEntry {
    pub key: String,
    pub annotations: Vec<Annotation>,
}

/// All constraint metadata declared for one record type, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordMetadata {
    pub(crate) entries: Vec<MetadataEntry>,
}

impl RecordMetadata {
    pub fn builder() -> RecordMetadataBuilder {
        RecordMetadataBuilder::new()
    }

    pub fn entries(&self) -> &[MetadataEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Supplies constraint metadata for a record type.
///
/// Implementations must be pure: the same type name always yields the
/// same metadata for the lifetime of the provider.
pub trait MetadataProvider {
    /// Metadata declared for `type_name`, or `None` if the type has no constraints.
    fn metadata_for(&self, type_name: &str) -> Option<&RecordMetadata>;
}

/// The empty provider: no type carries constraints.
impl MetadataProvider for () {
    fn metadata_for(&self, _type_name: &str) -> Option<&RecordMetadata> {
        None
    }
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for &P {
    fn metadata_for(&self, type_name: &str) -> Option<&RecordMetadata> {
        (**self).metadata_for(type_name)
    }
}
