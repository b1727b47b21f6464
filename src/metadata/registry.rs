//! Registry provider mapping type names to metadata.

use super::{MetadataProvider, RecordMetadata};
use std::collections::HashMap;

/// A metadata provider backed by a fixed table of record types.
///
/// Types are registered up front; lookups never fail, they only
/// report that a type has no metadata.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    types: HashMap<String, RecordMetadata>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register metadata for a type, returning the metadata it replaces.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        metadata: RecordMetadata,
    ) -> Option<RecordMetadata> {
        self.types.insert(type_name.into(), metadata)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, type_name: impl Into<String>, metadata: RecordMetadata) -> Self {
        self.register(type_name, metadata);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MetadataProvider for MetadataRegistry {
    fn metadata_for(&self, type_name: &str) -> Option<&RecordMetadata> {
        self.types.get(type_name)
    }
}
