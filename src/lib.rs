//! Fieldcheck: recursive, metadata-driven constraint validation
//!
//! Fieldcheck validates nested records whose fields carry declarative
//! constraints (numeric bounds, string length bounds). It walks the whole
//! record graph and collects every violated constraint instead of stopping
//! at the first one.
//!
//! # Core Concepts
//!
//! - **Records**: named-field values that may nest other records
//! - **Metadata**: per-type constraint declarations supplied by a `MetadataProvider`
//! - **Evaluators**: pure numeric and string constraint checks
//! - **Validator**: the recursive walker aggregating a `FailureSet`
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::core::{Record, Value};
//! use fieldcheck::metadata::MetadataRegistry;
//! use fieldcheck::{record_constraints, Validator};
//!
//! let registry = MetadataRegistry::new().with(
//!     "Person",
//!     record_constraints! {
//!         name: String { minLength: 3 },
//!         age: Number { minValue: 18 },
//!     },
//! );
//!
//! let person = Value::from(Record::new("Person").with("name", "Al").with("age", 15));
//! let err = Validator::new(registry).validate(&person).unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Validation failed for 'minValue','minLength' constraint(s)."
//! );
//! ```

pub mod constraints;
pub mod core;
pub mod metadata;
pub mod walker;

// Re-export commonly used types
pub use crate::constraints::{ConstraintKind, ConstraintName, ConstraintParam};
pub use crate::core::{Literal, Record, Value};
pub use crate::metadata::{MetadataProvider, MetadataRegistry, RecordMetadata};
pub use crate::walker::{validate, ConstraintError, FailureSet, Validator, ValidatorBuilder};
