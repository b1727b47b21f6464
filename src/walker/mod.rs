//! Recursive, metadata-driven record validation.
//!
//! This module walks a record graph, evaluates every declared constraint
//! and reports ALL violations together instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::constraints::ConstraintKind;
//! use fieldcheck::core::{Record, Value};
//! use fieldcheck::metadata::{MetadataRegistry, RecordMetadata};
//! use fieldcheck::walker::{validate, ConstraintError};
//!
//! let registry = MetadataRegistry::new().with(
//!     "Account",
//!     RecordMetadata::builder()
//!         .constrain("handle", ConstraintKind::String, [("maxLength", 8)])
//!         .build(),
//! );
//!
//! let account = Value::from(Record::new("Account").with("handle", "far-too-long"));
//!
//! match validate(&account, &registry) {
//!     Err(ConstraintError::Violation { failed }) => {
//!         assert_eq!(failed.names(), vec!["maxLength"]);
//!     }
//!     Ok(()) => panic!("expected a violation"),
//! }
//! ```

pub mod builder;
pub mod config;
pub mod validator;
pub mod violations;

pub use builder::ValidatorBuilder;
pub use config::{ConfigError, ValidatorConfig};
pub use validator::Validator;
pub use violations::{ConstraintError, FailureSet};

use crate::core::Value;
use crate::metadata::MetadataProvider;

/// Validate a value against `provider` with the default configuration.
pub fn validate<P: MetadataProvider>(value: &Value, provider: P) -> Result<(), ConstraintError> {
    Validator::new(provider).validate(value)
}
