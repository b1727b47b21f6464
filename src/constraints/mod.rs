//! Built-in constraint evaluators.
//!
//! Two independent families, each a pure function from declared
//! parameters and a field value to a [`ConstraintValidation`]:
//!
//! - [`numeric`]: `minValue`, `maxValue`, `minValueExclusive`, `maxValueExclusive`
//! - [`string`]: `length`, `minLength`, `maxLength`
//!
//! Evaluators never stop at the first failure. Every parameter is checked
//! and all violated constraint names are accumulated.

mod name;
pub mod numeric;
pub mod string;

pub use name::{ConstraintKind, ConstraintName, ConstraintParam, Family, UnknownConstraint};

use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of evaluating constraints: success, or every violated constraint name.
pub type ConstraintValidation = Validation<(), NonEmptyVec<ConstraintName>>;

/// Dispatch declared parameters to the evaluator for `kind`.
pub fn evaluate(
    kind: ConstraintKind,
    params: &[ConstraintParam],
    field: Option<&crate::core::Value>,
) -> ConstraintValidation {
    match kind.family() {
        Family::Numeric => numeric::evaluate(params, field),
        Family::Text => string::evaluate(params, field),
    }
}

/// Violated constraint names carried by a validation, in accumulation order.
pub trait FailureNames {
    fn failure_names(&self) -> Vec<ConstraintName>;
}

impl FailureNames for ConstraintValidation {
    fn failure_names(&self) -> Vec<ConstraintName> {
        match self {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(names) => names.iter().copied().collect(),
        }
    }
}
