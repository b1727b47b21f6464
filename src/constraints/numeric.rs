//! Numeric constraint evaluator: inclusive and exclusive bounds.

use super::name::{ConstraintName, ConstraintParam, Family};
use super::ConstraintValidation;
use crate::core::{coerce, Literal, Value};
use std::cmp::Ordering;
use stillwater::validation::Validation;

/// Evaluate numeric bounds against a field value, accumulating ALL violations.
///
/// Every parameter is checked, in declaration order. Parameters with an
/// unknown name, or a name from the string family, are skipped. A field
/// that is absent or not numeric cannot satisfy any bound.
///
/// # Example
///
/// ```rust
/// use fieldcheck::constraints::{numeric, ConstraintParam};
/// use fieldcheck::core::Value;
///
/// let params = vec![
///     ConstraintParam::new("minValue", 10),
///     ConstraintParam::new("maxValue", 5),
/// ];
///
/// let result = numeric::evaluate(&params, Some(&Value::Int(25)));
/// assert!(result.is_failure());
/// ```
pub fn evaluate(params: &[ConstraintParam], field: Option<&Value>) -> ConstraintValidation {
    let checks: Vec<ConstraintValidation> = params
        .iter()
        .filter_map(|param| match param.name.parse::<ConstraintName>() {
            Ok(name) if name.family() == Family::Numeric => Some(check(name, field, &param.value)),
            _ => {
                tracing::trace!(param = %param.name, "ignoring non-numeric constraint parameter");
                None
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn check(name: ConstraintName, field: Option<&Value>, bound: &Literal) -> ConstraintValidation {
    let ordering = coerce(field, bound).and_then(|operands| operands.ordering());

    if satisfies(name, ordering) {
        Validation::success(())
    } else {
        Validation::fail(name)
    }
}

/// `ordering` is the field value relative to the bound; unordered never passes.
fn satisfies(name: ConstraintName, ordering: Option<Ordering>) -> bool {
    let Some(ordering) = ordering else {
        return false;
    };

    match name {
        ConstraintName::MinValue => ordering != Ordering::Less,
        ConstraintName::MaxValue => ordering != Ordering::Greater,
        ConstraintName::MinValueExclusive => ordering == Ordering::Greater,
        ConstraintName::MaxValueExclusive => ordering == Ordering::Less,
        _ => true,
    }
}
