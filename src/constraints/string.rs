//! String constraint evaluator: exact, minimum and maximum length.

use super::name::{ConstraintName, ConstraintParam, Family};
use super::ConstraintValidation;
use crate::core::Value;
use stillwater::validation::Validation;

/// Evaluate length constraints against a field value, accumulating ALL violations.
///
/// Length is counted in characters (Unicode scalar values). A field that is
/// absent or not text cannot satisfy any length constraint.
///
/// # Example
///
/// ```rust
/// use fieldcheck::constraints::{string, ConstraintParam};
/// use fieldcheck::core::Value;
///
/// let params = vec![ConstraintParam::new("minLength", 3)];
///
/// assert!(string::evaluate(&params, Some(&Value::from("Ada"))).is_success());
/// assert!(string::evaluate(&params, Some(&Value::from("Al"))).is_failure());
/// ```
pub fn evaluate(params: &[ConstraintParam], field: Option<&Value>) -> ConstraintValidation {
    let length = field
        .and_then(Value::as_text)
        .map(|text| text.chars().count());

    let checks: Vec<ConstraintValidation> = params
        .iter()
        .filter_map(|param| {
            let name = match param.name.parse::<ConstraintName>() {
                Ok(name) if name.family() == Family::Text => name,
                _ => {
                    tracing::trace!(param = %param.name, "ignoring non-string constraint parameter");
                    return None;
                }
            };
            let Some(bound) = param.value.as_int() else {
                tracing::warn!(
                    param = %param.name,
                    value = ?param.value,
                    "string length constraint declared with a non-integer value"
                );
                return None;
            };
            Some(check(name, length, bound))
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn check(name: ConstraintName, length: Option<usize>, bound: i64) -> ConstraintValidation {
    if satisfies(name, length, bound) {
        Validation::success(())
    } else {
        Validation::fail(name)
    }
}

fn satisfies(name: ConstraintName, length: Option<usize>, bound: i64) -> bool {
    let Some(length) = length.and_then(|n| i64::try_from(n).ok()) else {
        return false;
    };

    match name {
        ConstraintName::Length => length == bound,
        ConstraintName::MinLength => length >= bound,
        ConstraintName::MaxLength => length <= bound,
        _ => true,
    }
}
