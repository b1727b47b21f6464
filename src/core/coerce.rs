//! Value coercion for numeric comparison.
//!
//! A field value and a constraint literal are brought to a common
//! representation before they are compared. Integers pair with integers;
//! anything involving a float or a decimal is compared as a decimal. Floats
//! are promoted through their shortest round-trip text, so `0.1_f64` becomes
//! exactly `0.1`. Floats a decimal cannot hold without rounding are compared
//! as `f64` instead.

use super::value::{Literal, Value};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// A field value and a constraint value in the same representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operands {
    Int(i64, i64),
    Float(f64, f64),
    Decimal(Decimal, Decimal),
}

impl Operands {
    /// Order the field value relative to the constraint value.
    ///
    /// Returns `None` when the pair is unordered (a NaN on either side).
    pub fn ordering(&self) -> Option<Ordering> {
        match self {
            Operands::Int(field, bound) => Some(field.cmp(bound)),
            Operands::Float(field, bound) => field.partial_cmp(bound),
            Operands::Decimal(field, bound) => Some(field.cmp(bound)),
        }
    }
}

/// Coerce a field value and a constraint literal to comparable operands.
///
/// Returns `None` if the field is absent or not numeric.
///
/// # Example
///
/// ```rust
/// use fieldcheck::core::{coerce, Literal, Operands, Value};
/// use rust_decimal::Decimal;
/// use std::cmp::Ordering;
/// use std::str::FromStr;
///
/// let bound = Literal::Decimal(Decimal::from_str("0.1").unwrap());
/// let operands = coerce(Some(&Value::Float(0.1)), &bound).unwrap();
///
/// assert!(matches!(operands, Operands::Decimal(_, _)));
/// assert_eq!(operands.ordering(), Some(Ordering::Equal));
/// ```
pub fn coerce(field: Option<&Value>, bound: &Literal) -> Option<Operands> {
    let field = numeric_literal(field?)?;
    widen(field, *bound)
}

fn numeric_literal(value: &Value) -> Option<Literal> {
    match value {
        Value::Int(n) => Some(Literal::Int(*n)),
        Value::Float(f) => Some(Literal::Float(*f)),
        Value::Decimal(d) => Some(Literal::Decimal(*d)),
        _ => None,
    }
}

fn widen(field: Literal, bound: Literal) -> Option<Operands> {
    match (field, bound) {
        (Literal::Int(a), Literal::Int(b)) => Some(Operands::Int(a, b)),
        (Literal::Int(a), Literal::Float(b)) => match float_to_decimal(b) {
            Some(b) => Some(Operands::Decimal(Decimal::from(a), b)),
            None => Some(Operands::Float(a as f64, b)),
        },
        (Literal::Float(a), Literal::Int(b)) => match float_to_decimal(a) {
            Some(a) => Some(Operands::Decimal(a, Decimal::from(b))),
            None => Some(Operands::Float(a, b as f64)),
        },
        (Literal::Float(a), Literal::Float(b)) => Some(Operands::Float(a, b)),
        (Literal::Decimal(a), Literal::Decimal(b)) => Some(Operands::Decimal(a, b)),
        (Literal::Decimal(a), Literal::Int(b)) => Some(Operands::Decimal(a, Decimal::from(b))),
        (Literal::Int(a), Literal::Decimal(b)) => Some(Operands::Decimal(Decimal::from(a), b)),
        (Literal::Decimal(a), Literal::Float(b)) => match float_to_decimal(b) {
            Some(b) => Some(Operands::Decimal(a, b)),
            None => Some(Operands::Float(a.to_f64()?, b)),
        },
        (Literal::Float(a), Literal::Decimal(b)) => match float_to_decimal(a) {
            Some(a) => Some(Operands::Decimal(a, b)),
            None => Some(Operands::Float(a, b.to_f64()?)),
        },
    }
}

/// Exact decimal for the shortest text that round-trips to `value`.
///
/// `None` for NaN, infinities, magnitudes a `Decimal` cannot hold, and
/// values needing more fractional digits than a `Decimal` keeps.
fn float_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str_exact(&value.to_string()).ok()
}
