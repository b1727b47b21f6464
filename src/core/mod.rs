//! Core value types and coercion.
//!
//! This module contains the data the validator reads:
//! - Field values as a closed tagged union
//! - Records with an optional declared type
//! - Numeric coercion applying the widening rule
//!
//! Everything here is pure; the validator never mutates a record.

mod coerce;
mod record;
mod value;

pub use coerce::{coerce, Operands};
pub use record::Record;
pub use value::{Literal, Value};
