//! Constraint names, kind tags and declared parameters.

use crate::core::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Evaluator family a constraint belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Numeric,
    Text,
}

/// Built-in constraint parameter names.
///
/// Serialized (and displayed) using their declared names, e.g. `minValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintName {
    MinValue,
    MaxValue,
    MinValueExclusive,
    MaxValueExclusive,
    Length,
    MinLength,
    MaxLength,
}

impl ConstraintName {
    pub const ALL: [ConstraintName; 7] = [
        ConstraintName::MinValue,
        ConstraintName::MaxValue,
        ConstraintName::MinValueExclusive,
        ConstraintName::MaxValueExclusive,
        ConstraintName::Length,
        ConstraintName::MinLength,
        ConstraintName::MaxLength,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MinValue => "minValue",
            Self::MaxValue => "maxValue",
            Self::MinValueExclusive => "minValueExclusive",
            Self::MaxValueExclusive => "maxValueExclusive",
            Self::Length => "length",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::MinValue | Self::MaxValue | Self::MinValueExclusive | Self::MaxValueExclusive => {
                Family::Numeric
            }
            Self::Length | Self::MinLength | Self::MaxLength => Family::Text,
        }
    }
}

impl fmt::Display for ConstraintName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter name that is not one of the built-in constraints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown constraint '{0}'")]
pub struct UnknownConstraint(pub String);

impl FromStr for ConstraintName {
    type Err = UnknownConstraint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownConstraint(s.to_string()))
    }
}

/// Declared value-kind of a constrained field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Int,
    Float,
    Number,
    String,
}

impl ConstraintKind {
    /// Match an annotation tag (without namespace) against the known kinds.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "Number" => Some(Self::Number),
            "String" => Some(Self::String),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Number => "Number",
            Self::String => "String",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Int | Self::Float | Self::Number => Family::Numeric,
            Self::String => Family::Text,
        }
    }
}

/// One declared constraint parameter, e.g. `minValue: 18`.
///
/// The name is kept as declared so that metadata using newer
/// constraint names still loads; evaluators skip names they don't know.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintParam {
    pub name: String,
    pub value: Literal,
}

impl ConstraintParam {
    pub fn new(name: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl<N: Into<String>, L: Into<Literal>> From<(N, L)> for ConstraintParam {
    fn from((name, value): (N, L)) -> Self {
        Self::new(name, value)
    }
}
