//! Failure sets and the constraint violation error.

use crate::constraints::{ConstraintName, ConstraintValidation, FailureNames};
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Set of violated constraint names across a whole record graph.
///
/// Only records *which* constraints failed, not which field failed them;
/// the same constraint failing on two fields appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureSet(BTreeSet<ConstraintName>);

impl FailureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name; returns `false` if it was already present.
    pub fn insert(&mut self, name: ConstraintName) -> bool {
        self.0.insert(name)
    }

    pub fn merge(&mut self, other: FailureSet) {
        self.0.extend(other.0);
    }

    pub fn contains(&self, name: ConstraintName) -> bool {
        self.0.contains(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = ConstraintName> + '_ {
        self.0.iter().copied()
    }

    /// Declared names of the violated constraints, e.g. `["minLength", "minValue"]`.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|name| name.as_str()).collect()
    }
}

impl From<ConstraintValidation> for FailureSet {
    fn from(validation: ConstraintValidation) -> Self {
        validation.failure_names().into_iter().collect()
    }
}

impl FromIterator<ConstraintName> for FailureSet {
    fn from_iter<I: IntoIterator<Item = ConstraintName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FailureSet {
    type Item = ConstraintName;
    type IntoIter = btree_set::IntoIter<ConstraintName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for FailureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.iter().map(|name| format!("'{}'", name)).collect();
        f.write_str(&quoted.join(","))
    }
}

/// Error returned when a record graph violates one or more constraints
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConstraintError {
    #[error("Validation failed for {failed} constraint(s).")]
    Violation { failed: FailureSet },
}

impl ConstraintError {
    pub fn failed(&self) -> &FailureSet {
        match self {
            ConstraintError::Violation { failed } => failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillwater::validation::Validation;

    #[test]
    fn duplicate_names_collapse() {
        let mut set = FailureSet::new();
        assert!(set.insert(ConstraintName::MinValue));
        assert!(!set.insert(ConstraintName::MinValue));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn merge_keeps_every_name() {
        let mut left: FailureSet = [ConstraintName::MinValue, ConstraintName::Length]
            .into_iter()
            .collect();
        let right: FailureSet = [ConstraintName::Length, ConstraintName::MaxLength]
            .into_iter()
            .collect();

        left.merge(right);

        assert_eq!(left.len(), 3);
        assert!(left.contains(ConstraintName::MinValue));
        assert!(left.contains(ConstraintName::Length));
        assert!(left.contains(ConstraintName::MaxLength));
    }

    #[test]
    fn from_validation_collects_failures() {
        let success: ConstraintValidation = Validation::success(());
        assert!(FailureSet::from(success).is_empty());

        let failure = Validation::all_vec(vec![
            Validation::fail(ConstraintName::MaxValue),
            Validation::fail(ConstraintName::MaxValue),
            Validation::fail(ConstraintName::MinLength),
        ])
        .map(|_: Vec<()>| ());
        let set = FailureSet::from(failure);

        assert_eq!(set.names(), vec!["maxValue", "minLength"]);
    }

    #[test]
    fn display_quotes_each_name() {
        let set: FailureSet = [ConstraintName::MinValue, ConstraintName::MinLength]
            .into_iter()
            .collect();
        assert_eq!(set.to_string(), "'minValue','minLength'");
    }

    #[test]
    fn error_message_lists_failed_constraints() {
        let failed: FailureSet = [ConstraintName::MaxLength].into_iter().collect();
        let err = ConstraintError::Violation {
            failed: failed.clone(),
        };

        assert_eq!(
            err.to_string(),
            "Validation failed for 'maxLength' constraint(s)."
        );
        assert_eq!(err.failed(), &failed);
    }

    #[test]
    fn failure_set_serializes_as_name_list() {
        let set: FailureSet = [ConstraintName::MinValueExclusive, ConstraintName::Length]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["minValueExclusive","length"]"#);

        let parsed: FailureSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, set);
    }
}
