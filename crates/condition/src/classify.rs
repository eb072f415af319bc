//! Shape introspection for conditions, without evaluating them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::ValueCondition;

/// The kind of a single, non-list condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    /// An include/exclude condition.
    Advanced,
    /// A predicate.
    Function,
    /// A literal value.
    Value,
    /// A switched-off list entry.
    Disabled,
}

impl ConditionKind {
    /// Lowercase name, as used in serialized classifications.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advanced => "advanced",
            Self::Function => "function",
            Self::Value => "value",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a condition tree.
///
/// Lists classify element by element, so the result mirrors the list nesting.
/// Serializes as a kind name or a (nested) array of kind names:
/// `["value", ["function", "disabled"], "advanced"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Classification {
    /// A single condition.
    Kind(ConditionKind),
    /// A list condition, one classification per entry.
    List(Vec<Classification>),
}

impl Classification {
    /// The kind, if this is not a list.
    #[must_use]
    pub fn kind(&self) -> Option<ConditionKind> {
        match self {
            Self::Kind(kind) => Some(*kind),
            Self::List(_) => None,
        }
    }

    /// Whether any leaf of the tree has the given kind.
    #[must_use]
    pub fn contains(&self, kind: ConditionKind) -> bool {
        match self {
            Self::Kind(own) => *own == kind,
            Self::List(entries) => entries.iter().any(|entry| entry.contains(kind)),
        }
    }
}

impl From<ConditionKind> for Classification {
    fn from(kind: ConditionKind) -> Self {
        Self::Kind(kind)
    }
}

/// Classifies `condition` as `advanced`, `function`, `value` or `disabled`,
/// recursing into lists.
///
/// Advanced conditions are leaves: their include/exclude entries are not
/// classified.
pub fn classify<T>(condition: &ValueCondition<T>) -> Classification {
    match condition {
        ValueCondition::Advanced(_) => ConditionKind::Advanced.into(),
        ValueCondition::Predicate(_) => ConditionKind::Function.into(),
        ValueCondition::Literal(_) => ConditionKind::Value.into(),
        ValueCondition::Disabled => ConditionKind::Disabled.into(),
        ValueCondition::List(entries) => {
            Classification::List(entries.iter().map(classify).collect())
        }
    }
}
