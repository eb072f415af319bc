//! Conditions that are plain data.
//!
//! [`SerializableCondition`] mirrors [`ValueCondition`] without the
//! function-valued parts: no predicates and no custom comparator. Any serde
//! format can round-trip it. The serialized form is internally tagged on the
//! `"condition"` field, which is also the discriminant [`is_condition_value`]
//! looks for:
//!
//! ```json
//! {
//!   "condition": "advanced",
//!   "include": [{ "condition": "literal", "value": 1 }],
//!   "exclude": { "condition": "literal", "value": 2 }
//! }
//! ```
//!
//! `include`/`exclude` accept a single entry or a list, and default to empty.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::classify::{Classification, ConditionKind};
use crate::condition::{
    AdvancedCondition, ConditionSpec, IncludeSpec, ValueCondition, create_condition,
};
use crate::error::ConditionError;
use crate::same_value::SameValue;

/// Name of the discriminant field in serialized conditions.
pub const CONDITION_TAG: &str = "condition";

/// Serialized discriminant of an advanced condition.
pub const ADVANCED_TAG: &str = "advanced";

/// A [`ValueCondition`] with no function-valued members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum SerializableCondition<T> {
    /// Matches values that are [`SameValue`] as `value`.
    Literal { value: T },
    /// Matches if any live entry matches.
    List { conditions: Vec<SerializableCondition<T>> },
    /// A switched-off alternative.
    Disabled,
    /// Include/exclude rules compared with [`same_value`](crate::same_value()).
    Advanced(SerializableAdvancedCondition<T>),
}

/// Include/exclude condition restricted to literals and nested serializable conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SerializableAdvancedCondition<T> {
    /// Entries a value may match. Empty means no include constraint.
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub include: Vec<SerializableCondition<T>>,

    /// Entries a value must not match.
    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub exclude: Vec<SerializableCondition<T>>,
}

impl<T> Default for SerializableAdvancedCondition<T> {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl<T> SerializableAdvancedCondition<T> {
    /// Create a condition from include and exclude entries.
    pub fn new(
        include: Vec<SerializableCondition<T>>,
        exclude: Vec<SerializableCondition<T>>,
    ) -> Self {
        Self { include, exclude }
    }

    /// Condition including exactly the given literals.
    pub fn including(values: impl IntoIterator<Item = T>) -> Self {
        Self::new(
            values.into_iter().map(SerializableCondition::literal).collect(),
            Vec::new(),
        )
    }

    /// Adds literal exclude entries (builder-style, consuming).
    #[must_use]
    pub fn excluding(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.exclude
            .extend(values.into_iter().map(SerializableCondition::literal));
        self
    }
}

fn one_or_many<'de, D, T>(
    deserializer: D,
) -> Result<Vec<SerializableCondition<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<SerializableCondition<T>>),
        One(SerializableCondition<T>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(entries) => entries,
        OneOrMany::One(entry) => vec![entry],
    })
}

impl<T> SerializableCondition<T> {
    /// Literal condition.
    pub fn literal(value: T) -> Self {
        Self::Literal { value }
    }

    /// List of alternatives.
    pub fn list(conditions: impl IntoIterator<Item = SerializableCondition<T>>) -> Self {
        Self::List {
            conditions: conditions.into_iter().collect(),
        }
    }

    /// Returns `true` for the [`Advanced`](Self::Advanced) variant.
    pub fn is_condition(&self) -> bool {
        matches!(self, Self::Advanced(_))
    }

    /// Reports the shape of this condition, as [`classify`](crate::classify()) does.
    pub fn classify(&self) -> Classification {
        match self {
            Self::Literal { .. } => ConditionKind::Value.into(),
            Self::List { conditions } => {
                Classification::List(conditions.iter().map(Self::classify).collect())
            }
            Self::Disabled => ConditionKind::Disabled.into(),
            Self::Advanced(_) => ConditionKind::Advanced.into(),
        }
    }

    /// Converts into an evaluable condition.
    pub fn into_condition(self) -> ValueCondition<T>
    where
        T: SameValue + 'static,
    {
        self.into()
    }

    /// Checks `value` against this condition.
    ///
    /// Converts a clone of the condition on every call; convert once with
    /// [`into_condition`](Self::into_condition) when matching repeatedly.
    pub fn matches(&self, value: &T) -> bool
    where
        T: SameValue + Clone + 'static,
    {
        self.clone().into_condition().matches(value)
    }
}

impl<T: SameValue + 'static> From<SerializableCondition<T>> for ValueCondition<T> {
    fn from(condition: SerializableCondition<T>) -> Self {
        match condition {
            SerializableCondition::Literal { value } => Self::Literal(value),
            SerializableCondition::List { conditions } => {
                Self::List(conditions.into_iter().map(Self::from).collect())
            }
            SerializableCondition::Disabled => Self::Disabled,
            SerializableCondition::Advanced(advanced) => Self::Advanced(advanced.into()),
        }
    }
}

impl<T: SameValue + 'static> From<SerializableAdvancedCondition<T>> for AdvancedCondition<T> {
    fn from(condition: SerializableAdvancedCondition<T>) -> Self {
        let convert = |entries: Vec<SerializableCondition<T>>| {
            IncludeSpec::Many(entries.into_iter().map(ValueCondition::from).collect())
        };

        create_condition(ConditionSpec {
            include: Some(convert(condition.include)),
            exclude: Some(convert(condition.exclude)),
            matcher: None,
        })
    }
}

impl<T: Clone> ValueCondition<T> {
    /// Converts into plain data.
    ///
    /// Fails on the first predicate or custom comparator, reporting its
    /// location as a path such as `$[2].include[0]`.
    pub fn to_serializable(&self) -> Result<SerializableCondition<T>, ConditionError> {
        to_serializable_at(self, "$")
    }
}

fn to_serializable_at<T: Clone>(
    condition: &ValueCondition<T>,
    path: &str,
) -> Result<SerializableCondition<T>, ConditionError> {
    match condition {
        ValueCondition::Literal(value) => Ok(SerializableCondition::literal(value.clone())),
        ValueCondition::Disabled => Ok(SerializableCondition::Disabled),
        ValueCondition::Predicate(_) => Err(reject(path, "predicate")),
        ValueCondition::List(entries) => Ok(SerializableCondition::List {
            conditions: entries_at(entries, path)?,
        }),
        ValueCondition::Advanced(advanced) => {
            if advanced.has_custom_comparator() {
                return Err(reject(path, "custom comparator"));
            }
            Ok(SerializableCondition::Advanced(SerializableAdvancedCondition {
                include: entries_at(advanced.include(), &format!("{path}.include"))?,
                exclude: entries_at(advanced.exclude(), &format!("{path}.exclude"))?,
            }))
        }
    }
}

fn entries_at<T: Clone>(
    entries: &[ValueCondition<T>],
    path: &str,
) -> Result<Vec<SerializableCondition<T>>, ConditionError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| to_serializable_at(entry, &format!("{path}[{index}]")))
        .collect()
}

fn reject(path: &str, reason: &str) -> ConditionError {
    debug!(path, reason, "Condition holds a function and cannot be serialized");
    ConditionError::not_serializable(path, reason)
}

#[cfg(feature = "json")]
impl<T: Serialize> SerializableCondition<T> {
    /// Writes the condition as a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value, ConditionError> {
        serde_json::to_value(self).map_err(|e| ConditionError::SerializationError {
            error: e.to_string(),
        })
    }
}

#[cfg(feature = "json")]
impl<T: serde::de::DeserializeOwned> SerializableCondition<T> {
    /// Reads a condition from a JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConditionError> {
        serde_json::from_value(value).map_err(|e| ConditionError::DeserializationError {
            error: e.to_string(),
        })
    }
}

/// Reports whether serialized data is an advanced condition.
///
/// True only for a JSON object whose `"condition"` field is `"advanced"`. A
/// record that merely has `include`/`exclude`/`match` keys is not a condition.
#[cfg(feature = "json")]
#[must_use]
pub fn is_condition_value(value: &serde_json::Value) -> bool {
    value.get(CONDITION_TAG).and_then(serde_json::Value::as_str) == Some(ADVANCED_TAG)
}
