//! # value-condition
//!
//! Declarative conditions on values, and the matcher that evaluates them.
//!
//! A [`ValueCondition<T>`] is one of:
//!
//! - a literal `T`, compared with [`same_value()`] (`Object.is` semantics)
//! - a predicate `Fn(&T) -> bool`
//! - a list of alternatives, any of which may match
//! - `Disabled`, a switched-off list entry
//! - an [`AdvancedCondition`] with include/exclude entries and a comparator
//!
//! ## Quick Start
//!
//! ```rust
//! use value_condition::prelude::*;
//!
//! // Anything but 0 and negative numbers.
//! let condition = ValueCondition::from(
//!     AdvancedCondition::builder()
//!         .exclude_value(0)
//!         .exclude_when(|v: &i64| *v < 0)
//!         .build(),
//! );
//!
//! assert!(value_condition_matches(&5, Some(&condition)));
//! assert!(!value_condition_matches(&0, Some(&condition)));
//! assert!(!value_condition_matches(&-3, Some(&condition)));
//! ```
//!
//! Conditions without functions can be stored as data through
//! [`SerializableCondition`].

pub mod classify;
pub mod condition;
pub mod error;
pub mod matcher;
pub mod same_value;
pub mod serializable;
pub mod transform;

pub use classify::{Classification, ConditionKind, classify};
pub use condition::{
    AdvancedCondition, AdvancedConditionBuilder, Comparator, ConditionSpec, IncludeSpec, Predicate,
    ValueCondition, create_condition, is_condition,
};
pub use error::ConditionError;
pub use matcher::value_condition_matches;
pub use same_value::{SameValue, same_value};
#[cfg(feature = "json")]
pub use serializable::is_condition_value;
pub use serializable::{SerializableAdvancedCondition, SerializableCondition};
pub use transform::{MaybeTransformer, resolve_all};

pub mod prelude {
    pub use crate::classify::{Classification, ConditionKind, classify};
    pub use crate::condition::{
        AdvancedCondition, ConditionSpec, IncludeSpec, ValueCondition, create_condition,
        is_condition,
    };
    pub use crate::error::ConditionError;
    pub use crate::matcher::value_condition_matches;
    pub use crate::same_value::{SameValue, same_value};
    pub use crate::serializable::{SerializableAdvancedCondition, SerializableCondition};
}
