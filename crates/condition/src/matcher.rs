//! Recursive evaluation of a [`ValueCondition`] against a value.

use tracing::trace;

use crate::condition::{AdvancedCondition, ValueCondition};
use crate::same_value::SameValue;

/// Decides whether `value` satisfies `condition`.
///
/// - `None` always matches.
/// - `List` matches if any entry other than `Disabled` matches; an empty list
///   matches nothing.
/// - `Predicate` returns the predicate's answer.
/// - `Literal` compares with [`same_value`](crate::same_value()).
/// - `Disabled` never matches.
/// - `Advanced` passes when the value is not excluded and either matches an
///   include entry or there are no live include entries at all.
///
/// A panicking predicate or comparator unwinds through this call.
///
/// ```rust
/// use value_condition::{ValueCondition, value_condition_matches};
///
/// let small_or_seven = ValueCondition::list([
///     ValueCondition::predicate(|v: &i32| *v < 3),
///     ValueCondition::Literal(7),
/// ]);
///
/// assert!(value_condition_matches(&7, Some(&small_or_seven)));
/// assert!(!value_condition_matches(&5, Some(&small_or_seven)));
/// assert!(value_condition_matches(&5, None));
/// ```
pub fn value_condition_matches<T: SameValue>(
    value: &T,
    condition: Option<&ValueCondition<T>>,
) -> bool {
    let Some(condition) = condition else {
        return true;
    };

    match condition {
        ValueCondition::List(conditions) => conditions
            .iter()
            .filter(|entry| !entry.is_disabled())
            .any(|entry| value_condition_matches(value, Some(entry))),
        ValueCondition::Predicate(predicate) => predicate(value),
        ValueCondition::Literal(literal) => value.same_value(literal),
        ValueCondition::Disabled => false,
        ValueCondition::Advanced(advanced) => advanced_matches(value, advanced),
    }
}

fn advanced_matches<T: SameValue>(value: &T, condition: &AdvancedCondition<T>) -> bool {
    let live_include = condition.include().iter().filter(|e| !e.is_disabled()).count();
    let live_exclude = condition.exclude().iter().filter(|e| !e.is_disabled()).count();

    let result = if live_include == 0 {
        !any_entry_matches(value, condition.exclude(), condition)
    } else {
        any_entry_matches(value, condition.include(), condition)
            && !any_entry_matches(value, condition.exclude(), condition)
    };

    trace!(
        live_include,
        live_exclude,
        result,
        custom_comparator = condition.has_custom_comparator(),
        "Evaluated advanced value condition"
    );

    result
}

/// Literal entries go through the condition's comparator with the evaluated
/// value first; other entries are matched as standalone conditions.
fn any_entry_matches<T: SameValue>(
    value: &T,
    entries: &[ValueCondition<T>],
    condition: &AdvancedCondition<T>,
) -> bool {
    entries.iter().any(|entry| match entry {
        ValueCondition::Disabled => false,
        ValueCondition::Predicate(predicate) => predicate(value),
        ValueCondition::Literal(literal) => condition.compare(value, literal),
        nested @ (ValueCondition::List(_) | ValueCondition::Advanced(_)) => {
            value_condition_matches(value, Some(nested))
        }
    })
}
