//! The condition model: what a caller can say about an acceptable value.

use std::fmt;
use std::sync::Arc;

use crate::classify::{Classification, classify};
use crate::matcher::value_condition_matches;
use crate::same_value::SameValue;

/// A single-argument boolean test.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// A two-argument equality test, called as `comparator(value, entry)`.
pub type Comparator<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// A condition on a value of type `T`.
///
/// The variants form a closed set, so a `Literal` holding a record that happens
/// to have `include`/`exclude` fields is never confused with an
/// [`Advanced`](Self::Advanced) condition.
///
/// The absence of a condition is expressed as `None` at the call site of
/// [`value_condition_matches`], and always matches.
pub enum ValueCondition<T> {
    /// Matches values that are [`SameValue`] as the literal.
    Literal(T),
    /// Matches values the predicate accepts.
    Predicate(Predicate<T>),
    /// Matches if any live entry matches. An empty list matches nothing.
    List(Vec<ValueCondition<T>>),
    /// A switched-off alternative. Skipped wherever it appears in a list.
    ///
    /// This is a dedicated variant, not a literal `false`, so that
    /// `ValueCondition<bool>` can still carry `Literal(false)`.
    Disabled,
    /// Include/exclude rules with a configurable comparator.
    Advanced(AdvancedCondition<T>),
}

impl<T> ValueCondition<T> {
    /// Literal condition.
    pub fn literal(value: T) -> Self {
        Self::Literal(value)
    }

    /// Predicate condition.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// List of alternatives.
    pub fn list(conditions: impl IntoIterator<Item = ValueCondition<T>>) -> Self {
        Self::List(conditions.into_iter().collect())
    }

    /// Advanced condition built from a [`ConditionSpec`].
    pub fn advanced(spec: ConditionSpec<T>) -> Self
    where
        T: SameValue + 'static,
    {
        Self::Advanced(create_condition(spec))
    }

    /// Returns `true` for the [`Advanced`](Self::Advanced) variant.
    pub fn is_condition(&self) -> bool {
        matches!(self, Self::Advanced(_))
    }

    /// Returns `true` for the [`Disabled`](Self::Disabled) variant.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }

    /// Checks `value` against this condition.
    pub fn matches(&self, value: &T) -> bool
    where
        T: SameValue,
    {
        value_condition_matches(value, Some(self))
    }

    /// Reports the shape of this condition. See [`classify`].
    pub fn classify(&self) -> Classification {
        classify(self)
    }
}

impl<T: Clone> Clone for ValueCondition<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Literal(value) => Self::Literal(value.clone()),
            Self::Predicate(predicate) => Self::Predicate(Arc::clone(predicate)),
            Self::List(conditions) => Self::List(conditions.clone()),
            Self::Disabled => Self::Disabled,
            Self::Advanced(advanced) => Self::Advanced(advanced.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ValueCondition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Predicate(_) => f.write_str("Predicate(<fn>)"),
            Self::List(conditions) => f.debug_tuple("List").field(conditions).finish(),
            Self::Disabled => f.write_str("Disabled"),
            Self::Advanced(advanced) => f.debug_tuple("Advanced").field(advanced).finish(),
        }
    }
}

impl<T> From<AdvancedCondition<T>> for ValueCondition<T> {
    fn from(advanced: AdvancedCondition<T>) -> Self {
        Self::Advanced(advanced)
    }
}

impl<T> From<Vec<ValueCondition<T>>> for ValueCondition<T> {
    fn from(conditions: Vec<ValueCondition<T>>) -> Self {
        Self::List(conditions)
    }
}

/// Reports whether `condition` is an advanced condition.
///
/// Only the enum discriminant is consulted, never the payload's shape.
pub fn is_condition<T>(condition: &ValueCondition<T>) -> bool {
    condition.is_condition()
}

// ── include / exclude ──

/// The `include` or `exclude` part of a [`ConditionSpec`].
///
/// Either one entry or a list of entries. Entries are ordinary
/// [`ValueCondition`]s: literals are compared with the advanced condition's
/// comparator, predicates are called, `Disabled` entries are skipped and
/// nested lists or advanced conditions are matched recursively.
pub enum IncludeSpec<T> {
    /// A single entry.
    One(ValueCondition<T>),
    /// Several entries, any of which may be `Disabled`.
    Many(Vec<ValueCondition<T>>),
}

impl<T> IncludeSpec<T> {
    /// Single literal entry.
    pub fn value(value: T) -> Self {
        Self::One(ValueCondition::Literal(value))
    }

    /// Single predicate entry.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::One(ValueCondition::predicate(predicate))
    }

    /// Single disabled entry.
    pub fn disabled() -> Self {
        Self::One(ValueCondition::Disabled)
    }

    /// List of literal entries.
    pub fn values(values: impl IntoIterator<Item = T>) -> Self {
        Self::Many(values.into_iter().map(ValueCondition::Literal).collect())
    }

    /// Normalizes to a list of entries.
    pub fn into_entries(self) -> Vec<ValueCondition<T>> {
        match self {
            Self::One(entry) => vec![entry],
            Self::Many(entries) => entries,
        }
    }
}

impl<T> From<ValueCondition<T>> for IncludeSpec<T> {
    fn from(entry: ValueCondition<T>) -> Self {
        Self::One(entry)
    }
}

impl<T> From<Vec<ValueCondition<T>>> for IncludeSpec<T> {
    fn from(entries: Vec<ValueCondition<T>>) -> Self {
        Self::Many(entries)
    }
}

/// Partial description of an advanced condition, completed by [`create_condition`].
pub struct ConditionSpec<T> {
    /// Values the condition accepts. Defaults to no include constraint.
    pub include: Option<IncludeSpec<T>>,
    /// Values the condition rejects. Defaults to excluding nothing.
    pub exclude: Option<IncludeSpec<T>>,
    /// Comparator for literal entries. Defaults to [`same_value`](crate::same_value()).
    pub matcher: Option<Comparator<T>>,
}

impl<T> Default for ConditionSpec<T> {
    fn default() -> Self {
        Self {
            include: None,
            exclude: None,
            matcher: None,
        }
    }
}

// ── advanced condition ──

/// Include/exclude condition with a configurable comparator.
///
/// Fields are private so every instance goes through [`create_condition`] or
/// the [builder](Self::builder) and carries its defaults.
pub struct AdvancedCondition<T> {
    include: Vec<ValueCondition<T>>,
    exclude: Vec<ValueCondition<T>>,
    comparator: Comparator<T>,
    custom_comparator: bool,
}

impl<T> AdvancedCondition<T> {
    /// Starts a builder with every field at its default.
    pub fn builder() -> AdvancedConditionBuilder<T> {
        AdvancedConditionBuilder::new()
    }

    /// Include entries, including disabled ones.
    pub fn include(&self) -> &[ValueCondition<T>] {
        &self.include
    }

    /// Exclude entries, including disabled ones.
    pub fn exclude(&self) -> &[ValueCondition<T>] {
        &self.exclude
    }

    /// The comparator used for literal entries.
    pub fn comparator(&self) -> &Comparator<T> {
        &self.comparator
    }

    /// Whether the comparator was supplied by the caller.
    pub fn has_custom_comparator(&self) -> bool {
        self.custom_comparator
    }

    /// Calls the comparator as `comparator(value, entry)`.
    #[inline]
    pub fn compare(&self, value: &T, entry: &T) -> bool {
        (self.comparator)(value, entry)
    }
}

impl<T: Clone> Clone for AdvancedCondition<T> {
    fn clone(&self) -> Self {
        Self {
            include: self.include.clone(),
            exclude: self.exclude.clone(),
            comparator: Arc::clone(&self.comparator),
            custom_comparator: self.custom_comparator,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for AdvancedCondition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvancedCondition")
            .field("include", &self.include)
            .field("exclude", &self.exclude)
            .field(
                "comparator",
                &if self.custom_comparator {
                    "<custom>"
                } else {
                    "same_value"
                },
            )
            .finish()
    }
}

/// Builds an [`AdvancedCondition`] from a [`ConditionSpec`].
///
/// Missing `include`/`exclude` become empty lists and a missing `matcher`
/// becomes [`same_value`](crate::same_value()). Single entries are normalized
/// to one-element lists.
pub fn create_condition<T>(spec: ConditionSpec<T>) -> AdvancedCondition<T>
where
    T: SameValue + 'static,
{
    let ConditionSpec {
        include,
        exclude,
        matcher,
    } = spec;

    let custom_comparator = matcher.is_some();
    let comparator = matcher.unwrap_or_else(default_comparator);

    AdvancedCondition {
        include: include.map(IncludeSpec::into_entries).unwrap_or_default(),
        exclude: exclude.map(IncludeSpec::into_entries).unwrap_or_default(),
        comparator,
        custom_comparator,
    }
}

fn default_comparator<T: SameValue + 'static>() -> Comparator<T> {
    Arc::new(|value: &T, entry: &T| value.same_value(entry))
}

/// Fluent construction of an [`AdvancedCondition`].
///
/// ```rust
/// use value_condition::{AdvancedCondition, ValueCondition};
///
/// let adult_but_not_42 = AdvancedCondition::builder()
///     .include_when(|age: &u32| *age >= 18)
///     .exclude_value(42)
///     .build();
///
/// let condition = ValueCondition::from(adult_but_not_42);
/// assert!(condition.matches(&30));
/// assert!(!condition.matches(&42));
/// assert!(!condition.matches(&12));
/// ```
pub struct AdvancedConditionBuilder<T> {
    include: Vec<ValueCondition<T>>,
    exclude: Vec<ValueCondition<T>>,
    matcher: Option<Comparator<T>>,
}

impl<T> AdvancedConditionBuilder<T> {
    /// Create a builder with no entries and the default comparator.
    pub fn new() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            matcher: None,
        }
    }

    /// Appends an include entry of any kind.
    #[must_use]
    pub fn include(mut self, entry: ValueCondition<T>) -> Self {
        self.include.push(entry);
        self
    }

    /// Appends a literal include entry.
    #[must_use]
    pub fn include_value(self, value: T) -> Self {
        self.include(ValueCondition::Literal(value))
    }

    /// Appends a predicate include entry.
    #[must_use]
    pub fn include_when<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.include(ValueCondition::predicate(predicate))
    }

    /// Appends an exclude entry of any kind.
    #[must_use]
    pub fn exclude(mut self, entry: ValueCondition<T>) -> Self {
        self.exclude.push(entry);
        self
    }

    /// Appends a literal exclude entry.
    #[must_use]
    pub fn exclude_value(self, value: T) -> Self {
        self.exclude(ValueCondition::Literal(value))
    }

    /// Appends a predicate exclude entry.
    #[must_use]
    pub fn exclude_when<F>(self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.exclude(ValueCondition::predicate(predicate))
    }

    /// Replaces the comparator used for literal entries.
    #[must_use]
    pub fn matcher<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        self.matcher = Some(Arc::new(comparator));
        self
    }

    /// Finish the condition.
    pub fn build(self) -> AdvancedCondition<T>
    where
        T: SameValue + 'static,
    {
        create_condition(ConditionSpec {
            include: Some(IncludeSpec::Many(self.include)),
            exclude: Some(IncludeSpec::Many(self.exclude)),
            matcher: self.matcher,
        })
    }
}

impl<T> Default for AdvancedConditionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
