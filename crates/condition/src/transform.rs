//! Values that may instead be computed from arguments.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use indexmap::IndexMap;

/// Either a ready value or a function producing one from `A`.
pub enum MaybeTransformer<T, A = ()> {
    /// A fixed value.
    Value(T),
    /// Computes the value from the arguments.
    Transformer(Arc<dyn Fn(&A) -> T + Send + Sync>),
}

impl<T, A> MaybeTransformer<T, A> {
    /// Wraps a function.
    pub fn from_fn<F>(transformer: F) -> Self
    where
        F: Fn(&A) -> T + Send + Sync + 'static,
    {
        Self::Transformer(Arc::new(transformer))
    }

    /// Whether the value is computed.
    pub fn is_transformer(&self) -> bool {
        matches!(self, Self::Transformer(_))
    }

    /// Produces the value: clones a fixed value, or calls the function with `args`.
    pub fn resolve(&self, args: &A) -> T
    where
        T: Clone,
    {
        match self {
            Self::Value(value) => value.clone(),
            Self::Transformer(transformer) => transformer(args),
        }
    }
}

impl<T, A> From<T> for MaybeTransformer<T, A> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Clone, A> Clone for MaybeTransformer<T, A> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Transformer(transformer) => Self::Transformer(Arc::clone(transformer)),
        }
    }
}

impl<T: fmt::Debug, A> fmt::Debug for MaybeTransformer<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Transformer(_) => f.write_str("Transformer(<fn>)"),
        }
    }
}

/// Resolves every entry of a record with the same arguments, keeping key order.
pub fn resolve_all<'a, K, T, A, I>(record: I, args: &A) -> IndexMap<K, T>
where
    K: Hash + Eq + Clone + 'a,
    T: Clone + 'a,
    A: 'a,
    I: IntoIterator<Item = (&'a K, &'a MaybeTransformer<T, A>)>,
{
    record
        .into_iter()
        .map(|(key, entry)| (key.clone(), entry.resolve(args)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_values_are_cloned() {
        let fixed: MaybeTransformer<u32, String> = 1.into();
        assert!(!fixed.is_transformer());
        assert_eq!(fixed.resolve(&"ignored".to_string()), 1);
    }

    #[test]
    fn transformers_receive_args() {
        let length = MaybeTransformer::from_fn(|s: &String| s.len());
        assert!(length.is_transformer());
        assert_eq!(length.resolve(&"four".to_string()), 4);
    }

    #[test]
    fn resolve_all_keeps_declaration_order() {
        let mut record: IndexMap<&str, MaybeTransformer<String, String>> = IndexMap::new();
        record.insert("b", MaybeTransformer::from_fn(|s: &String| format!("{s}2")));
        record.insert("a", "fixed".to_string().into());

        let resolved = resolve_all(&record, &"x".to_string());
        assert_eq!(
            resolved.into_iter().collect::<Vec<_>>(),
            vec![("b", "x2".to_string()), ("a", "fixed".to_string())]
        );
    }

    #[test]
    fn debug_hides_closures() {
        let t: MaybeTransformer<i32> = MaybeTransformer::from_fn(|_: &()| 3);
        assert_eq!(format!("{t:?}"), "Transformer(<fn>)");
        assert_eq!(t.resolve(&()), 3);
    }
}
