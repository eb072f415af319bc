//! Same-value equality, the default comparator for literal conditions.
//!
//! This is `Object.is` equality rather than `PartialEq`:
//!
//! - `NaN` is equal to `NaN`
//! - `+0.0` and `-0.0` are *not* equal
//! - shared handles (`Arc`, `Rc`) are equal only when they point to the same allocation
//!
//! Plain scalars and strings compare by value. Owned JSON trees have no identity
//! to compare, so `serde_json::Value` arrays and objects compare element-wise
//! with the same rules; wrap them in an `Arc` to get identity semantics.

use std::rc::Rc;
use std::sync::Arc;

/// Equality used when a condition compares a value against a literal.
pub trait SameValue {
    /// Returns `true` if `self` and `other` are the same value.
    fn same_value(&self, other: &Self) -> bool;
}

/// Free-function form of [`SameValue::same_value`].
///
/// This is the comparator an [`AdvancedCondition`](crate::AdvancedCondition)
/// falls back to when no custom `match` is configured.
#[inline]
pub fn same_value<T: SameValue + ?Sized>(left: &T, right: &T) -> bool {
    left.same_value(right)
}

macro_rules! same_value_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SameValue for $ty {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_value_by_eq!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String,
);

macro_rules! same_value_float {
    ($($ty:ty),*) => {
        $(
            impl SameValue for $ty {
                #[inline]
                fn same_value(&self, other: &Self) -> bool {
                    if self.is_nan() && other.is_nan() {
                        return true;
                    }
                    self == other && self.is_sign_negative() == other.is_sign_negative()
                }
            }
        )*
    };
}

same_value_float!(f32, f64);

impl<T: SameValue + ?Sized> SameValue for &T {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(*other)
    }
}

impl<T: SameValue + ?Sized> SameValue for Box<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        (**self).same_value(&**other)
    }
}

impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(left), Some(right)) => left.same_value(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: ?Sized> SameValue for Arc<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameValue for Rc<T> {
    #[inline]
    fn same_value(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

#[cfg(feature = "json")]
impl SameValue for serde_json::Value {
    fn same_value(&self, other: &Self) -> bool {
        use serde_json::Value;

        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(left), Value::Bool(right)) => left == right,
            (Value::String(left), Value::String(right)) => left == right,
            (Value::Number(left), Value::Number(right)) => same_json_number(left, right),
            (Value::Array(left), Value::Array(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(l, r)| l.same_value(r))
            }
            (Value::Object(left), Value::Object(right)) => {
                left.len() == right.len()
                    && left
                        .iter()
                        .all(|(key, l)| right.get(key).is_some_and(|r| l.same_value(r)))
            }
            _ => false,
        }
    }
}

/// `1` and `1.0` are one number, as they would be in the JSON source.
#[cfg(feature = "json")]
fn same_json_number(left: &serde_json::Number, right: &serde_json::Number) -> bool {
    if let (Some(l), Some(r)) = (left.as_i64(), right.as_i64()) {
        return l == r;
    }
    if let (Some(l), Some(r)) = (left.as_u64(), right.as_u64()) {
        return l == r;
    }
    match (left.as_f64(), right.as_f64()) {
        (Some(l), Some(r)) => l.same_value(&r),
        _ => false,
    }
}
