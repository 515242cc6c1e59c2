use std::any;
use std::cmp::Ordering;

use super::{AsComparable, InvalidArgument};

/// An object that orders two values from the outside.
///
/// Implementations are expected to describe a total order. This isn't checked, but sorting with an
/// inconsistent comparator produces an unspecified (though memory safe) arrangement.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`, returning [`Less`](Ordering::Less) if `a` comes first.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if the comparator can't handle one of the values.
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, InvalidArgument>;
}

/// Adapts values implementing [`Comparable`](super::Comparable) to the [`Comparator`] contract by
/// delegating to `a.compare_to(b)`.
///
/// Only the first argument is checked for the capability: comparing a comparable `a` against a
/// `b` that isn't comparable still succeeds, as `a` decides how to treat `b`.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use lang_extension::lang::{ComparableComparator, Comparator};
/// assert_eq!(ComparableComparator.compare(&1, &2), Ok(Ordering::Less));
/// assert_eq!(ComparableComparator.compare(&'b', &'a'), Ok(Ordering::Greater));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComparableComparator;

impl<T: AsComparable> Comparator<T> for ComparableComparator {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, InvalidArgument> {
        match a.as_comparable() {
            Some(comparable) => Ok(comparable.compare_to(b)),
            None => {
                let type_name = any::type_name::<T>();
                tracing::debug!(type_name, "rejected value without the Comparable capability");
                Err(InvalidArgument { type_name })
            },
        }
    }
}

/// Compares anything that can be viewed as a [`str`] lexically, byte by byte.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StringComparator;

impl<T: AsRef<str> + ?Sized> Comparator<T> for StringComparator {
    fn compare(&self, a: &T, b: &T) -> Result<Ordering, InvalidArgument> {
        Ok(a.as_ref().cmp(b.as_ref()))
    }
}
