use std::cmp::Ordering;

/// A value that can order itself against another value.
///
/// `Rhs` defaults to `Self`, which covers the common case of comparing two values of the same type.
/// The trait is object safe for a given `Rhs`, so it can be handed out as
/// `&dyn Comparable<Rhs>`.
pub trait Comparable<Rhs: ?Sized = Self> {
    /// Returns the position of `self` relative to `other`: [`Less`](Ordering::Less) if `self`
    /// comes first.
    fn compare_to(&self, other: &Rhs) -> Ordering;
}

/// Runtime check for the [`Comparable`] capability.
///
/// Rust resolves trait bounds at compile time, but some containers hold values where only a few
/// variants can order themselves. Implementors return `Some(self)` when they can and keep the
/// default `None` otherwise.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use lang_extension::lang::{AsComparable, Comparable};
/// struct Version(u32);
///
/// impl Comparable for Version {
///     fn compare_to(&self, other: &Self) -> Ordering {
///         self.0.cmp(&other.0)
///     }
/// }
///
/// impl AsComparable for Version {
///     fn as_comparable(&self) -> Option<&dyn Comparable<Self>> {
///         Some(self)
///     }
/// }
///
/// struct Opaque;
///
/// impl AsComparable for Opaque {}
///
/// assert!(Version(1).as_comparable().is_some());
/// assert!(Opaque.as_comparable().is_none());
/// ```
pub trait AsComparable {
    fn as_comparable(&self) -> Option<&dyn Comparable<Self>> {
        None
    }
}

macro_rules! natural_comparable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Comparable for $ty {
                fn compare_to(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }

            impl AsComparable for $ty {
                fn as_comparable(&self) -> Option<&dyn Comparable<Self>> {
                    Some(self)
                }
            }
        )*
    };
}

natural_comparable!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    char, bool, String,
);
