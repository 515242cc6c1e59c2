use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use super::{Comparator, InvalidArgument};

/// The ordering used by a sort.
///
/// Sorting methods take an `Order` rather than inspecting their argument to work out what kind of
/// ordering it is. There are three kinds:
///
/// | Variant | Constructor | Source of the ordering |
/// |-|-|-|
/// | [`By`](Order::By) | [`Order::by`] | A plain comparison function. |
/// | [`Comparator`](Order::Comparator) | [`Order::comparator`] | A [`Comparator`] object. |
/// | [`Natural`](Order::Natural) | [`Order::natural`] | The element type's [`Ord`]. |
///
/// Only the comparator variant can fail; the other two always produce an ordering.
///
/// # Examples
/// ```
/// # use lang_extension::lang::{Order, StringComparator};
/// let by_len: Order<'_, &str> = Order::by(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// let lexical: Order<'_, &str> = Order::comparator(&StringComparator);
/// let natural: Order<'_, &str> = Order::natural();
///
/// assert!(by_len.compare(&"bb", &"a").unwrap().is_gt());
/// assert!(lexical.compare(&"bb", &"a").unwrap().is_gt());
/// assert!(natural.compare(&"a", &"bb").unwrap().is_lt());
/// ```
pub enum Order<'a, T> {
    By(Box<dyn Fn(&T, &T) -> Ordering + 'a>),
    Comparator(&'a dyn Comparator<T>),
    Natural(fn(&T, &T) -> Ordering),
}

impl<'a, T> Order<'a, T> {
    /// Orders with a plain comparison function.
    pub fn by<F>(compare: F) -> Order<'a, T>
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Order::By(Box::new(compare))
    }

    /// Orders with a [`Comparator`] object.
    pub fn comparator<C>(comparator: &'a C) -> Order<'a, T>
    where
        C: Comparator<T> + 'a,
    {
        Order::Comparator(comparator)
    }

    /// Orders with the element type's [`Ord`] implementation.
    pub fn natural() -> Order<'a, T>
    where
        T: Ord,
    {
        Order::Natural(<T as Ord>::cmp)
    }

    /// Compares `a` with `b` under this ordering.
    ///
    /// # Errors
    /// Only an [`Order::Comparator`] can fail, forwarding the comparator's [`InvalidArgument`].
    pub fn compare(&self, a: &T, b: &T) -> Result<Ordering, InvalidArgument> {
        match self {
            Order::By(compare) => Ok(compare(a, b)),
            Order::Comparator(comparator) => comparator.compare(a, b),
            Order::Natural(compare) => Ok(compare(a, b)),
        }
    }
}

impl<T: Ord> Default for Order<'_, T> {
    fn default() -> Self {
        Order::natural()
    }
}

impl<T> Debug for Order<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Order::By(_) => "By",
            Order::Comparator(_) => "Comparator",
            Order::Natural(_) => "Natural",
        };
        write!(f, "Order::{kind}")
    }
}
