//! List-like containers: [`ArrayList`], [`Queue`], [`Stack`] and [`Set`].
//!
//! All four keep their elements in a contiguous buffer and share the positional operations of
//! [`List`]. They differ only in which end they serve elements from, and in whether duplicates
//! are accepted.

mod array_list;
mod queue;
mod set;
mod stack;

pub use array_list::*;
pub use queue::*;
pub use set::*;
pub use stack::*;

use std::fmt::Display;
use std::ops::Range;

use super::{Collection, IndexOutOfBounds, sort};
use crate::lang::text::Text;
use crate::lang::{InvalidArgument, Order};

mod sealed {
    use crate::collections::Collection;

    /// Access to the backing buffer of a list-like container.
    pub trait Store: Collection {
        fn store(&self) -> &Vec<Self::Item>;

        fn store_mut(&mut self) -> &mut Vec<Self::Item>;

        /// Wraps a buffer without checking it; callers uphold the container's invariants.
        fn from_store(store: Vec<Self::Item>) -> Self;

        /// Returns false if adding `element` would break the container's invariants.
        fn accepts(&self, _element: &Self::Item) -> bool {
            true
        }
    }
}

/// An ordered, index-addressable [`Collection`].
///
/// Indices are zero-based. Insertions that would break a container's invariant, such as adding a
/// duplicate to a [`Set`], are silently skipped.
pub trait List: Collection + sealed::Store {
    /// Appends `element` at the end of the list.
    fn add(&mut self, element: Self::Item) {
        if self.accepts(&element) {
            self.store_mut().push(element);
        }
    }

    /// Inserts `element` at `index`, shifting all later elements back. Inserting at
    /// [`size`](Collection::size) appends.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is greater than the size of the list. The list is
    /// left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::collections::{ArrayList, Collection, List};
    /// let mut list = ArrayList::from(vec![1, 3]);
    /// list.add_at(2, 1).unwrap();
    /// list.add_at(4, 3).unwrap();
    /// assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    /// assert!(list.add_at(5, 9).is_err());
    /// ```
    fn add_at(&mut self, element: Self::Item, index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.size();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        if self.accepts(&element) {
            self.store_mut().insert(index, element);
        }
        Ok(())
    }

    /// Appends every element of `elements`, in order.
    fn add_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for element in elements {
            self.add(element);
        }
    }

    /// Returns the element at `index`, or [`None`] if the index is out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item> {
        self.store().get(index)
    }

    /// Removes the first element equal to `element` and returns it.
    fn remove(&mut self, element: &Self::Item) -> Option<Self::Item>
    where
        Self::Item: PartialEq,
    {
        let index = self.index_of(element)?;
        Some(self.store_mut().remove(index))
    }

    /// Removes the first occurrence of each of `elements`.
    fn remove_all<'a, I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = &'a Self::Item>,
        Self::Item: PartialEq + 'a,
    {
        for element in elements {
            self.remove(element);
        }
    }

    /// Returns the index of the first element equal to `element`.
    fn index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.find_index(|item| item == element)
    }

    /// Returns the index of the first element matching `predicate`.
    fn find_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.store().iter().position(predicate)
    }

    /// Returns the index of the first element matching `predicate` for the given `query`.
    fn find_index_by_query<Q, F>(&self, query: &Q, mut predicate: F) -> Option<usize>
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q) -> bool,
    {
        self.find_index(|item| predicate(item, query))
    }

    /// Returns the index of the last element matching `predicate`.
    fn find_last_index<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.store().iter().rposition(predicate)
    }

    /// Returns the index of the last element matching `predicate` for the given `query`.
    fn find_last_index_by_query<Q, F>(&self, query: &Q, mut predicate: F) -> Option<usize>
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q) -> bool,
    {
        self.find_last_index(|item| predicate(item, query))
    }

    /// Sorts the list in natural order. The sort is stable.
    fn sort(&mut self)
    where
        Self::Item: Ord,
    {
        self.store_mut().sort();
    }

    /// Sorts the list using `order`. The sort is stable.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `order` can't compare the elements, see
    /// [`ComparableComparator`](crate::lang::ComparableComparator). The list is left unchanged.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::collections::{ArrayList, Collection, List};
    /// # use lang_extension::lang::Order;
    /// let mut list = ArrayList::from(vec!["pear", "fig", "banana"]);
    /// list.sort_by(Order::by(|a: &&str, b: &&str| a.len().cmp(&b.len()))).unwrap();
    /// assert_eq!(list.to_vec(), vec!["fig", "pear", "banana"]);
    /// ```
    fn sort_by(&mut self, order: Order<'_, Self::Item>) -> Result<(), InvalidArgument> {
        sort::sort_entries(self.store_mut(), |element| element, &order)
    }

    /// Reverses the order of the elements in place.
    fn reverse(&mut self) {
        self.store_mut().reverse();
    }

    /// Returns a copy of a section of the list, leaving the list unchanged.
    ///
    /// A negative `offset` counts from the end. `length` limits the number of elements taken; a
    /// negative `length` stops that many elements before the end and [`None`] takes everything
    /// after `offset`. Out of range values are clamped, so the result may be empty.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::collections::{ArrayList, Collection, List};
    /// let list = ArrayList::from(vec!['a', 'b', 'c', 'd', 'e']);
    /// assert_eq!(list.slice(2, None).to_vec(), vec!['c', 'd', 'e']);
    /// assert_eq!(list.slice(-2, Some(1)).to_vec(), vec!['d']);
    /// assert_eq!(list.slice(0, Some(3)).to_vec(), vec!['a', 'b', 'c']);
    /// ```
    fn slice(&self, offset: isize, length: Option<isize>) -> Self
    where
        Self::Item: Clone,
    {
        let range = section(self.size(), offset, length);
        Self::from_store(self.store()[range].to_vec())
    }

    /// Removes a section of the list and puts `replacement` in its place, returning the removed
    /// elements. `offset` and `length` select the section the same way as for
    /// [`slice`](List::slice).
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::collections::{ArrayList, Collection, List};
    /// let mut list = ArrayList::from(vec!["red", "green", "blue", "yellow"]);
    /// let removed = list.splice(1, Some(-1), ["orange"]);
    /// assert_eq!(list.to_vec(), vec!["red", "orange", "yellow"]);
    /// assert_eq!(removed.to_vec(), vec!["green", "blue"]);
    /// ```
    fn splice<I>(&mut self, offset: isize, length: Option<isize>, replacement: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
    {
        let range = section(self.size(), offset, length);
        let mut at = range.start;
        let removed = self.store_mut().drain(range).collect();

        for element in replacement {
            if self.accepts(&element) {
                self.store_mut().insert(at, element);
                at += 1;
            }
        }

        Self::from_store(removed)
    }

    /// Joins the string form of all elements, separated by `glue`.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::collections::{ArrayList, List};
    /// let list = ArrayList::from(vec![1, 2, 3]);
    /// assert_eq!(list.join(", "), "1, 2, 3");
    /// ```
    fn join(&self, glue: &str) -> Text
    where
        Self::Item: Display,
    {
        let parts: Vec<String> = self.store().iter().map(ToString::to_string).collect();
        Text::new(parts.join(glue))
    }
}

/// Resolves an `offset` and `length` against a list of `len` elements.
fn section(len: usize, offset: isize, length: Option<isize>) -> Range<usize> {
    let start = if offset < 0 {
        len.saturating_sub(offset.unsigned_abs())
    } else {
        offset.unsigned_abs().min(len)
    };

    let end = match length {
        None => len,
        Some(length) if length < 0 => len.saturating_sub(length.unsigned_abs()).max(start),
        Some(length) => start.saturating_add(length.unsigned_abs()).min(len),
    };

    start..end
}

mod tests;
