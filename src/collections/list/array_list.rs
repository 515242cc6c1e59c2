use std::ops::Index;
use std::slice::Iter;
use std::vec::IntoIter;

use super::List;
use super::sealed::Store;
use crate::collections::{Collection, IndexOutOfBounds};
use crate::util::panic::Throw;

/// A growable list of elements, in insertion order.
///
/// # Examples
/// ```
/// # use lang_extension::collections::{ArrayList, Collection, List};
/// let mut list = ArrayList::new();
/// list.add("one");
/// list.add_all(["two", "three"]);
///
/// assert_eq!(list.size(), 3);
/// assert_eq!(list[1], "two");
/// assert_eq!(list.index_of(&"three"), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub const fn new() -> ArrayList<T> {
        ArrayList { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> ArrayList<T> {
        ArrayList {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new list by applying `f` to every element.
    pub fn map<U, F>(&self, f: F) -> ArrayList<U>
    where
        F: FnMut(&T) -> U,
    {
        ArrayList {
            items: self.items.iter().map(f).collect(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Collection for ArrayList<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries(&self) -> impl DoubleEndedIterator<Item = (usize, &T)> {
        self.items.iter().enumerate()
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn filter<F>(&self, mut predicate: F) -> ArrayList<T>
    where
        F: FnMut(&T) -> bool,
        Self: Clone,
    {
        let mut filtered = self.clone();
        filtered.items.retain(|item| predicate(item));
        filtered
    }
}

impl<T> Store for ArrayList<T> {
    fn store(&self) -> &Vec<T> {
        &self.items
    }

    fn store_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn from_store(store: Vec<T>) -> ArrayList<T> {
        ArrayList { items: store }
    }
}

impl<T> List for ArrayList<T> {}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of bounds. Use [`List::get`] for a checked lookup.
    fn index(&self, index: usize) -> &T {
        self.items
            .get(index)
            .ok_or(IndexOutOfBounds { index, len: self.items.len() })
            .throw()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        ArrayList::new()
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(items: Vec<T>) -> Self {
        ArrayList { items }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
