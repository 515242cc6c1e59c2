use std::slice::Iter;
use std::vec::IntoIter;

use super::List;
use super::sealed::Store;
use crate::collections::Collection;

/// A list without duplicates, in insertion order.
///
/// Uniqueness is decided by [`PartialEq`], so elements need neither hashing nor ordering. Adding an
/// element that is already present does nothing. Lookups are linear.
///
/// # Examples
/// ```
/// # use lang_extension::collections::{Collection, List, Set};
/// let mut set = Set::new();
/// set.add_all(["b", "a", "b", "c", "a"]);
///
/// assert_eq!(set.to_vec(), vec!["b", "a", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Set<T> {
    items: Vec<T>,
}

impl<T> Set<T> {
    pub const fn new() -> Set<T> {
        Set { items: Vec::new() }
    }
}

impl<T: PartialEq> Set<T> {
    /// Creates a new set by applying `f` to every element. Results that are equal to an earlier
    /// result are dropped, so the new set may be smaller.
    pub fn map<U, F>(&self, f: F) -> Set<U>
    where
        F: FnMut(&T) -> U,
        U: PartialEq,
    {
        self.items.iter().map(f).collect()
    }

    /// Returns true if every element of `self` is also in `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.items.iter().all(|item| other.contains(item))
    }

    /// Returns true if every element of `other` is also in `self`.
    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }
}

impl<T> Collection for Set<T> {
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

    fn filter<F>(&self, mut predicate: F) -> Set<T>
    where
        F: FnMut(&T) -> bool,
        Self: Clone,
    {
        let mut filtered = self.clone();
        filtered.items.retain(|item| predicate(item));
        filtered
    }
}

impl<T: PartialEq> Store for Set<T> {
    fn store(&self) -> &Vec<T> {
        &self.items
    }

    fn store_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn from_store(store: Vec<T>) -> Set<T> {
        Set { items: store }
    }

    fn accepts(&self, element: &T) -> bool {
        !self.items.contains(element)
    }
}

impl<T: PartialEq> List for Set<T> {}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Set::new()
    }
}

impl<T: PartialEq> From<Vec<T>> for Set<T> {
    /// Creates a set from `items`, keeping the first occurrence of each element.
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        set.add_all(iter);
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
