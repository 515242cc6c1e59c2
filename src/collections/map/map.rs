use std::mem;
use std::vec::IntoIter;

use super::{Iter, Keys, Values};
use crate::collections::{Collection, sort};
use crate::lang::{InvalidArgument, Order};

/// A key-value map that remembers insertion order.
///
/// Keys are compared with [`PartialEq`], so they need neither hashing nor ordering. Overwriting a
/// key keeps its original position. Lookups are linear.
///
/// As a [`Collection`], a map holds its values: searches and [`filter`](Collection::filter) look at
/// values only, and the keys of the entries that pass a filter are kept as they are.
///
/// # Examples
/// ```
/// # use lang_extension::collections::{Collection, Map};
/// let mut ages = Map::new();
/// ages.put("ada", 36);
/// ages.put("alan", 41);
/// ages.put("ada", 37);
///
/// assert_eq!(ages.get(&"ada"), Some(&37));
/// assert_eq!(ages.keys().collect::<Vec<_>>(), vec![&"ada", &"alan"]);
/// assert_eq!(ages.key_of(&41), Some(&"alan"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Map<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Map<K, V> {
    pub const fn new() -> Map<K, V> {
        Map {
            entries: Vec::new(),
        }
    }

    /// Returns an iterator over all keys, in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.pairs() }
    }

    /// Returns an iterator over all values, in insertion order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.pairs() }
    }

    /// Returns an iterator over all key-value pairs, in insertion order.
    pub fn pairs(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Creates a new map with the same keys, applying `f` to every value.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::collections::Map;
    /// let prices = Map::from(vec![("tea", 3), ("cake", 5)]);
    /// let doubled = prices.map(|price| price * 2);
    /// assert_eq!(doubled.get(&"cake"), Some(&10));
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Map<K, U>
    where
        K: Clone,
        F: FnMut(&V) -> U,
    {
        Map {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), f(value)))
                .collect(),
        }
    }

    /// Stably sorts the entries by value, using `order`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `order` can't compare the values. The map is left unchanged.
    pub fn sort_by(&mut self, order: Order<'_, V>) -> Result<(), InvalidArgument> {
        sort::sort_entries(&mut self.entries, |(_, value)| value, &order)
    }

    /// Stably sorts the entries by key, using `order`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] if `order` can't compare the keys. The map is left unchanged.
    pub fn sort_keys(&mut self, order: Order<'_, K>) -> Result<(), InvalidArgument> {
        sort::sort_entries(&mut self.entries, |(key, _)| key, &order)
    }
}

impl<K: PartialEq, V> Map<K, V> {
    /// Associates `value` with `key`, returning the value previously stored under `key`.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.get_mut(&key) {
            Some(slot) => Some(mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            },
        }
    }

    /// Puts every pair of `entries`, in order.
    pub fn set_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.position(key)?;
        Some(&mut self.entries[index].1)
    }

    /// Returns true if a value is stored under `key`.
    pub fn has(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns the key of the first entry whose value is equal to `value`.
    pub fn key_of(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        self.entries.iter().find(|(_, item)| item == value).map(|(key, _)| key)
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(item, _)| item == key)
    }
}

impl<K, V> Collection for Map<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> {
        self.pairs()
    }

    fn size(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn filter<F>(&self, mut predicate: F) -> Map<K, V>
    where
        F: FnMut(&V) -> bool,
        Self: Clone,
    {
        let mut filtered = self.clone();
        filtered.entries.retain(|(_, value)| predicate(value));
        filtered
    }
}

impl<K, V> Default for Map<K, V> {
    fn default() -> Self {
        Map::new()
    }
}

impl<K: PartialEq, V> From<Vec<(K, V)>> for Map<K, V> {
    /// Creates a map from `entries`. A repeated key overwrites the earlier value in place.
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        map.set_all(iter);
        map
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for Map<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.set_all(iter);
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs()
    }
}
