use super::Cursor;

/// The behaviour shared by every container in this crate.
///
/// Implementors provide the storage primitives ([`entries`](Collection::entries),
/// [`size`](Collection::size), [`clear`](Collection::clear) and [`filter`](Collection::filter)),
/// everything else is derived from them.
///
/// Each entry has a key: its position for list-like containers, or the key itself for a
/// [`Map`](super::Map). Keys never take part in searches, which only look at the elements.
///
/// There is no `map` in this trait, as mapping changes the element type and some containers put
/// bounds on theirs. Each container has an inherent `map` returning the same kind of container
/// instead.
pub trait Collection: Sized {
    type Item;
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Returns an iterator over all keys and elements, in the container's internal order.
    fn entries(&self) -> impl DoubleEndedIterator<Item = (Self::Key<'_>, &Self::Item)>;

    /// Returns the number of elements in the container.
    fn size(&self) -> usize;

    /// Removes all elements. The container itself remains usable.
    fn clear(&mut self);

    /// Creates a new container of the same type, holding copies of the elements for which
    /// `predicate` returns true, with their keys and relative order preserved.
    ///
    /// Filtering a [`Map`](super::Map) needs both its keys and its values to be [`Clone`]. The rest
    /// of the trait puts no bound on keys.
    fn filter<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&Self::Item) -> bool,
        Self: Clone;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns an iterator over all elements, in the container's internal order.
    fn iter(&self) -> impl DoubleEndedIterator<Item = &Self::Item> {
        self.entries().map(|(_, item)| item)
    }

    /// Returns a cursor over the entries, for stepwise iteration with access to keys.
    fn cursor(&self) -> Cursor<'_, Self::Key<'_>, Self::Item> {
        Cursor::new(self.entries())
    }

    /// Returns true if any element is equal to `element`.
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|item| item == element)
    }

    /// Copies all elements into a [`Vec`], in the container's internal order.
    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns true if `predicate` holds for every element. This is true for an empty container.
    fn every<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns true if `predicate` holds for at least one element. This is false for an empty
    /// container.
    fn some<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns true if any element matches `predicate`, stopping at the first match.
    fn search<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).is_some()
    }

    /// Returns true if any element matches `predicate` for the given `query`.
    fn search_by_query<Q, F>(&self, query: &Q, predicate: F) -> bool
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q) -> bool,
    {
        self.find_by_query(query, predicate).is_some()
    }

    /// Returns the first element matching `predicate`.
    fn find<F>(&self, mut predicate: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.iter().find(|item| predicate(item))
    }

    /// Returns the first element matching `predicate` for the given `query`.
    ///
    /// # Examples
    /// ```
    /// # use lang_extension::collections::{ArrayList, Collection};
    /// let fruits = ArrayList::from(vec!["apple", "banana", "pine"]);
    /// let starts_with = |fruit: &&str, prefix: &str| fruit.starts_with(prefix);
    /// assert_eq!(fruits.find_by_query("ba", starts_with), Some(&"banana"));
    /// assert_eq!(fruits.find_by_query("ma", starts_with), None);
    /// ```
    fn find_by_query<Q, F>(&self, query: &Q, mut predicate: F) -> Option<&Self::Item>
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q) -> bool,
    {
        self.find(|item| predicate(item, query))
    }

    /// Returns the last element matching `predicate`, searching from the end.
    fn find_last<F>(&self, mut predicate: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item) -> bool,
    {
        self.iter().rev().find(|item| predicate(item))
    }

    /// Returns the last element matching `predicate` for the given `query`.
    fn find_last_by_query<Q, F>(&self, query: &Q, mut predicate: F) -> Option<&Self::Item>
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q) -> bool,
    {
        self.find_last(|item| predicate(item, query))
    }

    /// Returns all elements matching `predicate` as a new container of the same type. If nothing
    /// matches, the container is empty.
    fn find_all<F>(&self, predicate: F) -> Self
    where
        F: FnMut(&Self::Item) -> bool,
        Self: Clone,
    {
        self.filter(predicate)
    }

    /// Returns all elements matching `predicate` for the given `query` as a new container.
    fn find_all_by_query<Q, F>(&self, query: &Q, mut predicate: F) -> Self
    where
        Q: ?Sized,
        F: FnMut(&Self::Item, &Q) -> bool,
        Self: Clone,
    {
        self.filter(|item| predicate(item, query))
    }
}
