use std::slice::Iter;
use std::vec::IntoIter;

use super::List;
use super::sealed::Store;
use crate::collections::Collection;

/// A first-in, first-out list.
///
/// Elements are enqueued at the tail and polled from the head. The head is the first element of
/// the list, so [`iter`](Collection::iter) and the cursor visit elements in the order they will be
/// polled.
///
/// # Examples
/// ```
/// # use lang_extension::collections::Queue;
/// let mut queue = Queue::new();
/// queue.enqueue_all(["first", "second"]);
/// queue.enqueue("third");
///
/// assert_eq!(queue.peek(), Some(&"first"));
/// assert_eq!(queue.poll(), Some("first"));
/// assert_eq!(queue.poll(), Some("second"));
/// assert_eq!(queue.poll(), Some("third"));
/// assert_eq!(queue.poll(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    items: Vec<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue { items: Vec::new() }
    }

    /// Adds `element` at the tail of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.add(element);
    }

    /// Adds every element of `elements` at the tail, so they are polled in iteration order.
    pub fn enqueue_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.add_all(elements);
    }

    /// Returns the element at the head of the queue without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Removes and returns the element at the head of the queue.
    pub fn poll(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Creates a new queue by applying `f` to every element, keeping their order.
    pub fn map<U, F>(&self, f: F) -> Queue<U>
    where
        F: FnMut(&T) -> U,
    {
        Queue {
            items: self.items.iter().map(f).collect(),
        }
    }
}

impl<T> Collection for Queue<T> {
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

    fn filter<F>(&self, mut predicate: F) -> Queue<T>
    where
        F: FnMut(&T) -> bool,
        Self: Clone,
    {
        let mut filtered = self.clone();
        filtered.items.retain(|item| predicate(item));
        filtered
    }
}

impl<T> Store for Queue<T> {
    fn store(&self) -> &Vec<T> {
        &self.items
    }

    fn store_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn from_store(store: Vec<T>) -> Queue<T> {
        Queue { items: store }
    }
}

impl<T> List for Queue<T> {}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    /// Creates a queue whose head is the first element of `items`.
    fn from(items: Vec<T>) -> Self {
        Queue { items }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
