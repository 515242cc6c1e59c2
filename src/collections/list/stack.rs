use std::slice::Iter;
use std::vec::IntoIter;

use super::List;
use super::sealed::Store;
use crate::collections::Collection;

/// A last-in, first-out list.
///
/// The top of the stack is the last element of the list: [`iter`](Collection::iter) starts at the
/// bottom and [`push`](Stack::push) is the same as [`add`](List::add).
///
/// # Examples
/// ```
/// # use lang_extension::collections::Stack;
/// let mut stack = Stack::new();
/// stack.push_all([1, 2]);
/// stack.push(3);
///
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, element: T) {
        self.add(element);
    }

    /// Pushes every element of `elements` in order, leaving the last one on top.
    pub fn push_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.add_all(elements);
    }

    /// Returns the element on top of the stack without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn map<U, F>(&self, f: F) -> Stack<U>
    where
        F: FnMut(&T) -> U,
    {
        Stack {
            items: self.items.iter().map(f).collect(),
        }
    }
}

impl<T> Collection for Stack<T> {
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

    fn filter<F>(&self, mut predicate: F) -> Stack<T>
    where
        F: FnMut(&T) -> bool,
        Self: Clone,
    {
        let mut filtered = self.clone();
        filtered.items.retain(|item| predicate(item));
        filtered
    }
}

impl<T> Store for Stack<T> {
    fn store(&self) -> &Vec<T> {
        &self.items
    }

    fn store_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    fn from_store(store: Vec<T>) -> Stack<T> {
        Stack { items: store }
    }
}

impl<T> List for Stack<T> {}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    /// Creates a stack whose top is the last element of `items`.
    fn from(items: Vec<T>) -> Self {
        Stack { items }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
