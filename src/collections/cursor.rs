/// A stepwise cursor over the entries of a [`Collection`](super::Collection).
///
/// The cursor takes a snapshot of the entries when it is created, in the collection's internal
/// order. It starts on the first entry and becomes invalid once it has moved past the last one.
/// [`rewind`](Cursor::rewind) returns it to the start.
///
/// A cursor is also an [`Iterator`] over `(key, element)` pairs, starting from its current
/// position.
///
/// # Examples
/// ```
/// # use lang_extension::collections::{ArrayList, Collection};
/// let list = ArrayList::from(vec!['a', 'b']);
/// let mut cursor = list.cursor();
///
/// assert_eq!(cursor.key(), Some(0));
/// assert_eq!(cursor.current(), Some(&'a'));
/// assert_eq!(cursor.advance(), Some(&'b'));
/// assert_eq!(cursor.advance(), None);
/// assert!(!cursor.valid());
/// assert_eq!(cursor.rewind(), Some(&'a'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a, K, V> {
    entries: Vec<(K, &'a V)>,
    position: usize,
}

impl<'a, K: Copy, V> Cursor<'a, K, V> {
    pub(crate) fn new(entries: impl Iterator<Item = (K, &'a V)>) -> Cursor<'a, K, V> {
        Cursor {
            entries: entries.collect(),
            position: 0,
        }
    }

    /// Moves back to the first entry and returns its element.
    pub fn rewind(&mut self) -> Option<&'a V> {
        self.position = 0;
        self.current()
    }

    /// Returns the element at the cursor, or [`None`] if the cursor is invalid.
    pub fn current(&self) -> Option<&'a V> {
        self.entries.get(self.position).map(|&(_, value)| value)
    }

    /// Returns the key at the cursor, or [`None`] if the cursor is invalid.
    pub fn key(&self) -> Option<K> {
        self.entries.get(self.position).map(|&(key, _)| key)
    }

    /// Moves to the next entry and returns its element. Once past the end, the cursor stays
    /// there.
    pub fn advance(&mut self) -> Option<&'a V> {
        if self.valid() {
            self.position += 1;
        }
        self.current()
    }

    /// Returns true while the cursor points at an entry.
    pub fn valid(&self) -> bool {
        self.position < self.entries.len()
    }
}

impl<'a, K: Copy, V> Iterator for Cursor<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.position).copied()?;
        self.position += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<K: Copy, V> ExactSizeIterator for Cursor<'_, K, V> {}
