//! Insertion-ordered key-value store
//!
//! `OrderedStore` is the backing structure of every container: a sequence of
//! `(Key, Value)` entries with unique keys, plus an FxHashMap index from key
//! to position for O(1) key lookups.
//!
//! # Ordering
//!
//! - `set` on an existing key overwrites in place (position unchanged)
//! - `set` on a new key appends at the end
//! - `pop_last` / `pop_first` act on the last / first entry by iteration
//!   order, never by key value
//!
//! # Auto-assigned keys
//!
//! `push_value` assigns the next free integer key: one past the largest
//! integer key ever stored since the last bulk replacement (0 when none).
//!
//! # Iteration
//!
//! `iter` / `iter_rev` / `iterate` produce a fresh lazy sequence over the
//! current state on every call. The borrow held by the iterator statically
//! prevents mutation during traversal; consumers that need to mutate while
//! walking must collect or copy first.
//!
//! # Complexity
//!
//! Lookups and appends are O(1). Removal shifts later entries and rewrites
//! their index slots, so it is O(n) in the number of entries after the
//! removed one.

use rustc_hash::FxHashMap;
use typed_arrays_core::{Key, Value};

/// Insertion-ordered `Key -> Value` map
#[derive(Debug, Clone, Default)]
pub struct OrderedStore {
    entries: Vec<(Key, Value)>,
    index: FxHashMap<Key, usize>,
    next_free: i64,
}

impl OrderedStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            next_free: 0,
        }
    }

    /// Build a store from items.
    ///
    /// A repeated key keeps the position of its first occurrence and the
    /// value of its last one.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        let iter = pairs.into_iter();
        let mut store = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            store.set(key, value);
        }
        store
    }

    /// Build a store from values with keys `0..n-1`
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::from_pairs(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Int(i as i64), v)),
        )
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a value by key
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Get a mutable value by key
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        match self.index.get(key) {
            Some(&pos) => Some(&mut self.entries[pos].1),
            None => None,
        }
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &Key) -> bool {
        self.index.contains_key(key)
    }

    /// Position of a key in iteration order
    pub fn position(&self, key: &Key) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Entry at a position in iteration order
    pub fn get_index(&self, pos: usize) -> Option<(&Key, &Value)> {
        self.entries.get(pos).map(|(k, v)| (k, v))
    }

    /// Insert or overwrite.
    ///
    /// Returns the previous value when the key already existed; its
    /// position is kept.
    pub fn set(&mut self, key: Key, value: Value) -> Option<Value> {
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.bump_next_free(&key);
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Key the next `push_value` would use.
    ///
    /// `None` once `i64::MAX` itself is stored: the integer key space is
    /// exhausted and no key past it exists.
    pub fn next_key(&self) -> Option<Key> {
        let key = Key::Int(self.next_free);
        if self.index.contains_key(&key) {
            None
        } else {
            Some(key)
        }
    }

    /// Append a value under the next free integer key; returns that key.
    ///
    /// When [`next_key`](Self::next_key) is `None` this overwrites the
    /// value under `i64::MAX`; callers that must append check it first.
    pub fn push_value(&mut self, value: Value) -> Key {
        let key = Key::Int(self.next_free);
        self.set(key.clone(), value);
        key
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        self.reindex_from(pos);
        Some(value)
    }

    /// Remove the last entry by iteration order
    pub fn pop_last(&mut self) -> Option<(Key, Value)> {
        let (key, value) = self.entries.pop()?;
        self.index.remove(&key);
        Some((key, value))
    }

    /// Remove the first entry by iteration order
    pub fn pop_first(&mut self) -> Option<(Key, Value)> {
        if self.entries.is_empty() {
            return None;
        }
        let (key, value) = self.entries.remove(0);
        self.index.remove(&key);
        self.reindex_from(0);
        Some((key, value))
    }

    /// First entry by iteration order
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    /// Last entry by iteration order
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    /// Keys in iteration order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Values in iteration order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Mutable values in iteration order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// Forward traversal
    pub fn iter(&self) -> Iter<'_> {
        self.iterate(false)
    }

    /// Reverse traversal
    pub fn iter_rev(&self) -> Iter<'_> {
        self.iterate(true)
    }

    /// Traversal in either direction
    pub fn iterate(&self, reverse: bool) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
            reverse,
        }
    }

    /// Entries as a slice, in iteration order
    pub fn as_slice(&self) -> &[(Key, Value)] {
        &self.entries
    }

    /// Clone all entries
    pub fn to_pairs(&self) -> Vec<(Key, Value)> {
        self.entries.clone()
    }

    /// Consume the store, yielding its entries
    pub fn into_pairs(self) -> Vec<(Key, Value)> {
        self.entries
    }

    /// Replace the whole content (same duplicate-key rules as `from_pairs`)
    pub fn replace_all<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (Key, Value)>,
    {
        *self = Self::from_pairs(pairs);
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.next_free = 0;
    }

    /// Rewrite keys to `0..n-1` in current order, keeping values
    pub fn renumber(&mut self) {
        self.index.clear();
        for (pos, entry) in self.entries.iter_mut().enumerate() {
            entry.0 = Key::Int(pos as i64);
            self.index.insert(entry.0.clone(), pos);
        }
        self.next_free = self.entries.len() as i64;
    }

    /// True if keys are exactly `0..n-1` in order
    pub fn is_sequential(&self) -> bool {
        self.entries
            .iter()
            .enumerate()
            .all(|(i, (k, _))| k.as_int() == Some(i as i64))
    }

    fn bump_next_free(&mut self, key: &Key) {
        if let Key::Int(i) = key {
            if *i >= self.next_free {
                self.next_free = i.saturating_add(1);
            }
        }
    }

    fn reindex_from(&mut self, start: usize) {
        for (pos, (key, _)) in self.entries.iter().enumerate().skip(start) {
            if let Some(slot) = self.index.get_mut(key) {
                *slot = pos;
            }
        }
    }
}

impl PartialEq for OrderedStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(Key, Value)> for OrderedStore {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Lazy traversal over an [`OrderedStore`] in either direction
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (Key, Value)>,
    reverse: bool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Key, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = if self.reverse {
            self.inner.next_back()
        } else {
            self.inner.next()
        };
        entry.map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let entry = if self.reverse {
            self.inner.next()
        } else {
            self.inner.next_back()
        };
        entry.map(|(k, v)| (k, v))
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a OrderedStore {
    type Item = (&'a Key, &'a Value);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> OrderedStore {
        OrderedStore::from_pairs(vec![
            (Key::from("a"), Value::Int(1)),
            (Key::from("b"), Value::Int(2)),
            (Key::from("c"), Value::Int(3)),
        ])
    }

    #[test]
    fn test_set_preserves_insertion_order() {
        let store = abc();
        let keys: Vec<_> = store.keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("a"), Key::from("b"), Key::from("c")]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut store = abc();
        let old = store.set(Key::from("a"), Value::Int(10));
        assert_eq!(old, Some(Value::Int(1)));
        assert_eq!(store.first(), Some((&Key::from("a"), &Value::Int(10))));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_keys_in_from_pairs() {
        let store = OrderedStore::from_pairs(vec![
            (Key::from("x"), Value::Int(1)),
            (Key::from("y"), Value::Int(2)),
            (Key::from("x"), Value::Int(3)),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.to_pairs()[0], (Key::from("x"), Value::Int(3)));
    }

    #[test]
    fn test_remove_reindexes_later_entries() {
        let mut store = abc();
        assert_eq!(store.remove(&Key::from("a")), Some(Value::Int(1)));
        assert_eq!(store.position(&Key::from("b")), Some(0));
        assert_eq!(store.position(&Key::from("c")), Some(1));
        assert_eq!(store.get(&Key::from("c")), Some(&Value::Int(3)));
        assert_eq!(store.remove(&Key::from("zz")), None);
    }

    #[test]
    fn test_pop_uses_iteration_order_not_key_order() {
        let mut store = OrderedStore::from_pairs(vec![
            (Key::Int(5), Value::from("five")),
            (Key::Int(1), Value::from("one")),
        ]);
        assert_eq!(store.pop_last(), Some((Key::Int(1), Value::from("one"))));
        assert_eq!(store.pop_first(), Some((Key::Int(5), Value::from("five"))));
        assert_eq!(store.pop_first(), None);
        assert_eq!(store.pop_last(), None);
    }

    #[test]
    fn test_push_value_uses_next_free_key() {
        let mut store = OrderedStore::from_pairs(vec![
            (Key::Int(3), Value::Int(0)),
            (Key::from("k"), Value::Int(0)),
        ]);
        assert_eq!(store.push_value(Value::Int(1)), Key::Int(4));
        assert_eq!(store.push_value(Value::Int(2)), Key::Int(5));

        let mut empty = OrderedStore::new();
        assert_eq!(empty.push_value(Value::Null), Key::Int(0));
    }

    #[test]
    fn test_next_key_exhausted_at_max() {
        let mut store = OrderedStore::from_pairs(vec![(Key::Int(i64::MAX - 1), Value::Int(0))]);
        assert_eq!(store.next_key(), Some(Key::Int(i64::MAX)));
        store.push_value(Value::Int(1));
        assert_eq!(store.next_key(), None);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_next_free_survives_pop() {
        let mut store = OrderedStore::from_values(vec![Value::Int(1), Value::Int(2)]);
        store.pop_last();
        assert_eq!(store.push_value(Value::Int(3)), Key::Int(2));
    }

    #[test]
    fn test_renumber() {
        let mut store = OrderedStore::from_pairs(vec![
            (Key::Int(7), Value::Int(1)),
            (Key::from("x"), Value::Int(2)),
        ]);
        assert!(!store.is_sequential());
        store.renumber();
        assert!(store.is_sequential());
        assert_eq!(store.get(&Key::Int(1)), Some(&Value::Int(2)));
        assert_eq!(store.push_value(Value::Int(3)), Key::Int(2));
    }

    #[test]
    fn test_iterate_both_directions() {
        let store = abc();
        let forward: Vec<_> = store.iter().map(|(_, v)| v.clone()).collect();
        let backward: Vec<_> = store.iter_rev().map(|(_, v)| v.clone()).collect();
        assert_eq!(forward, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert_eq!(backward, vec![Value::Int(3), Value::Int(2), Value::Int(1)]);
        // Restartable: a new call starts over
        assert_eq!(store.iter().count(), 3);
        assert_eq!(store.iterate(true).next_back(), Some((&Key::from("a"), &Value::Int(1))));
    }

    #[test]
    fn test_clear_resets_next_free() {
        let mut store = OrderedStore::from_values(vec![Value::Int(1)]);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.push_value(Value::Int(9)), Key::Int(0));
    }
}
