//! Lookups and derived reads
//!
//! Value matching uses strict equality (`Value::eq`): `Int(1)` never
//! matches `Float(1.0)` or `"1"`. Predicates receive `(key, value)`.

use rustc_hash::FxHashMap;
use typed_arrays_core::{Error, Key, Pairs, Result, Value};

use super::{merge_keys, renumber, Container};
use crate::policy::Operation;

impl Container {
    /// Position and key of the first (or last) item equal to `value`
    fn locate(&self, value: &Value, reverse: bool) -> Option<(usize, Key)> {
        let size = self.size();
        self.store
            .iterate(reverse)
            .enumerate()
            .find(|(_, (_, v))| *v == value)
            .map(|(i, (k, _))| {
                let index = if reverse { size - 1 - i } else { i };
                (index, k.clone())
            })
    }

    pub(crate) fn key_of(&self, value: &Value, reverse: bool) -> Option<Key> {
        self.locate(value, reverse).map(|(_, k)| k)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Key of the first item equal to `value`
    pub fn search(&self, value: &Value) -> Result<Option<Key>> {
        self.gate(Operation::Search)?;
        Ok(self.key_of(value, false))
    }

    /// Key of the last item equal to `value`
    pub fn search_last(&self, value: &Value) -> Result<Option<Key>> {
        self.gate(Operation::SearchLast)?;
        Ok(self.key_of(value, true))
    }

    /// Position of the first item equal to `value`
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.locate(value, false).map(|(i, _)| i)
    }

    /// Position of the last item equal to `value`
    pub fn last_index_of(&self, value: &Value) -> Option<usize> {
        self.locate(value, true).map(|(i, _)| i)
    }

    /// True if some item equals `value`
    pub fn has(&self, value: &Value) -> bool {
        self.store.values().any(|v| v == value)
    }

    /// True if `key` exists; the key type is checked against the kind
    pub fn has_key(&self, key: impl Into<Key>) -> Result<bool> {
        Ok(self.read(&key.into())?.is_some())
    }

    /// First value whose item satisfies `pred`
    pub fn find<F>(&self, mut pred: F) -> Result<Option<Value>>
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.gate(Operation::Find)?;
        Ok(self.store.iter().find(|&(k, v)| pred(k, v)).map(|(_, v)| v.clone()))
    }

    /// First key whose item satisfies `pred`
    pub fn find_key<F>(&self, mut pred: F) -> Result<Option<Key>>
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.gate(Operation::FindKey)?;
        Ok(self.store.iter().find(|&(k, v)| pred(k, v)).map(|(k, _)| k.clone()))
    }

    /// First position whose item satisfies `pred`
    pub fn find_index<F>(&self, mut pred: F) -> Result<Option<usize>>
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.gate(Operation::FindIndex)?;
        Ok(self.store.iter().position(|(k, v)| pred(k, v)))
    }

    /// True if any item satisfies `pred`
    pub fn test<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.store.iter().any(|(k, v)| pred(k, v))
    }

    /// True if every item satisfies `pred` (vacuously true when empty)
    pub fn test_all<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.store.iter().all(|(k, v)| pred(k, v))
    }

    // ========================================================================
    // Extremes and counts
    // ========================================================================

    fn candidates(&self, numerics_only: bool) -> impl Iterator<Item = &Value> {
        self.store
            .values()
            .filter(move |v| !numerics_only || v.is_numeric())
    }

    /// Smallest value by natural ordering; `None` when nothing qualifies
    pub fn min(&self, numerics_only: bool) -> Option<Value> {
        self.candidates(numerics_only)
            .min_by(|a, b| a.compare(b))
            .cloned()
    }

    /// Largest value by natural ordering; `None` when nothing qualifies
    pub fn max(&self, numerics_only: bool) -> Option<Value> {
        self.candidates(numerics_only)
            .max_by(|a, b| a.compare(b))
            .cloned()
    }

    /// Occurrence count per value, in first-seen order.
    ///
    /// Only int and string values are counted.
    pub fn count_values(&self) -> Vec<(Value, usize)> {
        let mut positions: FxHashMap<Key, usize> = FxHashMap::default();
        let mut counts: Vec<(Value, usize)> = Vec::new();
        for value in self.store.values() {
            let key = match value {
                Value::Int(i) => Key::Int(*i),
                Value::String(s) => Key::parse(s),
                _ => continue,
            };
            match positions.get(&key) {
                Some(&pos) => counts[pos].1 += 1,
                None => {
                    positions.insert(key.clone(), counts.len());
                    counts.push((Value::from(key), 1));
                }
            }
        }
        counts
    }

    // ========================================================================
    // Uniqueness and difference
    // ========================================================================

    /// First occurrence of every distinct value, keys preserved
    pub fn uniq(&self) -> Pairs {
        let mut seen: Vec<&Value> = Vec::new();
        let mut out = Vec::new();
        for (key, value) in self.store.iter() {
            if !seen.contains(&value) {
                seen.push(value);
                out.push((key.clone(), value.clone()));
            }
        }
        out
    }

    /// Items whose value already occurred earlier, keys preserved
    pub fn ununiq(&self) -> Pairs {
        let mut seen: Vec<&Value> = Vec::new();
        let mut out = Vec::new();
        for (key, value) in self.store.iter() {
            if seen.contains(&value) {
                out.push((key.clone(), value.clone()));
            } else {
                seen.push(value);
            }
        }
        out
    }

    /// Values occurring exactly once, keys preserved
    pub fn uniqs(&self) -> Pairs {
        let repeated = self.ununiq();
        self.uniq()
            .into_iter()
            .filter(|(_, v)| !repeated.iter().any(|(_, r)| r == v))
            .collect()
    }

    /// Items whose value does not occur in `other`, keys preserved.
    ///
    /// With `uniq`, duplicates are dropped from this side first.
    pub fn diff<'a, I>(&self, other: I, uniq: bool) -> Pairs
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let other: Vec<&Value> = other.into_iter().collect();
        let items = if uniq { self.uniq() } else { self.items() };
        items
            .into_iter()
            .filter(|(_, v)| !other.contains(&v))
            .collect()
    }

    // ========================================================================
    // Partitioning
    // ========================================================================

    /// Split into chunks of `size` items.
    ///
    /// Without `preserve_keys` every chunk is keyed `0..`.
    pub fn chunk(&self, size: usize, preserve_keys: bool) -> Result<Vec<Pairs>> {
        if size == 0 {
            return Err(Error::argument("chunk size must be at least 1, 0 given"));
        }
        Ok(self
            .store
            .as_slice()
            .chunks(size)
            .map(|chunk| {
                let chunk = chunk.to_vec();
                if preserve_keys {
                    chunk
                } else {
                    renumber(chunk)
                }
            })
            .collect())
    }

    /// Items from `offset`, at most `len` of them.
    ///
    /// A negative `offset` counts from the end; a negative `len` stops that
    /// many items before the end. Without `preserve_keys` integer keys are
    /// renumbered while string keys are kept.
    pub fn slice(&self, offset: i64, len: Option<i64>, preserve_keys: bool) -> Pairs {
        let size = self.size() as i64;
        let start = if offset < 0 {
            (size + offset).max(0)
        } else {
            offset.min(size)
        };
        let end = match len {
            None => size,
            Some(n) if n < 0 => (size + n).max(start),
            Some(n) => start.saturating_add(n).min(size),
        };
        let items = self.store.as_slice()[start as usize..end as usize].to_vec();
        if preserve_keys {
            items
        } else {
            merge_keys(items)
        }
    }

    /// Items whose key is in `keys`, in container order
    pub fn pick(&self, keys: &[Key]) -> Pairs {
        let keys: Vec<Key> = keys.iter().map(|k| self.canonical(k.clone())).collect();
        self.store
            .iter()
            .filter(|&(k, _)| keys.contains(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Items whose key is not in `keys`, in container order
    pub fn omit(&self, keys: &[Key]) -> Pairs {
        let keys: Vec<Key> = keys.iter().map(|k| self.canonical(k.clone())).collect();
        self.store
            .iter()
            .filter(|&(k, _)| !keys.contains(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
