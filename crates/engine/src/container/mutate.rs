//! Protocol-backed writes
//!
//! Each public mutator gates on its own operation name (so errors report
//! `add()` rather than `unpop()`), then dispatches one or more protocol
//! commands.

use tracing::debug;
use typed_arrays_core::{Error, Key, Pairs, Result, Value};

use super::Container;
use crate::command::Command;
use crate::output::Output;
use crate::policy::Operation;

impl Container {
    fn size_of(&self, out: Output) -> usize {
        out.size().unwrap_or_else(|| self.size())
    }

    // ========================================================================
    // Protocol commands
    // ========================================================================

    /// Insert or overwrite `key`; returns the new size
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<usize> {
        let out = self.execute(Command::Set {
            key: key.into(),
            value: value.into(),
        })?;
        Ok(self.size_of(out))
    }

    /// Read `key`.
    ///
    /// The key type is checked against the kind: a string key on a Set or an
    /// integer key on a Map is a `KeyType` error, not a miss.
    pub fn get(&self, key: impl Into<Key>) -> Result<Option<Value>> {
        self.gate(Operation::Get)?;
        Ok(self.read(&key.into())?.cloned())
    }

    /// Read `key`, falling back to `default` when absent
    pub fn get_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Result<Value> {
        Ok(self.get(key)?.unwrap_or_else(|| default.into()))
    }

    /// Remove `key` if present
    pub fn unset(&mut self, key: impl Into<Key>) -> Result<&mut Self> {
        self.execute(Command::Unset { key: key.into() })?;
        Ok(self)
    }

    /// Insert or overwrite `key` (chaining form of [`set`](Self::set))
    pub fn put(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<&mut Self> {
        self.execute(Command::Put {
            key: key.into(),
            value: value.into(),
        })?;
        Ok(self)
    }

    /// Remove then re-insert `key` so it becomes the last item
    pub fn push(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Result<&mut Self> {
        self.execute(Command::Push {
            key: key.into(),
            value: value.into(),
        })?;
        Ok(self)
    }

    /// Read then remove `key`
    pub fn pull(&mut self, key: impl Into<Key>) -> Result<Option<Value>> {
        Ok(self.execute(Command::Pull { key: key.into() })?.into_value())
    }

    /// Read then remove `key`, falling back to `default` when absent
    pub fn pull_or(&mut self, key: impl Into<Key>, default: impl Into<Value>) -> Result<Value> {
        Ok(self.pull(key)?.unwrap_or_else(|| default.into()))
    }

    /// Remove the last item; `None` on an empty container
    pub fn pop(&mut self) -> Result<Option<Value>> {
        Ok(self.execute(Command::Pop)?.into_value())
    }

    /// Remove the first item; `None` on an empty container
    pub fn shift(&mut self) -> Result<Option<Value>> {
        Ok(self.execute(Command::Shift)?.into_value())
    }

    /// Append under the next free integer key; returns the new size
    pub fn unpop(&mut self, value: impl Into<Value>) -> Result<usize> {
        let out = self.execute(Command::Unpop {
            value: value.into(),
        })?;
        Ok(self.size_of(out))
    }

    /// Insert at the front; returns the new size
    pub fn unshift(&mut self, value: impl Into<Value>) -> Result<usize> {
        let out = self.execute(Command::Unshift {
            value: value.into(),
        })?;
        Ok(self.size_of(out))
    }

    // ========================================================================
    // Derived mutators
    // ========================================================================

    /// Append a value (alias of `unpop`)
    pub fn add(&mut self, value: impl Into<Value>) -> Result<usize> {
        self.gate(Operation::Add)?;
        let out = self.dispatch(Command::Unpop {
            value: value.into(),
        })?;
        Ok(self.size_of(out))
    }

    /// Append a value (alias of `unpop`)
    pub fn append(&mut self, value: impl Into<Value>) -> Result<usize> {
        self.gate(Operation::Append)?;
        let out = self.dispatch(Command::Unpop {
            value: value.into(),
        })?;
        Ok(self.size_of(out))
    }

    /// Prepend a value (alias of `unshift`)
    pub fn prepend(&mut self, value: impl Into<Value>) -> Result<usize> {
        self.gate(Operation::Prepend)?;
        let out = self.dispatch(Command::Unshift {
            value: value.into(),
        })?;
        Ok(self.size_of(out))
    }

    /// Remove the first item equal to `value`; returns whether one was found
    pub fn remove(&mut self, value: &Value) -> Result<bool> {
        self.gate(Operation::Remove)?;
        match self.key_of(value, false) {
            Some(key) => {
                self.dispatch(Command::Unset { key })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove `key`; returns whether it existed
    pub fn remove_at(&mut self, key: impl Into<Key>) -> Result<bool> {
        self.gate(Operation::RemoveAt)?;
        let key = key.into();
        if self.read(&key)?.is_none() {
            return Ok(false);
        }
        self.dispatch(Command::Unset { key })?;
        Ok(true)
    }

    /// Remove every occurrence of each of `values`; returns the removed count
    pub fn remove_all(&mut self, values: &[Value]) -> Result<usize> {
        self.gate(Operation::RemoveAll)?;
        let before = self.size();
        let kept: Pairs = self
            .store
            .iter()
            .filter(|(_, v)| !values.contains(*v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let removed = before - kept.len();
        if removed > 0 {
            self.commit(kept);
        }
        Ok(removed)
    }

    /// Overwrite the first item equal to `value`; returns whether one was found
    pub fn replace(&mut self, value: &Value, replacement: impl Into<Value>) -> Result<bool> {
        self.gate(Operation::Replace)?;
        match self.key_of(value, false) {
            Some(key) => {
                self.dispatch(Command::Put {
                    key,
                    value: replacement.into(),
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Overwrite `key` if it exists; returns whether it existed
    pub fn replace_at(&mut self, key: impl Into<Key>, replacement: impl Into<Value>) -> Result<bool> {
        self.gate(Operation::ReplaceAt)?;
        let key = key.into();
        if self.read(&key)?.is_none() {
            return Ok(false);
        }
        self.dispatch(Command::Put {
            key,
            value: replacement.into(),
        })?;
        Ok(true)
    }

    /// Append `times` copies of `value`
    pub fn pad(&mut self, times: usize, value: impl Into<Value>) -> Result<&mut Self> {
        self.gate(Operation::Pad)?;
        let value = value.into();
        self.validator().check_write(self.size(), &value)?;
        for _ in 0..times {
            self.dispatch(Command::Unpop {
                value: value.clone(),
            })?;
        }
        Ok(self)
    }

    /// Set keys `offset..offset + times` to `value`
    pub fn fill(&mut self, times: usize, value: impl Into<Value>, offset: i64) -> Result<&mut Self> {
        self.gate(Operation::Fill)?;
        let value = value.into();
        let keys = (0..times as i64)
            .map(|i| {
                offset.checked_add(i).map(Key::Int).ok_or_else(|| {
                    Error::argument(format!("fill() offset {} overflows after {} items", offset, i))
                })
            })
            .collect::<Result<Vec<Key>>>()?;
        let validator = self.validator();
        for key in &keys {
            validator.check_write_key(key)?;
        }
        validator.check_write(self.size(), &value)?;
        for key in keys {
            self.dispatch(Command::Set {
                key,
                value: value.clone(),
            })?;
        }
        Ok(self)
    }

    /// Swap keys and values.
    ///
    /// Every value must be an int or a string; a repeated value keeps its
    /// first position and the key of its last occurrence.
    pub fn flip(&mut self) -> Result<&mut Self> {
        self.gate(Operation::Flip)?;
        let mut flipped = Vec::with_capacity(self.size());
        for (key, value) in self.store.iter() {
            let new_key = match value {
                Value::Int(i) => Key::Int(*i),
                Value::String(s) => Key::parse(s),
                other => {
                    return Err(Error::KeyType {
                        container: self.name().to_string(),
                        expected: "int or string".to_string(),
                        actual: other.type_name().to_string(),
                    })
                }
            };
            flipped.push((new_key, Value::from(key.clone())));
        }
        self.replace_validated(flipped)?;
        Ok(self)
    }

    // ========================================================================
    // Wholesale replacement
    // ========================================================================

    /// Replace every item, validating like construction
    pub fn reset(&mut self, items: Pairs) -> Result<&mut Self> {
        self.gate(Operation::Reset)?;
        self.reset_unchecked(items)
    }

    /// Replace every item (alias of `reset`)
    pub fn reset_items(&mut self, items: Pairs) -> Result<&mut Self> {
        self.gate(Operation::ResetItems)?;
        self.gate(Operation::Reset)?;
        self.reset_unchecked(items)
    }

    fn reset_unchecked(&mut self, items: Pairs) -> Result<&mut Self> {
        self.replace_validated(items)?;
        debug!(target: "typed_arrays::container", container = self.name(), size = self.size(), "Reset container");
        Ok(self)
    }

    /// Remove every item
    pub fn empty(&mut self) -> Result<&mut Self> {
        self.gate(Operation::Empty)?;
        self.store.clear();
        Ok(self)
    }
}
