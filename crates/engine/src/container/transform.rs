//! Whole-store rewrites
//!
//! Each rewrite builds the new item sequence aside, validates it, and only
//! then swaps it in. `map` re-validates the transformed values against the
//! item type and null policy, so a type-constrained container never ends up
//! holding values it would reject on construction.

use typed_arrays_core::{Error, Key, Pairs, Result, Value};

use super::aggregate::add_values;
use super::{merge_keys, Container};
use crate::policy::Operation;

impl Container {
    /// Transform every value, keeping keys
    pub fn map<F>(&mut self, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&Value) -> Value,
    {
        self.try_map(|v| Ok(f(v)))
    }

    /// Transform every value with a fallible closure, keeping keys.
    ///
    /// The first error aborts the whole operation with the store untouched.
    pub fn try_map<F>(&mut self, mut f: F) -> Result<&mut Self>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        self.gate(Operation::Map)?;
        let mapped = self
            .store
            .iter()
            .map(|(k, v)| Ok((k.clone(), f(v)?)))
            .collect::<Result<Pairs>>()?;
        self.replace_validated(mapped)?;
        Ok(self)
    }

    /// Keep items whose value has a non-empty string form
    pub fn filter(&mut self) -> Result<&mut Self> {
        self.filter_by(|_, v| !v.to_text().is_empty())
    }

    /// Keep items satisfying `pred`, preserving their relative order
    pub fn filter_by<F>(&mut self, mut pred: F) -> Result<&mut Self>
    where
        F: FnMut(&Key, &Value) -> bool,
    {
        self.gate(Operation::Filter)?;
        let kept: Pairs = self
            .store
            .iter()
            .filter(|&(k, v)| pred(k, v))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        if kept.len() != self.size() {
            self.commit(kept);
        }
        Ok(self)
    }

    /// Fold values left to right, adding numeric values to `initial` and
    /// passing non-numeric values over
    pub fn reduce(&self, initial: impl Into<Value>) -> Value {
        self.reduce_with(initial, |acc, v| {
            if v.is_numeric() {
                add_values(&acc, v)
            } else {
                acc
            }
        })
    }

    /// Fold values left to right with `f`
    pub fn reduce_with<F>(&self, initial: impl Into<Value>, f: F) -> Value
    where
        F: FnMut(Value, &Value) -> Value,
    {
        self.store.values().fold(initial.into(), f)
    }

    /// Append `other`'s items.
    ///
    /// Both containers must have the same kind. Integer keys are renumbered
    /// and repeated string keys take `other`'s value; the merged items are
    /// validated like construction.
    pub fn merge(&mut self, other: &Container) -> Result<&mut Self> {
        self.gate(Operation::Merge)?;
        if other.kind != self.kind {
            return Err(Error::argument(format!(
                "Given {} not mergable with {}",
                other.name(),
                self.name()
            )));
        }
        let mut items = self.items();
        items.extend(other.store.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.replace_validated(merge_keys(items))?;
        Ok(self)
    }

    /// Reverse item order.
    ///
    /// Map keeps its keys; other kinds renumber integer keys.
    pub fn reverse(&mut self) -> Result<&mut Self> {
        self.gate(Operation::Reverse)?;
        let mut items = self.items();
        items.reverse();
        let items = if self.kind.is_map_like() {
            items
        } else {
            merge_keys(items)
        };
        self.commit(items);
        Ok(self)
    }
}
