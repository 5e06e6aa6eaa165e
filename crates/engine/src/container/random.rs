//! Shuffling and random sampling
//!
//! Each operation has a `*_with` variant taking the random source, so tests
//! and callers needing reproducible output can pass a seeded generator.

use rand::seq::{index, SliceRandom};
use rand::Rng;
use typed_arrays_core::{Error, Key, Pairs, Result, Value};

use super::Container;
use crate::policy::Operation;

/// Result of [`Container::rand`]
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    /// A single value (`size == 1` without keys)
    Value(Value),
    /// A single item (`size == 1` with keys)
    Pair(Key, Value),
    /// Several values in container order
    Values(Vec<Value>),
    /// Several items in container order
    Pairs(Pairs),
}

impl Sample {
    /// Number of sampled items
    pub fn len(&self) -> usize {
        match self {
            Sample::Value(_) | Sample::Pair(..) => 1,
            Sample::Values(values) => values.len(),
            Sample::Pairs(pairs) => pairs.len(),
        }
    }

    /// Never true for a sample returned by a container
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sampled values
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Sample::Value(v) | Sample::Pair(_, v) => vec![v],
            Sample::Values(values) => values,
            Sample::Pairs(pairs) => pairs.into_iter().map(|(_, v)| v).collect(),
        }
    }
}

impl Container {
    /// Randomly permute items.
    ///
    /// `preserve_keys` defaults to keeping keys for Map and renumbering for
    /// every other kind.
    pub fn shuffle(&mut self, preserve_keys: Option<bool>) -> Result<&mut Self> {
        self.shuffle_with(&mut rand::thread_rng(), preserve_keys)
    }

    /// [`shuffle`](Self::shuffle) with an explicit random source
    pub fn shuffle_with<R>(&mut self, rng: &mut R, preserve_keys: Option<bool>) -> Result<&mut Self>
    where
        R: Rng + ?Sized,
    {
        self.gate(Operation::Shuffle)?;
        let preserve = preserve_keys.unwrap_or(self.kind.is_map_like());
        let mut items = self.items();
        items.shuffle(rng);
        let items = self.rekey(items, preserve);
        self.commit(items);
        Ok(self)
    }

    /// Sample `size` distinct items without replacement.
    ///
    /// `size` must lie in `[1, size()]`. A single item comes back bare
    /// unless `use_keys` asks for its key; several items keep container
    /// order.
    pub fn rand(&self, size: usize, use_keys: bool) -> Result<Sample> {
        self.rand_with(&mut rand::thread_rng(), size, use_keys)
    }

    /// [`rand`](Self::rand) with an explicit random source
    pub fn rand_with<R>(&self, rng: &mut R, size: usize, use_keys: bool) -> Result<Sample>
    where
        R: Rng + ?Sized,
    {
        self.gate(Operation::Rand)?;
        let len = self.size();
        if size < 1 || size > len {
            return Err(Error::argument(format!(
                "Size must be between 1 and {} (size of {}), {} given",
                len,
                self.name(),
                size
            )));
        }
        let mut picked = index::sample(rng, len, size).into_vec();
        picked.sort_unstable();

        let items = picked.into_iter().filter_map(|i| self.store.get_index(i));
        let sample = match (size, use_keys) {
            (1, false) => items.map(|(_, v)| Sample::Value(v.clone())).next(),
            (1, true) => items.map(|(k, v)| Sample::Pair(k.clone(), v.clone())).next(),
            (_, false) => Some(Sample::Values(items.map(|(_, v)| v.clone()).collect())),
            (_, true) => Some(Sample::Pairs(
                items.map(|(k, v)| (k.clone(), v.clone())).collect(),
            )),
        };
        sample.ok_or_else(|| Error::argument("Sampled position out of range"))
    }
}
