//! Tuple: read-only sequence
//!
//! A tuple is fixed at construction. Every mutator fails with a mutation
//! error, and the key-returning scans (`search`, `search_last`, `find`,
//! `find_key`, `find_index`) are disallowed. Use `copy_array` or
//! `to_vec` to get a mutable copy of the items.

use typed_arrays_core::{ContainerOptions, Result, Value};
use typed_arrays_engine::keyed;

typed_container!(
    /// Immutable sequence of values keyed `0..n-1`
    ///
    /// # Example
    ///
    /// ```
    /// use typed_arrays_primitives::tuple;
    /// use typed_arrays_core::Value;
    ///
    /// let mut t = tuple(["x", "y"]).unwrap();
    /// assert_eq!(t.at(1), Some(&Value::from("y")));
    /// assert!(t.add("z").is_err());
    /// ```
    Tuple => typed_arrays_core::Kind::Tuple
);

impl Tuple {
    /// Create from values
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::with_values(values, ContainerOptions::for_kind(Self::KIND))
    }

    /// Create from values with explicit options; the tuple is read-only
    /// whatever `options` says
    pub fn with_values<I, V>(values: I, options: ContainerOptions) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::with_options(keyed(values.into_iter().map(Into::into)), options)
    }

    /// Create from a JSON array
    pub fn from_json(text: &str) -> Result<Self> {
        Self::from_values(crate::json_array(text, Self::KIND)?)
    }

    /// Value at `index`
    pub fn at(&self, index: usize) -> Option<&Value> {
        self.item(index)
    }

    /// Values in order
    pub fn to_vec(&self) -> Vec<Value> {
        self.values()
    }
}

/// Create a [`Tuple`] from values
pub fn tuple<I, V>(values: I) -> Result<Tuple>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Tuple::from_values(values)
}
