//! AnyArray: unconstrained ordered container
//!
//! Accepts integer and string keys in any order, allows nulls by default
//! and disallows no operation. Integer keys are not kept dense: `unset`
//! leaves a gap, and `unpop` uses the key after the largest integer key
//! seen so far.

use typed_arrays_core::{ContainerOptions, Error, Key, Result, Value};
use typed_arrays_engine::keyed;

typed_container!(
    /// Ordered container with mixed integer and string keys
    ///
    /// # Example
    ///
    /// ```
    /// use typed_arrays_primitives::AnyArray;
    /// use typed_arrays_core::{Key, Value};
    ///
    /// let mut a = AnyArray::from_pairs([(Key::from("x"), 1), (Key::Int(3), 2)]).unwrap();
    /// a.unpop(Value::Null).unwrap();
    /// assert_eq!(a.last_key(), Some(&Key::Int(4)));
    /// ```
    AnyArray => typed_arrays_core::Kind::Any
);

impl AnyArray {
    /// Empty container with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from `(key, value)` pairs
    pub fn from_pairs<I, K, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::with_options(
            items.into_iter().map(|(k, v)| (k.into(), v.into())),
            ContainerOptions::for_kind(Self::KIND),
        )
    }

    /// Create from values keyed `0..n-1`
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::with_options(
            keyed(values.into_iter().map(Into::into)),
            ContainerOptions::for_kind(Self::KIND),
        )
    }

    /// Create from a JSON array or object.
    ///
    /// Object members whose names are canonical integers get integer keys.
    pub fn from_json(text: &str) -> Result<Self> {
        match crate::parse_json(text)? {
            serde_json::Value::Object(fields) => {
                Self::from_pairs(fields.into_iter().map(|(k, v)| (Key::parse(&k), Value::from(v))))
            }
            serde_json::Value::Array(items) => Self::from_values(items.into_iter().map(Value::from)),
            other => Err(Error::argument(format!(
                "AnyArray() expects a JSON array or object, {} given",
                Value::from(other).type_name()
            ))),
        }
    }
}

/// Create an [`AnyArray`] from values
pub fn any<I, V>(values: I) -> Result<AnyArray>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    AnyArray::from_values(values)
}
