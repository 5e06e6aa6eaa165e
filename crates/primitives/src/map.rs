//! Map: ordered string-keyed container
//!
//! ## Keys
//!
//! Keys are strings that never look like integer indexes. `"12"` and
//! `"-3"` are rejected with a key error at construction and on every
//! write; reads with such keys are allowed and simply find nothing.
//!
//! ## Disallowed operations
//!
//! Positional inserts have no meaning without integer keys, so `add`,
//! `append`, `prepend`, `unpop`, `unshift`, `pad` and `fill` raise a method
//! error, as does `flip`.

use typed_arrays_core::{ContainerOptions, Error, Key, Result, Value};

typed_container!(
    /// Ordered map from non-numeric string keys to values
    ///
    /// # Example
    ///
    /// ```
    /// use typed_arrays_primitives::Map;
    /// use typed_arrays_core::Value;
    ///
    /// let mut m = Map::from_pairs([("a", 1), ("b", 2)]).unwrap();
    /// m.put("c", 3).unwrap();
    /// assert_eq!(m.key_names(), vec!["a", "b", "c"]);
    /// assert!(m.unshift(0).is_err());
    /// ```
    Map => typed_arrays_core::Kind::Map
);

impl Map {
    /// Empty map with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from `(key, value)` pairs
    pub fn from_pairs<I, K, V>(items: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::with_options(pairs(items), ContainerOptions::for_kind(Self::KIND))
    }

    /// Create from a JSON object
    pub fn from_json(text: &str) -> Result<Self> {
        match crate::parse_json(text)? {
            serde_json::Value::Object(fields) => {
                Self::from_pairs(fields.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
            other => Err(Error::argument(format!(
                "Map() expects a JSON object, {} given",
                Value::from(other).type_name()
            ))),
        }
    }

    /// Keys as string slices, in order
    pub fn key_names(&self) -> Vec<&str> {
        self.store().keys().filter_map(Key::as_str).collect()
    }

    /// `(key, value)` entries with borrowed string keys
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.iter().filter_map(|(k, v)| k.as_str().map(|k| (k, v)))
    }
}

fn pairs<I, K, V>(items: I) -> Vec<(Key, Value)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    items
        .into_iter()
        .map(|(k, v)| (Key::Str(k.into()), v.into()))
        .collect()
}

/// Create a [`Map`] from `(key, value)` pairs
pub fn map<I, K, V>(items: I) -> Result<Map>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    Map::from_pairs(items)
}
