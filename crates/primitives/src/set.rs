//! Set: ordered sequence with dense integer keys
//!
//! Keys are always `0..n-1`. Removing, shifting or reordering items
//! renumbers the remaining ones, and writing past the end appends. Values
//! may repeat; use `uniq` for distinct values.

use typed_arrays_core::{ContainerOptions, Error, Result, Value};
use typed_arrays_engine::keyed;

typed_container!(
    /// Ordered sequence of values keyed `0..n-1`
    ///
    /// # Example
    ///
    /// ```
    /// use typed_arrays_primitives::Set;
    /// use typed_arrays_core::Value;
    ///
    /// let mut s = Set::from_values([10, 20, 30]).unwrap();
    /// s.remove(&Value::Int(10)).unwrap();
    /// assert_eq!(s.at(0), Some(&Value::Int(20)));
    /// ```
    Set => typed_arrays_core::Kind::Set
);

impl Set {
    /// Empty set with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from values
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::with_values(values, ContainerOptions::for_kind(Self::KIND))
    }

    /// Create from values with explicit options
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

impl TryFrom<Vec<Value>> for Set {
    type Error = Error;

    fn try_from(values: Vec<Value>) -> Result<Self> {
        Self::from_values(values)
    }
}

/// Create a [`Set`] from values
pub fn set<I, V>(values: I) -> Result<Set>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    Set::from_values(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typed_arrays_core::{ErrorKind, ItemType, Key, ValueType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use typed_arrays_engine::Operation;

    #[test]
    fn test_keys_are_dense() {
        let mut s = set([1, 2, 3, 4]).unwrap();
        s.remove_at(1).unwrap();
        s.shift().unwrap();
        assert_eq!(s.keys(), vec![Key::Int(0), Key::Int(1)]);
        assert_eq!(s.to_vec(), vec![Value::Int(3), Value::Int(4)]);
    }

    #[test]
    fn test_write_past_end_appends() {
        let mut s = set([1]).unwrap();
        s.set(5, 2).unwrap();
        assert_eq!(s.keys(), vec![Key::Int(0), Key::Int(1)]);
        assert_eq!(s.at(1), Some(&Value::Int(2)));
    }

    #[test]
    fn test_string_keys_rejected() {
        let mut s = Set::new();
        assert_eq!(s.set("a", 1).unwrap_err().kind(), ErrorKind::KeyType);
        assert_eq!(s.has_key("a").unwrap_err().kind(), ErrorKind::KeyType);
    }

    #[test]
    fn test_only_flip_is_disallowed() {
        let mut s = set([1]).unwrap();
        assert_eq!(s.disallowed(), vec![Operation::Flip]);
        assert_eq!(s.flip().unwrap_err().kind(), ErrorKind::Method);
        s.prepend(0).unwrap();
        assert_eq!(s.to_vec(), vec![Value::Int(0), Value::Int(1)]);
    }

    #[test]
    fn test_pad_and_fill() {
        let mut s = Set::new();
        s.pad(2, "x").unwrap();
        s.fill(2, "y", 1).unwrap();
        assert_eq!(s.to_vec(), vec![Value::from("x"), Value::from("y"), Value::from("y")]);
    }

    #[test]
    fn test_typed_values() {
        let options = ContainerOptions::for_kind(Set::KIND).item_type(ItemType::Basic(ValueType::Float));
        let err = Set::with_values([Value::Float(1.0), Value::Int(2)], options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "All values of Set() must be type of float, int given (offset: 1, value: 2)"
        );
    }

    #[test]
    fn test_from_json() {
        let s = Set::from_json("[1, \"two\", 3.5]").unwrap();
        assert_eq!(s.to_vec(), vec![Value::Int(1), Value::from("two"), Value::Float(3.5)]);
        assert_eq!(Set::from_json("{}").unwrap_err().kind(), ErrorKind::Argument);
    }

    #[test]
    fn test_try_from_vec() {
        let s = Set::try_from(vec![Value::Int(1), Value::Null]);
        assert_eq!(s.unwrap_err().kind(), ErrorKind::NullValue);
    }

    #[test]
    fn test_seeded_shuffle_renumbers() {
        let mut s = set(1..=20).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        s.shuffle_with(&mut rng, None).unwrap();
        assert_eq!(s.keys(), (0..20).map(Key::from).collect::<Vec<Key>>());

        let mut values: Vec<i64> = s.to_vec().iter().filter_map(Value::as_int).collect();
        values.sort();
        assert_eq!(values, (1..=20).collect::<Vec<i64>>());
    }
}
