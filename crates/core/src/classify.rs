//! Type and shape classification
//!
//! Pure functions used by validation and by key checks:
//! - `classify`: value -> [`ValueType`]
//! - `is_sequential_shape`: keys are exactly `0..n-1` in order
//! - `is_associative_shape`: every key is a non-numeric string

use crate::key::Key;
use crate::types::ValueType;
use crate::value::Value;

/// Classify a value into its primitive category
pub fn classify(value: &Value) -> ValueType {
    value.value_type()
}

/// True iff the keys are exactly `0, 1, ..., n-1` in iteration order.
///
/// An empty key sequence is sequential.
pub fn is_sequential_keys<'a, I>(keys: I) -> bool
where
    I: IntoIterator<Item = &'a Key>,
{
    keys.into_iter()
        .enumerate()
        .all(|(i, key)| key.as_int() == Some(i as i64))
}

/// True iff every key is a string that does not look like an integer index.
///
/// An empty key sequence is associative.
pub fn is_associative_keys<'a, I>(keys: I) -> bool
where
    I: IntoIterator<Item = &'a Key>,
{
    keys.into_iter().all(is_map_key)
}

/// Sequential shape check over key-value items
pub fn is_sequential_shape(items: &[(Key, Value)]) -> bool {
    is_sequential_keys(items.iter().map(|(k, _)| k))
}

/// Associative shape check over key-value items
pub fn is_associative_shape(items: &[(Key, Value)]) -> bool {
    is_associative_keys(items.iter().map(|(k, _)| k))
}

/// A key acceptable for Map containers
pub fn is_map_key(key: &Key) -> bool {
    key.is_str() && !key.is_digit_like()
}

/// A key acceptable for Set and Tuple containers
pub fn is_set_key(key: &Key) -> bool {
    matches!(key, Key::Int(i) if *i >= 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pairs(keys: Vec<Key>) -> Vec<(Key, Value)> {
        keys.into_iter().map(|k| (k, Value::Int(0))).collect()
    }

    #[test]
    fn test_classify_all_categories() {
        assert_eq!(classify(&Value::Null), ValueType::Null);
        assert_eq!(classify(&Value::Int(1)), ValueType::Int);
        assert_eq!(classify(&Value::Float(1.0)), ValueType::Float);
        assert_eq!(classify(&Value::from("s")), ValueType::String);
        assert_eq!(classify(&Value::Bool(false)), ValueType::Bool);
        assert_eq!(classify(&Value::Array(vec![])), ValueType::Array);
    }

    #[test]
    fn test_sequential_shape() {
        assert!(is_sequential_shape(&[]));
        assert!(is_sequential_shape(&pairs(vec![Key::Int(0), Key::Int(1)])));
        assert!(!is_sequential_shape(&pairs(vec![Key::Int(1), Key::Int(0)])));
        assert!(!is_sequential_shape(&pairs(vec![Key::Int(0), Key::Int(2)])));
        assert!(!is_sequential_shape(&pairs(vec![Key::from("0")])));
    }

    #[test]
    fn test_associative_shape() {
        assert!(is_associative_shape(&[]));
        assert!(is_associative_shape(&pairs(vec![Key::from("a"), Key::from("b")])));
        assert!(!is_associative_shape(&pairs(vec![Key::from("a"), Key::Int(1)])));
        assert!(!is_associative_shape(&pairs(vec![Key::from("12")])));
    }

    #[test]
    fn test_key_predicates() {
        assert!(is_map_key(&Key::from("name")));
        assert!(!is_map_key(&Key::from("3")));
        assert!(!is_map_key(&Key::Int(3)));
        assert!(is_set_key(&Key::Int(0)));
        assert!(!is_set_key(&Key::Int(-1)));
        assert!(!is_set_key(&Key::from("a")));
    }

    proptest! {
        #[test]
        fn fuzz_parsed_integers_are_never_map_keys(i in any::<i64>()) {
            let key = Key::parse(&i.to_string());
            prop_assert_eq!(&key, &Key::Int(i));
            prop_assert!(!is_map_key(&key));
        }

        #[test]
        fn fuzz_dense_keys_are_sequential(n in 0usize..32) {
            let items: Vec<(Key, Value)> = (0..n).map(|i| (Key::from(i), Value::Null)).collect();
            prop_assert!(is_sequential_shape(&items));
            prop_assert_eq!(is_associative_shape(&items), n == 0);
        }
    }
}
