//! Test utilities for the container comprehensive tests
//!
//! Provides builders for each kind, proptest strategies and shared
//! assertions. `typed_arrays::any` is not re-exported here because it
//! would shadow proptest's `any`.

pub use proptest::prelude::*;
pub use typed_arrays::{
    map, set, tuple, AnyArray, CalcPolicy, Command, Container, ContainerConfig,
    ContainerOptions, Error, ErrorKind, ItemType, Key, Kind, Map, Output, Pairs, Set, SortFlags,
    Tuple, Value, ValueType,
};

// =============================================================================
// Builders
// =============================================================================

/// Set of ints
pub fn int_set(values: &[i64]) -> Set {
    set(values.iter().copied()).unwrap()
}

/// Map of `name -> int`
pub fn int_map(entries: &[(&str, i64)]) -> Map {
    map(entries.iter().map(|&(k, v)| (k, v))).unwrap()
}

/// Values of a pair list
pub fn values_of(pairs: &Pairs) -> Vec<Value> {
    pairs.iter().map(|(_, v)| v.clone()).collect()
}

/// Ints of a pair list
pub fn ints_of(pairs: &Pairs) -> Vec<i64> {
    pairs.iter().filter_map(|(_, v)| v.as_int()).collect()
}

// =============================================================================
// Assertions
// =============================================================================

/// Keys are exactly `0..size-1` in order
pub fn assert_dense(c: &Container) {
    for (i, key) in c.keys().iter().enumerate() {
        assert_eq!(key, &Key::Int(i as i64), "keys not dense: {:?}", c.keys());
    }
}

/// Every key is a string that does not look like an index
pub fn assert_map_keys(c: &Container) {
    for key in c.keys() {
        assert!(key.is_str(), "non-string map key {:?}", key);
        assert!(!key.is_digit_like(), "digit-like map key {:?}", key);
    }
}

// =============================================================================
// Strategies
// =============================================================================

/// Small scalar values, null included
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-100i64..100).prop_map(Value::Int),
        (-100.0f64..100.0).prop_map(Value::Float),
        "[a-z0-9]{0,4}".prop_map(Value::from),
    ]
}

/// Non-null scalar values
pub fn non_null_scalar() -> impl Strategy<Value = Value> {
    scalar().prop_filter("non-null", |v| !v.is_null())
}

/// Keys that are valid for Map writes
pub fn map_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}"
}

/// Keys for AnyArray writes, including strings that spell an integer
pub fn any_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        (0i64..20).prop_map(Key::Int),
        "[0-9]{1,2}".prop_map(Key::Str),
        map_key().prop_map(Key::Str),
    ]
}
