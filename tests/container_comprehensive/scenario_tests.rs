//! Scenario tests
//!
//! Fixed inputs with exact expected outputs, one per documented scenario,
//! plus end-to-end flows that cross the facade.

use crate::test_utils::*;

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn test_map_sort_key_already_sorted_is_stable() {
    let mut m = int_map(&[("a", 1), ("b", 2)]);
    m.sort_key().unwrap();
    assert_eq!(
        m.items(),
        vec![(Key::from("a"), Value::Int(1)), (Key::from("b"), Value::Int(2))]
    );
}

#[test]
fn test_set_uniq_and_uniqs() {
    let s = int_set(&[1, 2, 2, 3]);
    assert_eq!(ints_of(&s.uniq()), vec![1, 2, 3]);
    assert_eq!(ints_of(&s.uniqs()), vec![1, 3]);
    // Queries never mutate
    assert_eq!(s.to_vec(), vec![Value::Int(1), Value::Int(2), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_empty_any_pop_returns_none() {
    let mut a = AnyArray::new();
    assert_eq!(a.pop().unwrap(), None);
    assert_eq!(a.size(), 0);
    assert_eq!(a.shift().unwrap(), None);
    assert!(a.is_empty());
}

#[test]
fn test_tuple_set_is_mutation_error() {
    let mut t = tuple([1, 2, 3]).unwrap();
    let err = t.set(0, 9).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Mutation);
    assert_eq!(t.to_vec(), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_map_merge_set_is_argument_error() {
    let mut m = int_map(&[("x", 1)]);
    let s = int_set(&[1]);
    let err = m.merge(s.as_container()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(m.size(), 1);
}

// =============================================================================
// End-to-end flows
// =============================================================================

#[test]
fn test_set_mutations_keep_keys_dense() {
    let mut s = int_set(&[10, 20, 30]);
    s.unset(1).unwrap();
    assert_dense(&s);
    s.unshift(5).unwrap();
    assert_dense(&s);
    s.set(99, 40).unwrap();
    assert_dense(&s);
    assert_eq!(s.to_vec(), vec![Value::Int(5), Value::Int(10), Value::Int(30), Value::Int(40)]);
}

#[test]
fn test_map_rejects_numeric_keys() {
    let mut m = Map::new();
    assert_eq!(m.set("12", 1).unwrap_err().kind(), ErrorKind::KeyType);
    assert_eq!(m.set(3, 1).unwrap_err().kind(), ErrorKind::KeyType);
    m.set("a1", 1).unwrap();
    assert_map_keys(&m);
}

#[test]
fn test_set_rejects_string_keys_on_read() {
    let s = int_set(&[1]);
    assert_eq!(s.get("0").unwrap_err().kind(), ErrorKind::KeyType);
    assert_eq!(s.get(5).unwrap(), None);
}

#[test]
fn test_typed_set_rejects_wrong_item() {
    let options = ContainerOptions::for_kind(Kind::Set).item_type(ItemType::Basic(ValueType::Int));
    let mut s = Set::with_values([1, 2], options).unwrap();
    let err = s.add("three").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueType);
    assert_eq!(s.size(), 2);
}

#[test]
fn test_null_rejected_outside_any() {
    let mut s = int_set(&[1]);
    assert_eq!(s.add(Value::Null).unwrap_err().kind(), ErrorKind::NullValue);
    let mut a = AnyArray::new();
    a.add(Value::Null).unwrap();
    assert_eq!(a.size(), 1);
}

#[test]
fn test_merge_same_kind() {
    let mut left = int_set(&[1, 2]);
    let right = int_set(&[3]);
    left.merge(right.as_container()).unwrap();
    assert_eq!(left.to_vec(), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert_dense(&left);

    let mut a = int_map(&[("x", 1), ("y", 2)]);
    let b = int_map(&[("y", 20), ("z", 3)]);
    a.merge(b.as_container()).unwrap();
    assert_eq!(a.get("y").unwrap(), Some(Value::Int(20)));
    assert_eq!(a.size(), 3);
}

#[test]
fn test_sum_and_average() {
    let s = set([Value::Int(1), Value::Int(2), Value::Float(1.5)]).unwrap();
    let total = s.sum(true).unwrap();
    assert_eq!(total.value, Some(Value::Float(4.5)));
    assert_eq!(total.count, 3);
    assert_eq!(s.sum_avg(true).unwrap(), Some(1.5));
}

#[test]
fn test_protocol_command_round() {
    let mut s = Set::new();
    assert_eq!(s.execute(Command::Unpop { value: Value::Int(1) }).unwrap(), Output::Size(1));
    assert_eq!(s.execute(Command::Unpop { value: Value::Int(2) }).unwrap(), Output::Size(2));
    let out = s.execute(Command::Shift).unwrap();
    assert_eq!(out.into_value(), Some(Value::Int(1)));
    assert_eq!(s.keys(), vec![Key::Int(0)]);
}

#[test]
fn test_to_json_by_kind() {
    assert_eq!(int_set(&[1, 2]).to_json().unwrap(), "[1,2]");
    assert_eq!(int_map(&[("a", 1)]).to_json().unwrap(), r#"{"a":1}"#);
}

#[test]
fn test_sort_flags_on_set() {
    let mut s = set(["10", "9", "2"]).unwrap();
    s.sort(SortFlags::Numeric).unwrap();
    assert_eq!(s.to_vec(), vec![Value::from("2"), Value::from("9"), Value::from("10")]);
    s.sort(SortFlags::String).unwrap();
    assert_eq!(s.to_vec(), vec![Value::from("10"), Value::from("2"), Value::from("9")]);
    assert_dense(&s);
}

#[test]
fn test_error_messages_name_container() {
    let mut t = tuple([1]).unwrap();
    let err = t.pop().unwrap_err();
    assert!(err.to_string().contains("Tuple"), "{}", err);
    let m = Map::new();
    let err = m.get(1).unwrap_err();
    assert!(err.to_string().starts_with("Map()"), "{}", err);
}
