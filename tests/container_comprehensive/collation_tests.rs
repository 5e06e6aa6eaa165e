//! Collation tests
//!
//! `sort_locale` swaps the process-wide collation and must always put the
//! previous one back. Each test holds the collation lock so parallel tests
//! never see each other's locale.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::test_utils::*;
use typed_arrays::collation::{self, CollationGuard};

fn words() -> Set {
    set(["pear", "Apple", "banana"]).unwrap()
}

#[test]
fn test_sort_locale_orders_case_insensitively() {
    let _lock = collation::lock();
    let before = collation::current();
    let mut s = words();
    s.sort_locale("en_US").unwrap();
    assert_eq!(
        s.to_vec(),
        vec![Value::from("Apple"), Value::from("banana"), Value::from("pear")]
    );
    assert_eq!(collation::current(), before);
}

#[test]
fn test_byte_locale_orders_uppercase_first() {
    let _lock = collation::lock();
    let mut s = set(["b", "B", "a"]).unwrap();
    s.sort_locale("C").unwrap();
    assert_eq!(s.to_vec(), vec![Value::from("B"), Value::from("a"), Value::from("b")]);
}

#[test]
fn test_restored_after_comparator_error() {
    let _lock = collation::lock();
    let before = collation::current();
    let mut s = words();
    let original = s.to_vec();

    let err = s
        .sort_locale_by("de_DE", |_, _| {
            assert_eq!(collation::current(), "de_DE");
            Err(Error::operation("comparator failed"))
        })
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Operation);
    assert_eq!(collation::current(), before);
    // A failed sort commits nothing
    assert_eq!(s.to_vec(), original);
}

#[test]
fn test_restored_after_comparator_panic() {
    let _lock = collation::lock();
    let before = collation::current();
    let mut s = words();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = s.sort_locale_by("fr_FR", |_, _| panic!("comparator panicked"));
    }));

    assert!(result.is_err());
    assert_eq!(collation::current(), before);
}

#[test]
fn test_nested_guards_unwind_in_order() {
    let _lock = collation::lock();
    let before = collation::current();
    {
        let _outer = CollationGuard::install("en_GB");
        let mut s = words();
        s.sort_locale("sv_SE").unwrap();
        assert_eq!(collation::current(), "en_GB");
    }
    assert_eq!(collation::current(), before);
}

#[test]
fn test_configured_default_locale() {
    let _lock = collation::lock();
    let options = ContainerOptions::for_kind(Kind::Set).locale("en_US");
    let mut s = Set::with_values(["b", "A", "c"], options).unwrap();
    s.sort_locale_default().unwrap();
    assert_eq!(s.to_vec(), vec![Value::from("A"), Value::from("b"), Value::from("c")]);
    assert_eq!(collation::current(), collation::DEFAULT_LOCALE);
}

#[test]
fn test_tuple_sort_locale_rejected_without_touching_collation() {
    let _lock = collation::lock();
    let before = collation::current();
    let mut t = tuple(["b", "a"]).unwrap();
    assert_eq!(t.sort_locale("en_US").unwrap_err().kind(), ErrorKind::Mutation);
    assert_eq!(collation::current(), before);
}
