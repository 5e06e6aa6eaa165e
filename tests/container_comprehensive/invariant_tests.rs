//! Invariant tests
//!
//! Property-based checks over random values and operation sequences.
//! Rejected operations are fine; what matters is the state afterwards.

use crate::test_utils::*;
use typed_arrays::keyed;

#[derive(Debug, Clone)]
enum SetOp {
    Add(Value),
    Unshift(Value),
    Set(i64, Value),
    Unset(i64),
    Pop,
    Shift,
    Remove(Value),
    Reverse,
    Sort,
    Shuffle,
}

fn set_op() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        scalar().prop_map(SetOp::Add),
        scalar().prop_map(SetOp::Unshift),
        (-2i64..12, scalar()).prop_map(|(k, v)| SetOp::Set(k, v)),
        (-2i64..12).prop_map(SetOp::Unset),
        Just(SetOp::Pop),
        Just(SetOp::Shift),
        scalar().prop_map(SetOp::Remove),
        Just(SetOp::Reverse),
        Just(SetOp::Sort),
        Just(SetOp::Shuffle),
    ]
}

fn apply(s: &mut Set, op: SetOp) {
    let _ = match op {
        SetOp::Add(v) => s.add(v).map(|_| ()),
        SetOp::Unshift(v) => s.unshift(v).map(|_| ()),
        SetOp::Set(k, v) => s.set(k, v).map(|_| ()),
        SetOp::Unset(k) => s.unset(k).map(|_| ()),
        SetOp::Pop => s.pop().map(|_| ()),
        SetOp::Shift => s.shift().map(|_| ()),
        SetOp::Remove(v) => s.remove(&v).map(|_| ()),
        SetOp::Reverse => s.reverse().map(|_| ()),
        SetOp::Sort => s.sort(SortFlags::Regular).map(|_| ()),
        SetOp::Shuffle => s.shuffle(None).map(|_| ()),
    };
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fuzz_map_keys_never_digit_like(
        writes in prop::collection::vec(("[a-z0-9-]{1,4}", non_null_scalar()), 0..20)
    ) {
        let mut m = Map::new();
        for (key, value) in writes {
            let accepted = m.set(key.as_str(), value).is_ok();
            prop_assert_eq!(accepted, !Key::from(key.as_str()).is_digit_like());
            assert_map_keys(&m);
        }
    }

    #[test]
    fn fuzz_set_keys_dense_after_mutations(
        initial in prop::collection::vec(non_null_scalar(), 0..8),
        ops in prop::collection::vec(set_op(), 0..30),
    ) {
        let mut s = set(initial).unwrap();
        for op in ops {
            apply(&mut s, op);
            assert_dense(&s);
        }
    }

    #[test]
    fn fuzz_copy_round_trip_and_independence(
        values in prop::collection::vec(non_null_scalar(), 0..10),
        extra in non_null_scalar(),
    ) {
        let mut original = set(values).unwrap();
        let before = original.to_array(false);
        let mut copy = original.copy();
        prop_assert_eq!(copy.to_array(false), original.to_array(false));

        copy.add(extra.clone()).unwrap();
        prop_assert_eq!(original.to_array(false), before.clone());

        original.empty().unwrap();
        prop_assert_eq!(copy.size(), before.len() + 1);
    }

    #[test]
    fn fuzz_map_copy_round_trip_and_independence(
        entries in prop::collection::vec((map_key(), non_null_scalar()), 0..10),
        extra in non_null_scalar(),
    ) {
        let mut original = Map::from_pairs(entries).unwrap();
        let before = original.to_array(false);
        let mut copy = original.copy();
        let rebuilt = Container::new(Kind::Map, copy.copy_array()).unwrap();
        prop_assert_eq!(rebuilt.to_array(false), before.clone());
        prop_assert_eq!(rebuilt.to_json().unwrap(), original.to_json().unwrap());

        copy.put("copy_only", extra).unwrap();
        prop_assert_eq!(original.to_array(false), before.clone());

        original.empty().unwrap();
        prop_assert_eq!(copy.size(), before.len() + 1);
        assert_map_keys(&copy);
    }

    #[test]
    fn fuzz_any_copy_round_trip_and_independence(
        entries in prop::collection::vec((any_key(), scalar()), 0..10),
        extra in scalar(),
    ) {
        let mut original = AnyArray::from_pairs(entries).unwrap();
        let before = original.to_array(false);
        prop_assert_eq!(original.to_object().len(), original.size());

        let mut copy = original.copy();
        let rebuilt = AnyArray::from_pairs(copy.copy_array()).unwrap();
        prop_assert_eq!(rebuilt.to_array(false), before.clone());

        copy.unpop(extra).unwrap();
        prop_assert_eq!(original.to_array(false), before.clone());

        original.empty().unwrap();
        prop_assert_eq!(copy.size(), before.len() + 1);
    }

    #[test]
    fn fuzz_reset_on_read_only_keeps_size(
        values in prop::collection::vec(non_null_scalar(), 0..10),
        replacement in prop::collection::vec(non_null_scalar(), 0..10),
    ) {
        let mut t = tuple(values).unwrap();
        let size = t.size();
        let err = t.reset(keyed(replacement)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Mutation);
        prop_assert_eq!(t.size(), size);

        let options = ContainerOptions::for_kind(Kind::Set).read_only(true);
        let mut s = Set::with_values(t.to_vec(), options).unwrap();
        prop_assert_eq!(s.reset(Vec::new()).unwrap_err().kind(), ErrorKind::Mutation);
        prop_assert_eq!(s.size(), size);
    }

    #[test]
    fn fuzz_pop_unpop_restores_size(
        values in prop::collection::vec(non_null_scalar(), 1..10),
        v in non_null_scalar(),
    ) {
        let mut s = set(values.clone()).unwrap();
        let size = s.size();
        s.pop().unwrap();
        s.unpop(v.clone()).unwrap();
        prop_assert_eq!(s.size(), size);

        let mut a = AnyArray::from_values(values).unwrap();
        a.pop().unwrap();
        a.unpop(v.clone()).unwrap();
        prop_assert_eq!(a.size(), size);
    }

    #[test]
    fn fuzz_map_pop_then_set_restores_size(
        keys in prop::collection::btree_set(map_key(), 1..8),
        v in non_null_scalar(),
    ) {
        let mut m = Map::from_pairs(keys.iter().map(|k| (k.clone(), Value::Int(1)))).unwrap();
        let size = m.size();
        let last = m.last_key().cloned();
        m.pop().unwrap();
        // Map disallows unpop; re-insert under the popped key instead
        if let Some(key) = last {
            m.set(key, v).unwrap();
        }
        prop_assert_eq!(m.size(), size);
        assert_map_keys(&m);
    }
}
