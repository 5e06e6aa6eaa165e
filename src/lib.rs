//! typed-arrays - Typed, ordered key-value and sequence containers
//!
//! Four container flavours share one engine:
//! - [`Map`]: ordered map with non-numeric string keys
//! - [`Set`]: sequence with dense `0..n-1` integer keys
//! - [`Tuple`]: read-only sequence
//! - [`AnyArray`]: mixed integer and string keys, nulls allowed
//!
//! # Quick Start
//!
//! ```
//! use typed_arrays::{map, set, tuple, Value, SortFlags};
//!
//! let mut scores = map([("ada", 36), ("alan", 41)]).unwrap();
//! scores.put("grace", 85).unwrap();
//! assert_eq!(scores.max(true), Some(Value::Int(85)));
//!
//! let mut ids = set([3, 1, 2]).unwrap();
//! ids.sort(SortFlags::Regular).unwrap();
//! assert_eq!(ids.first(), Some(&Value::Int(1)));
//!
//! let point = tuple([1.5, 2.5]).unwrap();
//! assert!(point.is_read_only());
//! ```
//!
//! # Architecture
//!
//! Every operation goes through the container gate (read-only, then the
//! kind's disallowed operations, then key, null and item-type checks)
//! before touching the store. Writes are expressed as [`Command`]s and
//! dispatched by [`Container::execute`]; a failing command leaves the store
//! unchanged.
//!
//! Internal crates (core, storage, engine, primitives) are re-exported
//! here; depend on this crate only.

pub use typed_arrays_core::{
    classify, CalcPolicy, ContainerConfig, ContainerOptions, Error, ErrorKind, ItemType, Key,
    Kind, Number, Object, Pairs, Result, Value, ValueType,
};
pub use typed_arrays_engine::{
    collation, keyed, merge_keys, renumber, CalcResult, CollationGuard, Command, Container,
    Extension, Operation, Operator, Output, Sample, SortFlags, Validator,
};
pub use typed_arrays_primitives::{any, map, set, tuple, AnyArray, Map, Set, Tuple};
pub use typed_arrays_storage::OrderedStore;
