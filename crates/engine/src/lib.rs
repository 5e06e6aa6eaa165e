//! Container engine for typed-arrays
//!
//! This crate builds the container behaviour on top of the ordered store:
//! - Validation: key shape, key type, null policy and item type per kind
//! - Policy: the operation vocabulary and what each kind disallows
//! - Protocol: the set/get/put/push/pull/pop/shift/unpop/unshift commands
//! - Container: the full operation surface (search, sort, slice, calc, ...)
//! - Collation: the scoped process-wide locale used by locale-aware sorts
//!
//! Typed wrappers (Map, Set, Tuple, AnyArray) live in the primitives crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collation;
pub mod command;
pub mod container;
pub mod output;
pub mod policy;
mod protocol;
pub mod validate;

pub use collation::CollationGuard;
pub use command::Command;
pub use container::{
    compare_keys, keyed, merge_keys, natural_cmp, renumber, CalcResult, Container, Extension,
    Operator, Sample, SortFlags,
};
pub use output::Output;
pub use policy::Operation;
pub use validate::Validator;
