//! Storage layer for typed arrays
//!
//! This crate implements the backing store shared by every container:
//! - OrderedStore: insertion-ordered `Key -> Value` map with an FxHashMap
//!   position index, positional pop from either end and lazy traversal in
//!   both directions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ordered;

pub use ordered::{Iter, OrderedStore};
