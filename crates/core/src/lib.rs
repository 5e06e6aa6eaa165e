//! Core types for typed arrays
//!
//! This crate defines the foundational types used throughout the system:
//! - Value: Unified value enum (null, bool, int, float, string, array, object)
//! - Key: Integer or string container key
//! - Kind: Container category (Any, Map, Set, Tuple)
//! - ItemType / ValueType: Value classification and constraints
//! - classify: Type and key-shape classification
//! - Error: Error taxonomy shared by every layer
//! - ContainerConfig / ContainerOptions: Construction settings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod config;
pub mod error;
pub mod key;
pub mod types;
pub mod value;

pub use config::{ContainerConfig, ContainerOptions};
pub use error::{Error, ErrorKind, Result};
pub use key::Key;
pub use types::{CalcPolicy, ItemType, Kind, Pairs, ValueType};
pub use value::{Number, Object, Value};
