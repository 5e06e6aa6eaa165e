//! Typed containers for typed-arrays
//!
//! Provides the four container variants as thin, kind-fixed wrappers over
//! the engine's [`Container`]:
//! - **Map**: string keys only; positional inserts are disallowed
//! - **Set**: dense integer keys `0..n-1`
//! - **Tuple**: like Set, but always read-only
//! - **AnyArray**: integer and string keys, nulls allowed by default
//!
//! ## Design Principle: One Engine, Four Configurations
//!
//! Every variant owns exactly one `Container` and adds no state of its own.
//! Kind-specific behaviour (key shape, disallowed operations, read-only
//! tuples) is enforced by the engine from the container's kind, so the full
//! operation surface is reachable through `Deref`:
//!
//! ```
//! use typed_arrays_primitives::{map, set};
//! use typed_arrays_core::Value;
//!
//! let mut prices = map([("apple", 3), ("pear", 5)]).unwrap();
//! prices.set("plum", 4).unwrap();
//! assert_eq!(prices.sum(true).unwrap().value, Some(Value::Int(12)));
//!
//! let mut ids = set([3, 1, 2]).unwrap();
//! ids.sort(Default::default()).unwrap();
//! assert_eq!(ids.to_vec(), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use typed_arrays_core::{Error, Kind, Result, Value};

macro_rules! typed_container {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(::typed_arrays_engine::Container);

        impl $name {
            /// Kind of every container of this type
            pub const KIND: ::typed_arrays_core::Kind = $kind;

            /// Create from keyed items with explicit options
            pub fn with_options<I>(
                items: I,
                options: ::typed_arrays_core::ContainerOptions,
            ) -> ::typed_arrays_core::Result<Self>
            where
                I: IntoIterator<Item = (::typed_arrays_core::Key, ::typed_arrays_core::Value)>,
            {
                ::typed_arrays_engine::Container::with_options(Self::KIND, items, options).map(Self)
            }

            /// Create from a parsed configuration; its kind must match
            pub fn from_config<I>(
                config: &::typed_arrays_core::ContainerConfig,
                items: I,
            ) -> ::typed_arrays_core::Result<Self>
            where
                I: IntoIterator<Item = (::typed_arrays_core::Key, ::typed_arrays_core::Value)>,
            {
                if config.kind != Self::KIND {
                    return Err(crate::kind_mismatch(config.kind, Self::KIND));
                }
                ::typed_arrays_engine::Container::from_config(config, items).map(Self)
            }

            /// Underlying container
            pub fn as_container(&self) -> &::typed_arrays_engine::Container {
                &self.0
            }

            /// Unwrap into the underlying container
            pub fn into_inner(self) -> ::typed_arrays_engine::Container {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(::typed_arrays_engine::Container::empty_of(Self::KIND))
            }
        }

        impl std::ops::Deref for $name {
            type Target = ::typed_arrays_engine::Container;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<$name> for ::typed_arrays_engine::Container {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<::typed_arrays_engine::Container> for $name {
            type Error = ::typed_arrays_core::Error;

            fn try_from(container: ::typed_arrays_engine::Container) -> ::typed_arrays_core::Result<Self> {
                if container.kind() != Self::KIND {
                    return Err(crate::kind_mismatch(container.kind(), Self::KIND));
                }
                Ok(Self(container))
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = (&'a ::typed_arrays_core::Key, &'a ::typed_arrays_core::Value);
            type IntoIter = ::typed_arrays_storage::Iter<'a>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

pub mod any;
pub mod map;
pub mod set;
pub mod tuple;

pub use any::{any, AnyArray};
pub use map::{map, Map};
pub use set::{set, Set};
pub use tuple::{tuple, Tuple};

fn kind_mismatch(given: Kind, expected: Kind) -> Error {
    Error::argument(format!(
        "Given {} is not a {}",
        given.container_name(),
        expected.container_name()
    ))
}

fn parse_json(text: &str) -> Result<serde_json::Value> {
    serde_json::from_str(text).map_err(|e| Error::argument(format!("Invalid JSON: {}", e)))
}

fn json_array(text: &str, kind: Kind) -> Result<Vec<Value>> {
    match parse_json(text)? {
        serde_json::Value::Array(items) => Ok(items.into_iter().map(Value::from).collect()),
        other => Err(Error::argument(format!(
            "{}() expects a JSON array, {} given",
            kind.container_name(),
            Value::from(other).type_name()
        ))),
    }
}
