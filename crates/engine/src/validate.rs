//! Invariant validation
//!
//! Checks run before anything touches the store, so a failing check leaves
//! the container unmodified.
//!
//! ## Construction
//!
//! 1. Shape: Map items must be associative, Set/Tuple items sequential
//! 2. Per item, in order: null policy, then the declared item type
//!
//! The first violation aborts. Kind `Any` skips construction checks entirely.
//!
//! ## Writes
//!
//! Single-value writes check the key shape for the kind, then the null
//! policy, then the item type.

use tracing::debug;
use typed_arrays_core::classify::{is_associative_shape, is_map_key, is_sequential_shape, is_set_key};
use typed_arrays_core::{ContainerOptions, Error, ItemType, Key, Kind, Result, Value};

const MAP_SHAPE: &str = "associative arrays with string keys";
const SET_SHAPE: &str = "non-associative items with int keys";
const MAP_KEY: &str = "non-numeric string";
const SET_KEY: &str = "non-negative int";

/// Invariant checker bound to one container's kind and options
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    kind: Kind,
    item_type: Option<&'a ItemType>,
    allow_nulls: bool,
}

impl<'a> Validator<'a> {
    /// Create a validator for a container kind and its options
    pub fn new(kind: Kind, options: &'a ContainerOptions) -> Self {
        Self {
            kind,
            item_type: options.item_type.as_ref(),
            allow_nulls: options.allow_nulls,
        }
    }

    fn container(&self) -> &'static str {
        self.kind.container_name()
    }

    /// Validate an initial item collection
    pub fn validate(&self, items: &[(Key, Value)]) -> Result<()> {
        if self.kind == Kind::Any || items.is_empty() {
            return Ok(());
        }
        let result = self.check_shape(items).and_then(|_| {
            items
                .iter()
                .enumerate()
                .try_for_each(|(offset, (_, value))| self.check_item(offset, value))
        });
        if let Err(ref e) = result {
            debug!(target: "typed_arrays::validate", container = self.container(), error = %e, "Validation failed");
        }
        result
    }

    /// Validate a replacement item collection (reset, merge, map, ...).
    ///
    /// Unlike construction, the null policy and item type are also enforced
    /// for `Any`; only the shape check is kind-specific.
    pub fn validate_replacement(&self, items: &[(Key, Value)]) -> Result<()> {
        if self.kind != Kind::Any {
            return self.validate(items);
        }
        items
            .iter()
            .enumerate()
            .try_for_each(|(offset, (_, value))| self.check_item(offset, value))
    }

    /// Key shape check for the whole collection
    pub fn check_shape(&self, items: &[(Key, Value)]) -> Result<()> {
        let (ok, expected) = match self.kind {
            Kind::Map => (is_associative_shape(items), MAP_SHAPE),
            Kind::Set | Kind::Tuple => (is_sequential_shape(items), SET_SHAPE),
            Kind::Any => return Ok(()),
        };
        if ok {
            Ok(())
        } else {
            Err(Error::Shape {
                container: self.container().to_string(),
                expected: expected.to_string(),
            })
        }
    }

    /// Check one item of a collection at `offset`
    pub fn check_item(&self, offset: usize, value: &Value) -> Result<()> {
        if value.is_null() {
            return if self.allow_nulls {
                Ok(())
            } else {
                Err(Error::NullValue {
                    container: self.container().to_string(),
                    offset: Some(offset),
                })
            };
        }
        self.check_type(offset, value)
    }

    /// Check a value about to be written at `position`
    pub fn check_write(&self, position: usize, value: &Value) -> Result<()> {
        self.check_null(value)?;
        if value.is_null() {
            return Ok(());
        }
        self.check_type(position, value)
    }

    /// Null policy only
    pub fn check_null(&self, value: &Value) -> Result<()> {
        if value.is_null() && !self.allow_nulls {
            return Err(Error::NullValue {
                container: self.container().to_string(),
                offset: None,
            });
        }
        Ok(())
    }

    fn check_type(&self, offset: usize, value: &Value) -> Result<()> {
        match self.item_type {
            Some(item_type) if !item_type.accepts(value) => Err(Error::ValueType {
                container: self.container().to_string(),
                offset,
                expected: item_type.to_string(),
                actual: value.describe_type(),
                value: value.export(),
            }),
            _ => Ok(()),
        }
    }

    /// Key check for writes: Map keys must be non-numeric strings,
    /// Set/Tuple keys non-negative integers
    pub fn check_write_key(&self, key: &Key) -> Result<()> {
        let (ok, expected) = match self.kind {
            Kind::Map => (is_map_key(key), MAP_KEY),
            Kind::Set | Kind::Tuple => (is_set_key(key), SET_KEY),
            Kind::Any => return Ok(()),
        };
        if ok {
            Ok(())
        } else {
            Err(self.key_error(expected, key))
        }
    }

    /// Key check for reads: only the key type must match the kind
    pub fn check_read_key(&self, key: &Key) -> Result<()> {
        let (ok, expected) = match self.kind {
            Kind::Map => (key.is_str(), "string"),
            Kind::Set | Kind::Tuple => (key.is_int(), "int"),
            Kind::Any => return Ok(()),
        };
        if ok {
            Ok(())
        } else {
            Err(self.key_error(expected, key))
        }
    }

    fn key_error(&self, expected: &str, key: &Key) -> Error {
        let actual = match key {
            Key::Int(i) if *i < 0 => format!("negative int {}", i),
            Key::Int(_) => "int".to_string(),
            Key::Str(s) if key.is_digit_like() => format!("numeric string '{}'", s),
            Key::Str(_) => "string".to_string(),
        };
        Error::KeyType {
            container: self.container().to_string(),
            expected: expected.to_string(),
            actual,
        }
    }
}
