//! Container type vocabulary
//!
//! This module defines:
//! - Kind: Structural category of a container (Any, Map, Set, Tuple)
//! - ValueType: Classification categories for values
//! - ItemType: Optional per-container constraint on values
//! - CalcPolicy: How arithmetic folds treat non-numeric values
//! - Pairs: An ordered list of key-value items

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::key::Key;
use crate::value::Value;

/// Ordered list of `(key, value)` items
pub type Pairs = Vec<(Key, Value)>;

/// Structural category of a container
///
/// The kind fixes the key shape and the default read-only / null policies:
///
/// | Kind | Keys | Read-only | Nulls |
/// |------|------|-----------|-------|
/// | Any | int or string | no | allowed |
/// | Map | non-numeric strings | no | rejected |
/// | Set | dense `0..n-1` | no | rejected |
/// | Tuple | dense `0..n-1` | always | rejected |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Unrestricted array
    Any,
    /// String-keyed map
    Map,
    /// Sequential set
    Set,
    /// Immutable sequential set
    Tuple,
}

impl Kind {
    /// Kind name (`Any`, `Map`, `Set`, `Tuple`)
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Any => "Any",
            Kind::Map => "Map",
            Kind::Set => "Set",
            Kind::Tuple => "Tuple",
        }
    }

    /// Name of the container type used in diagnostics
    pub fn container_name(&self) -> &'static str {
        match self {
            Kind::Any => "AnyArray",
            Kind::Map => "Map",
            Kind::Set => "Set",
            Kind::Tuple => "Tuple",
        }
    }

    /// Map-like containers require associative (string) keys
    pub fn is_map_like(&self) -> bool {
        matches!(self, Kind::Map)
    }

    /// Set-like containers require sequential keys
    pub fn is_set_like(&self) -> bool {
        matches!(self, Kind::Set | Kind::Tuple)
    }

    /// Default null policy for this kind
    pub fn default_allow_nulls(&self) -> bool {
        matches!(self, Kind::Any)
    }

    /// True if containers of this kind can never be mutated
    pub fn is_always_read_only(&self) -> bool {
        matches!(self, Kind::Tuple)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "any" | "anyarray" => Ok(Kind::Any),
            "map" => Ok(Kind::Map),
            "set" => Ok(Kind::Set),
            "tuple" => Ok(Kind::Tuple),
            other => Err(Error::argument(format!("unknown container kind '{}'", other))),
        }
    }
}

/// Classification category of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// `null`
    Null,
    /// `int`
    Int,
    /// `float`
    Float,
    /// `string`
    String,
    /// `bool`
    Bool,
    /// `array`
    Array,
    /// `object`
    Object,
}

impl ValueType {
    /// Basic types usable as item type constraints (everything but null)
    pub const BASICS: [ValueType; 6] = [
        ValueType::Int,
        ValueType::Float,
        ValueType::String,
        ValueType::Bool,
        ValueType::Array,
        ValueType::Object,
    ];

    /// Lowercase type name
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Bool => "bool",
            ValueType::Array => "array",
            ValueType::Object => "object",
        }
    }

    /// Parse a basic type name (case-insensitive); `null` is not basic
    pub fn parse_basic(s: &str) -> Option<ValueType> {
        let lower = s.to_ascii_lowercase();
        Self::BASICS.into_iter().find(|t| t.name() == lower)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-container constraint on stored values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// Values must classify as this basic type
    Basic(ValueType),
    /// Values must be objects of this class
    Class(String),
}

impl ItemType {
    /// Parse an item type declaration.
    ///
    /// - `""` and `"any"` mean "no constraint" (`None`)
    /// - basic names (`int`, `String`, ...) map to [`ItemType::Basic`]
    /// - `class:Name`, or any other name, maps to [`ItemType::Class`]
    pub fn parse(s: &str) -> Option<ItemType> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("any") {
            return None;
        }
        if let Some(class) = s.strip_prefix("class:") {
            return Some(ItemType::Class(class.to_string()));
        }
        Some(
            ValueType::parse_basic(s)
                .map(ItemType::Basic)
                .unwrap_or_else(|| ItemType::Class(s.to_string())),
        )
    }

    /// Check a (non-null) value against this constraint
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            ItemType::Basic(t) => value.value_type() == *t,
            ItemType::Class(class) => value
                .as_object()
                .map(|o| o.is_instance_of(class))
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Basic(t) => f.write_str(t.name()),
            ItemType::Class(c) => f.write_str(c),
        }
    }
}

/// How `calc` treats non-numeric values when not filtering them out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcPolicy {
    /// Silently skip non-numeric values
    #[default]
    Skip,
    /// Fail with an operation error on the first non-numeric value
    Strict,
}

impl FromStr for CalcPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(CalcPolicy::Skip),
            "strict" => Ok(CalcPolicy::Strict),
            other => Err(Error::argument(format!("unknown calc policy '{}'", other))),
        }
    }
}
