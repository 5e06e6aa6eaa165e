//! Container configuration
//!
//! Two ways to describe how a container is built:
//! - [`ContainerOptions`]: builder used from code
//! - [`ContainerConfig`]: serde/TOML description, converted into options
//!
//! ```toml
//! kind = "set"
//! item_type = "int"
//! read_only = false
//! allow_nulls = false
//! calc_policy = "skip"
//! locale = "en_US"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{CalcPolicy, ItemType, Kind};

/// Construction options for a container
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerOptions {
    /// Optional constraint on stored values
    pub item_type: Option<ItemType>,
    /// Reject every mutating operation
    pub read_only: bool,
    /// Accept null values
    pub allow_nulls: bool,
    /// Non-numeric handling for `calc`
    pub calc_policy: CalcPolicy,
    /// Collation used by `sort_locale` when no locale is passed
    pub locale: Option<String>,
}

impl ContainerOptions {
    /// Defaults for a container kind: nulls allowed only for Any,
    /// read-only only for Tuple
    pub fn for_kind(kind: Kind) -> Self {
        Self {
            item_type: None,
            read_only: kind.is_always_read_only(),
            allow_nulls: kind.default_allow_nulls(),
            calc_policy: CalcPolicy::default(),
            locale: None,
        }
    }

    /// Set the item type constraint
    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    /// Set the read-only flag
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Set the null policy
    pub fn allow_nulls(mut self, allow_nulls: bool) -> Self {
        self.allow_nulls = allow_nulls;
        self
    }

    /// Set the calc policy
    pub fn calc_policy(mut self, calc_policy: CalcPolicy) -> Self {
        self.calc_policy = calc_policy;
        self
    }

    /// Set the default collation locale
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self::for_kind(Kind::Any)
    }
}

/// Serializable container description, typically loaded from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerConfig {
    /// Container kind: `"any"`, `"map"`, `"set"` or `"tuple"`
    pub kind: Kind,
    /// Item type: `"int"`, `"string"`, `"class:Point"`, ... (absent = any)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    /// Read-only flag (absent = kind default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Null policy (absent = kind default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_nulls: Option<bool>,
    /// `"skip"` (default) or `"strict"`
    #[serde(default)]
    pub calc_policy: CalcPolicy,
    /// Default collation locale for `sort_locale`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl ContainerConfig {
    /// Config for a kind with every other setting left at its default
    pub fn for_kind(kind: Kind) -> Self {
        Self {
            kind,
            item_type: None,
            read_only: None,
            allow_nulls: None,
            calc_policy: CalcPolicy::default(),
            locale: None,
        }
    }

    /// Resolve into construction options.
    ///
    /// Tuple containers are always read-only; an explicit
    /// `read_only = false` for a tuple is rejected.
    pub fn options(&self) -> Result<ContainerOptions> {
        if self.kind.is_always_read_only() && self.read_only == Some(false) {
            return Err(Error::argument(format!(
                "{}() objects are always read-only",
                self.kind.container_name()
            )));
        }
        let defaults = ContainerOptions::for_kind(self.kind);
        Ok(ContainerOptions {
            item_type: self.item_type.as_deref().and_then(ItemType::parse),
            read_only: self.read_only.unwrap_or(defaults.read_only),
            allow_nulls: self.allow_nulls.unwrap_or(defaults.allow_nulls),
            calc_policy: self.calc_policy,
            locale: self.locale.clone(),
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Typed array configuration
#
# Container kind: "any", "map", "set" or "tuple"
kind = "any"

# Item type constraint: "int", "float", "string", "bool", "array", "object"
# or "class:Name". Omit for no constraint.
# item_type = "int"

# Reject all mutations (tuples are always read-only)
# read_only = false

# Accept null values (default: true for "any", false otherwise)
# allow_nulls = true

# Non-numeric values in calc(): "skip" (default) or "strict"
calc_policy = "skip"

# Default collation locale for sort_locale()
# locale = "en_US"
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ContainerConfig = toml::from_str(content)
            .map_err(|e| Error::argument(format!("Failed to parse container config: {}", e)))?;
        // Validate eagerly
        config.options()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::argument(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize this config to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::argument(format!("Failed to serialize config: {}", e)))
    }
}
