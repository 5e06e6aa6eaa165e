//! Mutation commands
//!
//! Commands are the instruction set of the mutation protocol. Every write
//! to a container's store is expressed as one of these variants and
//! dispatched through [`Container::execute`](crate::Container::execute).
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use serde::{Deserialize, Serialize};
use typed_arrays_core::{Error, Key, Result, Value};

use crate::policy::Operation;

/// A mutation protocol command
///
/// | Command | Returns |
/// |---------|---------|
/// | `Set` | `Output::Size` |
/// | `Get` | `Output::Maybe` |
/// | `Unset` | `Output::Unit` |
/// | `Put` | `Output::Unit` |
/// | `Push` | `Output::Unit` |
/// | `Pull` | `Output::Maybe` |
/// | `Pop` | `Output::Removed` |
/// | `Shift` | `Output::Removed` |
/// | `Unpop` | `Output::Size` |
/// | `Unshift` | `Output::Size` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Command {
    /// Insert or overwrite a key
    Set {
        /// Target key
        key: Key,
        /// New value
        value: Value,
    },
    /// Read a key
    Get {
        /// Target key
        key: Key,
    },
    /// Remove a key
    Unset {
        /// Target key
        key: Key,
    },
    /// Insert or overwrite a key (chaining form of `Set`)
    Put {
        /// Target key
        key: Key,
        /// New value
        value: Value,
    },
    /// Remove then re-insert a key so it moves to the end
    Push {
        /// Target key
        key: Key,
        /// New value
        value: Value,
    },
    /// Read then remove a key
    Pull {
        /// Target key
        key: Key,
    },
    /// Remove the last item
    Pop,
    /// Remove the first item
    Shift,
    /// Append under the next free integer key
    Unpop {
        /// Appended value
        value: Value,
    },
    /// Insert at the front
    Unshift {
        /// Prepended value
        value: Value,
    },
}

impl Command {
    /// Build a command from its name and arguments.
    ///
    /// Unknown names and missing arguments are protocol errors.
    pub fn from_name(name: &str, key: Option<Key>, value: Option<Value>) -> Result<Command> {
        let malformed = || Error::protocol(format!("{} (missing argument)", name));
        let cmd = match name {
            "set" => Command::Set {
                key: key.ok_or_else(malformed)?,
                value: value.ok_or_else(malformed)?,
            },
            "get" => Command::Get {
                key: key.ok_or_else(malformed)?,
            },
            "unset" => Command::Unset {
                key: key.ok_or_else(malformed)?,
            },
            "put" => Command::Put {
                key: key.ok_or_else(malformed)?,
                value: value.ok_or_else(malformed)?,
            },
            "push" => Command::Push {
                key: key.ok_or_else(malformed)?,
                value: value.ok_or_else(malformed)?,
            },
            "pull" => Command::Pull {
                key: key.ok_or_else(malformed)?,
            },
            "pop" => Command::Pop,
            "shift" => Command::Shift,
            "unpop" => Command::Unpop {
                value: value.ok_or_else(malformed)?,
            },
            "unshift" => Command::Unshift {
                value: value.ok_or_else(malformed)?,
            },
            other => return Err(Error::protocol(other)),
        };
        Ok(cmd)
    }

    /// The operation this command performs
    pub fn operation(&self) -> Operation {
        match self {
            Command::Set { .. } => Operation::Set,
            Command::Get { .. } => Operation::Get,
            Command::Unset { .. } => Operation::Unset,
            Command::Put { .. } => Operation::Put,
            Command::Push { .. } => Operation::Push,
            Command::Pull { .. } => Operation::Pull,
            Command::Pop => Operation::Pop,
            Command::Shift => Operation::Shift,
            Command::Unpop { .. } => Operation::Unpop,
            Command::Unshift { .. } => Operation::Unshift,
        }
    }

    /// Command name
    pub fn name(&self) -> &'static str {
        self.operation().as_str()
    }

    /// Key argument, if the command has one
    pub fn key(&self) -> Option<&Key> {
        match self {
            Command::Set { key, .. }
            | Command::Get { key }
            | Command::Unset { key }
            | Command::Put { key, .. }
            | Command::Push { key, .. }
            | Command::Pull { key } => Some(key),
            _ => None,
        }
    }
}
