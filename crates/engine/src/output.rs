//! Command results
//!
//! Every [`Command`](crate::Command) produces exactly one `Output` variant.

use serde::{Deserialize, Serialize};
use typed_arrays_core::Value;

/// Successful command execution results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (unset, put, push)
    Unit,

    /// New container size (set, unpop, unshift)
    Size(usize),

    /// Optional value (get, pull)
    Maybe(Option<Value>),

    /// Positional removal result (pop, shift)
    Removed {
        /// Removed value, `None` when the container was empty
        value: Option<Value>,
        /// Size after removal
        size: usize,
    },
}

impl Output {
    /// Size carried by this output, if any
    pub fn size(&self) -> Option<usize> {
        match self {
            Output::Size(n) => Some(*n),
            Output::Removed { size, .. } => Some(*size),
            _ => None,
        }
    }

    /// Consume into the carried value, if any
    pub fn into_value(self) -> Option<Value> {
        match self {
            Output::Maybe(v) => v,
            Output::Removed { value, .. } => value,
            _ => None,
        }
    }
}
