//! Error types for typed arrays
//!
//! This module defines the single error enum used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! # Taxonomy
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | `Shape` | Items do not have the key shape the container kind requires |
//! | `ValueType` | A value violates the declared item type |
//! | `KeyType` | A key has the wrong type or shape for the container kind |
//! | `NullValue` | A null value is rejected by the null policy |
//! | `Mutation` | A write is attempted on a read-only container |
//! | `Method` | An operation is unknown, disallowed or already registered |
//! | `Argument` | An argument is out of range or of a mismatched kind |
//! | `Operation` | An arithmetic operator is unknown or an operand is rejected |
//! | `Protocol` | A mutation command name is unknown or malformed |
//!
//! Every error is raised synchronously and leaves the container unmodified.

use thiserror::Error;

/// Result type alias for container operations
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of [`Error`], for cheap matching in callers and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::Shape`]
    Shape,
    /// See [`Error::ValueType`]
    ValueType,
    /// See [`Error::KeyType`]
    KeyType,
    /// See [`Error::NullValue`]
    NullValue,
    /// See [`Error::Mutation`]
    Mutation,
    /// See [`Error::Method`]
    Method,
    /// See [`Error::Argument`]
    Argument,
    /// See [`Error::Operation`]
    Operation,
    /// See [`Error::Protocol`]
    Protocol,
}

/// Error types for container operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Key shape mismatch for Map/Set/Tuple items
    #[error("{container}() objects accept {expected} only, invalid items given")]
    Shape {
        /// Container type name
        container: String,
        /// Accepted shape description
        expected: String,
    },

    /// Declared item type violated
    #[error(
        "All values of {container}() must be type of {expected}, {actual} given (offset: {offset}, value: {value})"
    )]
    ValueType {
        /// Container type name
        container: String,
        /// 0-based position of the offending item
        offset: usize,
        /// Declared item type
        expected: String,
        /// Runtime type (class name for objects)
        actual: String,
        /// Printable representation of the offending value
        value: String,
    },

    /// Key type or key shape violated
    #[error("{container}() objects accept {expected} keys only, {actual} given")]
    KeyType {
        /// Container type name
        container: String,
        /// Accepted key description
        expected: String,
        /// Description of the offending key
        actual: String,
    },

    /// Null rejected by policy
    #[error("{container}() object does not accept null values, null given{}", offset_suffix(.offset))]
    NullValue {
        /// Container type name
        container: String,
        /// Position of the offending item when known
        offset: Option<usize>,
    },

    /// Write attempted on a read-only container
    #[error("Cannot modify read-only {container}() object [called method: {operation}()]")]
    Mutation {
        /// Container type name
        container: String,
        /// Attempted operation
        operation: String,
    },

    /// Unknown, disallowed or colliding operation name
    #[error("Method {container}::{method}() {reason}")]
    Method {
        /// Container type name
        container: String,
        /// Operation name
        method: String,
        /// Why the method was rejected
        reason: String,
    },

    /// Invalid argument (out-of-range size, kind mismatch, ...)
    #[error("Invalid argument: {reason}")]
    Argument {
        /// Explanation
        reason: String,
    },

    /// Arithmetic operation failure
    #[error("Operation error: {reason}")]
    Operation {
        /// Explanation
        reason: String,
    },

    /// Unknown or malformed mutation command
    #[error("Unknown command {command}")]
    Protocol {
        /// Offending command name
        command: String,
    },
}

fn offset_suffix(offset: &Option<usize>) -> String {
    offset
        .map(|o| format!(" (offset: {})", o))
        .unwrap_or_default()
}

impl Error {
    /// The variant of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Shape { .. } => ErrorKind::Shape,
            Error::ValueType { .. } => ErrorKind::ValueType,
            Error::KeyType { .. } => ErrorKind::KeyType,
            Error::NullValue { .. } => ErrorKind::NullValue,
            Error::Mutation { .. } => ErrorKind::Mutation,
            Error::Method { .. } => ErrorKind::Method,
            Error::Argument { .. } => ErrorKind::Argument,
            Error::Operation { .. } => ErrorKind::Operation,
            Error::Protocol { .. } => ErrorKind::Protocol,
        }
    }

    /// Create an argument error
    pub fn argument(reason: impl Into<String>) -> Self {
        Error::Argument {
            reason: reason.into(),
        }
    }

    /// Create an operation error
    pub fn operation(reason: impl Into<String>) -> Self {
        Error::Operation {
            reason: reason.into(),
        }
    }

    /// Create a mutation error for a read-only container
    pub fn mutation(container: impl Into<String>, operation: impl Into<String>) -> Self {
        Error::Mutation {
            container: container.into(),
            operation: operation.into(),
        }
    }

    /// Create a method error for an operation disallowed by the container kind
    pub fn method_not_allowed(container: impl Into<String>, method: impl Into<String>) -> Self {
        Error::Method {
            container: container.into(),
            method: method.into(),
            reason: "is not allowed".to_string(),
        }
    }

    /// Create a method error for an unknown operation
    pub fn method_missing(container: impl Into<String>, method: impl Into<String>) -> Self {
        Error::Method {
            container: container.into(),
            method: method.into(),
            reason: "does not exist".to_string(),
        }
    }

    /// Create a method error for an extension colliding with an existing operation
    pub fn method_exists(container: impl Into<String>, method: impl Into<String>) -> Self {
        Error::Method {
            container: container.into(),
            method: method.into(),
            reason: "already exists".to_string(),
        }
    }

    /// Create a protocol error for an unknown command
    pub fn protocol(command: impl Into<String>) -> Self {
        Error::Protocol {
            command: command.into(),
        }
    }
}
