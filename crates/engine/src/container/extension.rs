//! Per-instance operations registered at runtime

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;
use typed_arrays_core::{Error, Result, Value};

use super::Container;
use crate::policy::{self, Operation};

/// An operation registered with [`Container::prototype`].
///
/// Receives the container and the call arguments.
pub type Extension = Arc<dyn Fn(&mut Container, &[Value]) -> Result<Value> + Send + Sync>;

pub(crate) type Extensions = FxHashMap<String, Extension>;

impl Container {
    /// Register an operation callable through [`call`](Self::call).
    ///
    /// Fails with `Error::Method` if the kind disallows an operation of that
    /// name, or if the name is a built-in operation or already registered.
    pub fn prototype<F>(&mut self, name: &str, f: F) -> Result<&mut Self>
    where
        F: Fn(&mut Container, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.gate(Operation::Prototype)?;
        let builtin = Operation::from_name(name);
        if builtin.map_or(false, |op| policy::is_disallowed(self.kind, op)) {
            return Err(Error::method_not_allowed(self.name(), name));
        }
        if builtin.is_some() || self.extensions.contains_key(name) {
            return Err(Error::method_exists(self.name(), name));
        }
        debug!(target: "typed_arrays::container", container = self.name(), method = name, "Registered extension");
        self.extensions.insert(name.to_string(), Arc::new(f));
        Ok(self)
    }

    /// Invoke a registered operation
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        self.gate(Operation::Call)?;
        let f = self
            .extensions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::method_missing(self.name(), name))?;
        f(self, args)
    }

    /// True if `name` was registered with [`prototype`](Self::prototype)
    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains_key(name)
    }
}
