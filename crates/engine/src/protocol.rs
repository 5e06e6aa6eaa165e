//! The mutation protocol
//!
//! [`Container::execute`] is the single entry point for store writes. Each
//! command passes the operation gate (read-only, then kind policy), then the
//! key, null and item-type checks, and only then touches the store. A
//! failing check leaves the store exactly as it was.

use tracing::trace;
use typed_arrays_core::{Error, Key, Result, Value};

use crate::command::Command;
use crate::container::Container;
use crate::output::Output;

impl Container {
    /// Execute a mutation command.
    ///
    /// # Example
    ///
    /// ```
    /// use typed_arrays_core::{Key, Kind, Value};
    /// use typed_arrays_engine::{Command, Container, Output};
    ///
    /// let mut set = Container::new(Kind::Set, Vec::new()).unwrap();
    /// let out = set.execute(Command::Unpop { value: Value::Int(7) }).unwrap();
    /// assert_eq!(out, Output::Size(1));
    /// let out = set.execute(Command::Get { key: Key::Int(0) }).unwrap();
    /// assert_eq!(out, Output::Maybe(Some(Value::Int(7))));
    /// ```
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        trace!(
            target: "typed_arrays::protocol",
            container = self.name(),
            command = cmd.name(),
            size = self.size(),
            "Dispatch"
        );
        self.gate(cmd.operation())?;
        self.dispatch(cmd)
    }

    /// Apply a command that already passed the operation gate
    pub(crate) fn dispatch(&mut self, cmd: Command) -> Result<Output> {
        match self.canonical_command(cmd) {
            Command::Set { key, value } => {
                self.check_entry(&key, &value)?;
                self.store.set(key, value);
                self.normalize();
                Ok(Output::Size(self.size()))
            }
            Command::Get { key } => Ok(Output::Maybe(self.read(&key)?.cloned())),
            Command::Unset { key } => {
                self.validator().check_read_key(&key)?;
                if self.store.remove(&key).is_some() {
                    self.normalize();
                }
                Ok(Output::Unit)
            }
            Command::Put { key, value } => {
                self.check_entry(&key, &value)?;
                self.store.set(key, value);
                self.normalize();
                Ok(Output::Unit)
            }
            Command::Push { key, value } => {
                self.check_entry(&key, &value)?;
                self.store.remove(&key);
                self.store.set(key, value);
                self.normalize();
                Ok(Output::Unit)
            }
            Command::Pull { key } => {
                self.validator().check_read_key(&key)?;
                let value = self.store.remove(&key);
                if value.is_some() {
                    self.normalize();
                }
                Ok(Output::Maybe(value))
            }
            Command::Pop => {
                let value = self.store.pop_last().map(|(_, v)| v);
                self.normalize();
                Ok(Output::Removed {
                    value,
                    size: self.size(),
                })
            }
            Command::Shift => {
                let value = self.store.pop_first().map(|(_, v)| v);
                self.normalize();
                Ok(Output::Removed {
                    value,
                    size: self.size(),
                })
            }
            Command::Unpop { value } => {
                self.validator().check_write(self.size(), &value)?;
                if self.store.next_key().is_none() {
                    return Err(Error::operation(format!(
                        "{}() has no free integer key after {}",
                        self.name(),
                        i64::MAX
                    )));
                }
                self.store.push_value(value);
                self.normalize();
                Ok(Output::Size(self.size()))
            }
            Command::Unshift { value } => {
                self.validator().check_write(0, &value)?;
                let mut pairs = Vec::with_capacity(self.size() + 1);
                pairs.push((Key::Int(0), value));
                let mut next = 1i64;
                for (key, v) in self.store.iter() {
                    let key = match key {
                        Key::Int(_) => {
                            let k = Key::Int(next);
                            next += 1;
                            k
                        }
                        key => key.clone(),
                    };
                    pairs.push((key, v.clone()));
                }
                self.commit(pairs);
                Ok(Output::Size(self.size()))
            }
        }
    }

    /// Key read with the kind's key-type check
    pub(crate) fn read(&self, key: &Key) -> Result<Option<&Value>> {
        self.validator().check_read_key(key)?;
        Ok(self.store.get(&self.canonical(key.clone())))
    }

    fn canonical_command(&self, cmd: Command) -> Command {
        match cmd {
            Command::Set { key, value } => Command::Set {
                key: self.canonical(key),
                value,
            },
            Command::Put { key, value } => Command::Put {
                key: self.canonical(key),
                value,
            },
            Command::Push { key, value } => Command::Push {
                key: self.canonical(key),
                value,
            },
            Command::Get { key } => Command::Get {
                key: self.canonical(key),
            },
            Command::Unset { key } => Command::Unset {
                key: self.canonical(key),
            },
            Command::Pull { key } => Command::Pull {
                key: self.canonical(key),
            },
            other => other,
        }
    }

    fn check_entry(&self, key: &Key, value: &Value) -> Result<()> {
        let validator = self.validator();
        validator.check_write_key(key)?;
        let position = self.store.position(key).unwrap_or(self.size());
        validator.check_write(position, value)
    }
}
