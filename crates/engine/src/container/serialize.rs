//! Plain-data projections: pairs, JSON object and JSON text

use typed_arrays_core::{Error, Pairs, Result};

use super::{renumber, Container};
use crate::policy::Operation;

impl Container {
    /// Items as plain pairs.
    ///
    /// With `normalize`, keys are renumbered `0..n-1` when every key is
    /// already digit-like; otherwise the keys are returned unchanged.
    pub fn to_array(&self, normalize: bool) -> Pairs {
        let items = self.items();
        if normalize && self.store.keys().all(|k| k.is_digit_like()) {
            renumber(items)
        } else {
            items
        }
    }

    /// Items as a JSON object keyed by the keys' string forms
    pub fn to_object(&self) -> serde_json::Map<String, serde_json::Value> {
        self.store
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::from(v.clone())))
            .collect()
    }

    /// JSON text: an array when keys are `0..n-1`, an object otherwise
    pub fn to_json(&self) -> Result<String> {
        self.gate(Operation::ToJson)?;
        let json = if self.store.is_sequential() {
            serde_json::Value::Array(
                self.store
                    .values()
                    .map(|v| serde_json::Value::from(v.clone()))
                    .collect(),
            )
        } else {
            serde_json::Value::Object(self.to_object())
        };
        serde_json::to_string(&json)
            .map_err(|e| Error::operation(format!("JSON encoding failed: {}", e)))
    }
}
