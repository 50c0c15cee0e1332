//! Plain mappings
//!
//! A `JsObject` is a string-keyed mapping. Keys enumerate in insertion order;
//! overwriting an existing key keeps its original position.

use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::value::Value;

/// String-keyed mapping of values
#[derive(Default)]
pub struct JsObject {
    properties: RwLock<IndexMap<Arc<str>, Value>>,
}

impl JsObject {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            properties: RwLock::new(IndexMap::with_capacity(capacity)),
        }
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<Value> {
        self.properties.read().get(key).cloned()
    }

    /// Set a property, returning the previous value if there was one
    pub fn set(&self, key: impl Into<Arc<str>>, value: Value) -> Option<Value> {
        self.properties.write().insert(key.into(), value)
    }

    /// Whether the mapping has an own property `key`
    pub fn has(&self, key: &str) -> bool {
        self.properties.read().contains_key(key)
    }

    /// Remove a property, keeping the order of the rest
    pub fn delete(&self, key: &str) -> Option<Value> {
        self.properties.write().shift_remove(key)
    }

    /// Own keys in enumeration order
    pub fn own_keys(&self) -> Vec<Arc<str>> {
        self.properties.read().keys().cloned().collect()
    }

    /// Snapshot of own entries in enumeration order.
    ///
    /// The lock is released before this returns, so callers may freely
    /// read or write any mapping (including this one) while walking it.
    pub fn entries(&self) -> Vec<(Arc<str>, Value)> {
        self.properties
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Number of own properties
    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    /// Whether the mapping has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.read().is_empty()
    }

    /// Drop every property. Breaks any cycle running through this mapping.
    pub fn clear(&self) {
        self.properties.write().clear();
    }
}

impl std::fmt::Debug for JsObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsObject")
            .field("keys", &self.own_keys())
            .finish()
    }
}
