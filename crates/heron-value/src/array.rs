//! Ordered sequences

use parking_lot::RwLock;

use crate::value::Value;

/// Index-addressed sequence of values
#[derive(Default)]
pub struct JsArray {
    elements: RwLock<Vec<Value>>,
}

impl JsArray {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: RwLock::new(Vec::with_capacity(capacity)),
        }
    }

    /// Create a sequence from existing elements
    pub fn from_vec(elements: Vec<Value>) -> Self {
        Self {
            elements: RwLock::new(elements),
        }
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Option<Value> {
        self.elements.read().get(index).cloned()
    }

    /// Store `value` at `index`. Writing past the end fills the gap with
    /// `undefined`.
    pub fn set(&self, index: usize, value: Value) {
        let mut elements = self.elements.write();
        if index >= elements.len() {
            elements.resize(index + 1, Value::Undefined);
        }
        elements[index] = value;
    }

    /// Append a value
    pub fn push(&self, value: Value) {
        self.elements.write().push(value);
    }

    /// Remove and return the last value
    pub fn pop(&self) -> Option<Value> {
        self.elements.write().pop()
    }

    /// Snapshot of the elements in index order. No lock is held afterwards.
    pub fn elements(&self) -> Vec<Value> {
        self.elements.read().clone()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.read().len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.elements.read().is_empty()
    }

    /// Drop every element. Breaks any cycle running through this sequence.
    pub fn clear(&self) {
        self.elements.write().clear();
    }
}

impl std::fmt::Debug for JsArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsArray").field("len", &self.len()).finish()
    }
}
