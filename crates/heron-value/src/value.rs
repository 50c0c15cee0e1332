//! Values
//!
//! A [`Value`] is either a primitive stored inline or a handle to a heap
//! value. Heap values fall into exactly one [`ValueKind`]:
//!
//! ```text
//! Mapping   Object                      traversed by deep copy
//! Sequence  Array                       traversed by deep copy
//! Atomic    everything else             shared as-is
//! ```
//!
//! The classification is by variant only. A mapping that happens to carry a
//! `length` key and integer-like keys is still a mapping.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::array::JsArray;
use crate::atom::{JsDate, JsFunction, JsRegExp};
use crate::gc::GcRef;
use crate::object::JsObject;

/// A value in a graph
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// `undefined`
    #[default]
    Undefined,
    /// `null`
    Null,
    /// Boolean primitive
    Boolean(bool),
    /// Number primitive
    Number(f64),
    /// String primitive (immutable, shared)
    String(Arc<str>),
    /// Plain mapping
    Object(GcRef<JsObject>),
    /// Ordered sequence
    Array(GcRef<JsArray>),
    /// Function
    Function(GcRef<JsFunction>),
    /// Date
    Date(GcRef<JsDate>),
    /// Regular expression
    RegExp(GcRef<JsRegExp>),
}

/// How deep copy treats a value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Ordered sequence: copied element by element
    Sequence,
    /// Plain mapping: copied key by key
    Mapping,
    /// Anything else: passed through without copying
    Atomic,
}

impl Value {
    /// `undefined`
    pub const fn undefined() -> Self {
        Self::Undefined
    }

    /// `null`
    pub const fn null() -> Self {
        Self::Null
    }

    /// Boolean
    pub const fn boolean(b: bool) -> Self {
        Self::Boolean(b)
    }

    /// Number
    pub const fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// String
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::String(s.into())
    }

    /// Mapping handle
    pub fn object(obj: GcRef<JsObject>) -> Self {
        Self::Object(obj)
    }

    /// Fresh empty mapping
    pub fn new_object() -> Self {
        Self::Object(GcRef::new(JsObject::new()))
    }

    /// Sequence handle
    pub fn array(arr: GcRef<JsArray>) -> Self {
        Self::Array(arr)
    }

    /// Fresh sequence holding `elements`
    pub fn new_array(elements: Vec<Value>) -> Self {
        Self::Array(GcRef::new(JsArray::from_vec(elements)))
    }

    /// Function handle
    pub fn function(func: GcRef<JsFunction>) -> Self {
        Self::Function(func)
    }

    /// Fresh date
    pub fn date(time: DateTime<Utc>) -> Self {
        Self::Date(GcRef::new(JsDate::new(time)))
    }

    /// Fresh regular expression
    pub fn regex(pattern: &str, flags: &str) -> Self {
        Self::RegExp(GcRef::new(JsRegExp::new(pattern, flags)))
    }

    /// Classify for deep copy
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Array(_) => ValueKind::Sequence,
            Self::Object(_) => ValueKind::Mapping,
            _ => ValueKind::Atomic,
        }
    }

    /// Name of the value's type, as `typeof`-style text
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Array(_) => "array",
            Self::Function(_) => "function",
            Self::Date(_) => "date",
            Self::RegExp(_) => "regexp",
        }
    }

    /// Whether the value lives on the heap
    pub fn is_heap(&self) -> bool {
        self.heap_addr().is_some()
    }

    /// Identity of the heap allocation behind this value
    pub fn heap_addr(&self) -> Option<usize> {
        match self {
            Self::Object(o) => Some(o.addr()),
            Self::Array(a) => Some(a.addr()),
            Self::Function(f) => Some(f.addr()),
            Self::Date(d) => Some(d.addr()),
            Self::RegExp(r) => Some(r.addr()),
            _ => None,
        }
    }

    /// Strict equality (`===`): primitives by value, heap values by identity
    pub fn strict_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            _ => match (self.heap_addr(), other.heap_addr()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Check if undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if a mapping
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Check if a sequence
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Get as boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&**s),
            _ => None,
        }
    }

    /// Get as mapping
    pub fn as_object(&self) -> Option<&GcRef<JsObject>> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get as sequence
    pub fn as_array(&self) -> Option<&GcRef<JsArray>> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as function
    pub fn as_function(&self) -> Option<&GcRef<JsFunction>> {
        match self {
            Self::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Get as date
    pub fn as_date(&self) -> Option<&GcRef<JsDate>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Get as regular expression
    pub fn as_regex(&self) -> Option<&GcRef<JsRegExp>> {
        match self {
            Self::RegExp(r) => Some(r),
            _ => None,
        }
    }

    /// Deep copy with a fresh cache. See [`crate::deep_copy::deep_copy()`].
    pub fn deep_copy(&self) -> Value {
        crate::deep_copy::deep_copy(self)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<GcRef<JsObject>> for Value {
    fn from(obj: GcRef<JsObject>) -> Self {
        Self::Object(obj)
    }
}

impl From<GcRef<JsArray>> for Value {
    fn from(arr: GcRef<JsArray>) -> Self {
        Self::Array(arr)
    }
}
