//! Building values from JSON
//!
//! Import only. Every JSON object and array becomes a fresh container, so
//! the result is a tree with no shared or cyclic references.

use crate::array::JsArray;
use crate::gc::GcRef;
use crate::object::JsObject;
use crate::value::Value;

impl Value {
    /// Build a value graph from parsed JSON
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::string(s.as_str()),
            serde_json::Value::Array(items) => {
                let elements = items.iter().map(Value::from_json).collect();
                Value::array(GcRef::new(JsArray::from_vec(elements)))
            }
            serde_json::Value::Object(map) => {
                let obj = JsObject::with_capacity(map.len());
                for (key, val) in map {
                    obj.set(key.as_str(), Value::from_json(val));
                }
                Value::object(GcRef::new(obj))
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(&json)
    }
}
