//! JSON value tree.
//!
//! A [`JsonValue`] owns everything beneath it: arrays own their elements,
//! dicts own their keys and values. Inserting moves the value in, so a value
//! can belong to only one container, and dropping the root frees the whole
//! tree. A partially built container that is dropped on a parse error frees
//! exactly the children already moved into it.

use std::collections::BTreeMap;
use std::fmt;

use super::iter::{ArrayIter, DictIter};
use crate::error::{JsonError, JsonResult};
use crate::vector::Vector;

/// Initial capacity for array values. JSON arrays are usually short.
pub const ARRAY_INIT_CAPACITY: usize = 4;

/// Largest integer magnitude an `f64` holds exactly (2^53 - 1).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_991.0;

/// The tag of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// Text
    String,
    /// Double-precision number
    Number,
    /// `true` / `false`
    Bool,
    /// Ordered sequence
    Array,
    /// String-keyed map
    Dict,
    /// `null`
    Null,
}

impl JsonKind {
    /// Lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            JsonKind::String => "string",
            JsonKind::Number => "number",
            JsonKind::Bool => "boolean",
            JsonKind::Array => "array",
            JsonKind::Dict => "object",
            JsonKind::Null => "null",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A JSON value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// Owned text, stored exactly as it appeared between the quotes
    String(String),
    /// Double-precision number
    Number(f64),
    /// Boolean
    Bool(bool),
    /// Array of owned values
    Array(Vector<JsonValue>),
    /// Dict with owned keys and values, iterated in key order
    Dict(BTreeMap<String, JsonValue>),
    /// `null`
    #[default]
    Null,
}

impl JsonValue {
    /// String value holding a copy of `s`.
    pub fn new_string(s: &str) -> Self {
        JsonValue::String(s.to_owned())
    }

    /// Number value.
    pub fn new_number(n: f64) -> Self {
        JsonValue::Number(n)
    }

    /// Bool value.
    pub fn new_bool(b: bool) -> Self {
        JsonValue::Bool(b)
    }

    /// Null value.
    pub fn new_null() -> Self {
        JsonValue::Null
    }

    /// Empty array.
    pub fn new_array() -> Self {
        JsonValue::Array(Vector::with_capacity(ARRAY_INIT_CAPACITY))
    }

    /// Empty dict.
    pub fn new_dict() -> Self {
        JsonValue::Dict(BTreeMap::new())
    }

    /// The value's tag.
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::Bool(_) => JsonKind::Bool,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Dict(_) => JsonKind::Dict,
            JsonValue::Null => JsonKind::Null,
        }
    }

    /// Returns the type name as a string for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Move `value` to the end of this array.
    ///
    /// Fails with [`JsonError::KindMismatch`] if `self` is not an array; the
    /// rejected value is dropped.
    pub fn array_append(&mut self, value: JsonValue) -> JsonResult<()> {
        match self {
            JsonValue::Array(items) => {
                items.push_back(value);
                Ok(())
            }
            other => Err(JsonError::KindMismatch {
                expected: JsonKind::Array,
                found: other.kind(),
            }),
        }
    }

    /// Insert `value` under a copy of `key`, replacing any previous value.
    ///
    /// Fails with [`JsonError::KindMismatch`] if `self` is not a dict.
    pub fn dict_insert(&mut self, key: &str, value: JsonValue) -> JsonResult<()> {
        match self {
            JsonValue::Dict(map) => {
                map.insert(key.to_owned(), value);
                Ok(())
            }
            other => Err(JsonError::KindMismatch {
                expected: JsonKind::Dict,
                found: other.kind(),
            }),
        }
    }

    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns true if this is a dict value.
    pub fn is_dict(&self) -> bool {
        matches!(self, JsonValue::Dict(_))
    }

    /// Returns the boolean value if this is a Bool, None otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a Number, None otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a String, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the backing vector if this is an Array, None otherwise.
    pub fn as_array(&self) -> Option<&Vector<JsonValue>> {
        match self {
            JsonValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the map if this is a Dict, None otherwise.
    pub fn as_dict(&self) -> Option<&BTreeMap<String, JsonValue>> {
        match self {
            JsonValue::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Get a value from a dict by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Dict(map) => map.get(key),
            _ => None,
        }
    }

    /// Get a value from an array by index.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        match self {
            JsonValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// Element count of an array or dict; None for scalars.
    pub fn len(&self) -> Option<usize> {
        match self {
            JsonValue::Array(items) => Some(items.len()),
            JsonValue::Dict(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Peek/next/reset iterator over an array's elements.
    pub fn array_iter(&self) -> Option<ArrayIter<'_>> {
        self.as_array().map(ArrayIter::new)
    }

    /// Peek/next/reset iterator over a dict's key/value pairs.
    pub fn dict_iter(&self) -> Option<DictIter<'_>> {
        self.as_dict().map(DictIter::new)
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// Integral numbers within the exact `f64` range become JSON integers.
    /// Non-finite numbers have no JSON representation and become `null`.
    pub fn to_serde_json(&self) -> serde_json::Value {
        match self {
            JsonValue::String(s) => serde_json::Value::String(s.clone()),
            JsonValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT => {
                serde_json::Value::from(*n as i64)
            }
            JsonValue::Number(n) => serde_json::Number::from_f64(*n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            JsonValue::Bool(b) => serde_json::Value::Bool(*b),
            JsonValue::Array(items) => {
                serde_json::Value::Array(items.iter().map(JsonValue::to_serde_json).collect())
            }
            JsonValue::Dict(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_serde_json()))
                    .collect(),
            ),
            JsonValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(JsonValue::Null, JsonValue::Number),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Dict(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}
