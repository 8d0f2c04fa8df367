//! Input objects
//!
//! The validator reads field values through [`FieldSource`], so request
//! types can either implement it by hand or be routed through their serde
//! representation with [`SerializedInput`].

use crate::value::FieldValue;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// An input object whose fields can be looked up by identifier
pub trait FieldSource {
    /// Value of the field, or [`FieldValue::Absent`] if it does not exist
    fn field_value(&self, identifier: &str) -> FieldValue;
}

impl<T: FieldSource + ?Sized> FieldSource for &T {
    fn field_value(&self, identifier: &str) -> FieldValue {
        (**self).field_value(identifier)
    }
}

impl FieldSource for HashMap<String, FieldValue> {
    fn field_value(&self, identifier: &str) -> FieldValue {
        self.get(identifier).cloned().unwrap_or_default()
    }
}

impl FieldSource for Map<String, Value> {
    fn field_value(&self, identifier: &str) -> FieldValue {
        lookup_path(self, identifier)
            .map(FieldValue::from)
            .unwrap_or_default()
    }
}

impl FieldSource for Value {
    fn field_value(&self, identifier: &str) -> FieldValue {
        match self {
            Value::Object(map) => map.field_value(identifier),
            _ => FieldValue::Absent,
        }
    }
}

/// Resolve `a.b.c` through nested objects. A key containing a literal dot
/// wins over the nested interpretation.
fn lookup_path<'a>(map: &'a Map<String, Value>, identifier: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(identifier) {
        return Some(value);
    }

    let (head, rest) = identifier.split_once('.')?;
    match map.get(head)? {
        Value::Object(inner) => lookup_path(inner, rest),
        _ => None,
    }
}

/// Any serializable input object, viewed through its JSON representation
#[derive(Debug, Clone)]
pub struct SerializedInput(Value);

impl SerializedInput {
    /// Serialize `input` once so its fields can be validated
    pub fn new<T: Serialize + ?Sized>(input: &T) -> serde_json::Result<Self> {
        serde_json::to_value(input).map(SerializedInput)
    }

    /// The underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl FieldSource for SerializedInput {
    fn field_value(&self, identifier: &str) -> FieldValue {
        self.0.field_value(identifier)
    }
}
