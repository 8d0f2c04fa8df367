//! Field values
//!
//! A [`FieldValue`] is the dynamically typed view of a single field of an
//! input object. Rules never see the input object itself, only the value of
//! the field they are attached to.

use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Value of one field of an input object
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// The field is missing or explicitly null
    #[default]
    Absent,
    /// Boolean value
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Unsigned integer that does not fit into `i64`, or was given as unsigned
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Text value
    Text(String),
    /// Sequence of values
    List(Vec<FieldValue>),
    /// Nested object. Text and size rules reject it.
    Object(BTreeMap<String, FieldValue>),
}

/// Coarse classification of a value, used to pick kind-specific messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Absent,
    Bool,
    Number,
    String,
    List,
    Object,
}

impl ValueKind {
    /// Stable lowercase name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Absent => "absent",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::List => "list",
            ValueKind::Object => "object",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldValue {
    /// Kind of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Absent => ValueKind::Absent,
            FieldValue::Bool(_) => ValueKind::Bool,
            FieldValue::Int(_) | FieldValue::UInt(_) | FieldValue::Float(_) => ValueKind::Number,
            FieldValue::Text(_) => ValueKind::String,
            FieldValue::List(_) => ValueKind::List,
            FieldValue::Object(_) => ValueKind::Object,
        }
    }

    /// Returns true if the field is structurally missing
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Textual form of scalar values.
    ///
    /// Numbers and booleans are rendered in their canonical decimal/`true`
    /// form so text rules can be applied to them; lists, objects and absent
    /// values have no textual form.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
            FieldValue::Int(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::UInt(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::Float(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            FieldValue::Absent | FieldValue::List(_) | FieldValue::Object(_) => None,
        }
    }

    /// Text content, only for actual text values
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value, only for numbers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(n) => Some(*n as f64),
            FieldValue::UInt(n) => Some(*n as f64),
            FieldValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// The quantity size rules compare against: character count for text,
    /// item count for lists, the value itself for numbers.
    pub fn measure(&self) -> Option<f64> {
        match self {
            FieldValue::Text(s) => Some(s.chars().count() as f64),
            FieldValue::List(items) => Some(items.len() as f64),
            _ => self.as_f64(),
        }
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => FieldValue::Absent,
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    FieldValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    FieldValue::UInt(u)
                } else {
                    FieldValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Array(items) => FieldValue::List(items.iter().map(FieldValue::from).collect()),
            Value::Object(map) => FieldValue::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), FieldValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::from(&value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::UInt(value as u64)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        FieldValue::UInt(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Absent)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Absent);
        assert_eq!(FieldValue::from(json!(42)), FieldValue::Int(42));
        assert_eq!(FieldValue::from(json!(u64::MAX)), FieldValue::UInt(u64::MAX));
        assert_eq!(FieldValue::from(json!(1.5)), FieldValue::Float(1.5));
        assert_eq!(FieldValue::from(json!("abc")), FieldValue::Text("abc".into()));
        assert_eq!(
            FieldValue::from(json!(["a", 1])),
            FieldValue::List(vec![FieldValue::Text("a".into()), FieldValue::Int(1)])
        );
    }

    #[test]
    fn test_measure_counts_characters() {
        assert_eq!(FieldValue::from("栏目名称").measure(), Some(4.0));
        assert_eq!(FieldValue::from(vec![1, 2, 3]).measure(), Some(3.0));
        assert_eq!(FieldValue::from(7).measure(), Some(7.0));
        assert_eq!(FieldValue::Bool(true).measure(), None);
        assert_eq!(FieldValue::Absent.measure(), None);
    }

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from(13800138000u64).as_text().as_deref(), Some("13800138000"));
        assert_eq!(FieldValue::from("x").as_text().as_deref(), Some("x"));
        assert!(FieldValue::from(vec!["x"]).as_text().is_none());
    }

    #[test]
    fn test_objects_have_no_text_or_size() {
        let value = FieldValue::from(json!({ "city": "Shanghai", "zip": 200000 }));
        assert_eq!(value.kind(), ValueKind::Object);
        assert!(value.as_text().is_none());
        assert!(value.measure().is_none());
        match value {
            FieldValue::Object(map) => assert_eq!(map["zip"], FieldValue::Int(200000)),
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_option_conversion() {
        assert!(FieldValue::from(None::<String>).is_absent());
        assert_eq!(FieldValue::from(Some("a")).kind(), ValueKind::String);
    }
}
