//! Generic validators
//!
//! Presence, equality and membership rules that apply to any value kind.

use super::params;
use crate::value::FieldValue;

/// Value is present. Text, lists and objects must also be non-empty.
pub fn required(value: &FieldValue, _params: &[String]) -> bool {
    match value {
        FieldValue::Absent => false,
        FieldValue::Text(s) => !s.is_empty(),
        FieldValue::List(items) => !items.is_empty(),
        FieldValue::Object(map) => !map.is_empty(),
        _ => true,
    }
}

/// Compare a value with the first parameter. `None` if undecidable.
fn equals(rule: &str, value: &FieldValue, params: &[String]) -> Option<bool> {
    match value {
        FieldValue::Text(s) => params::first(rule, params).map(|p| s == p),
        FieldValue::Bool(b) => {
            let raw = params::first(rule, params)?;
            match raw.trim().parse::<bool>() {
                Ok(expected) => Some(*b == expected),
                Err(_) => {
                    log::warn!("Rule '{}' has non-boolean parameter '{}'", rule, raw);
                    None
                }
            }
        }
        FieldValue::List(_) | FieldValue::Int(_) | FieldValue::UInt(_) | FieldValue::Float(_) => {
            let expected = params::number(rule, params)?;
            value.measure().map(|m| m == expected)
        }
        FieldValue::Absent | FieldValue::Object(_) => None,
    }
}

/// Marks a field as optional. Never fails; the validator skips the other
/// rules of a field carrying it when the value is absent.
pub fn omitempty(_value: &FieldValue, _params: &[String]) -> bool {
    true
}

/// Equal to the parameter: text by content, numbers by value, lists by length
pub fn eq(value: &FieldValue, params: &[String]) -> bool {
    equals("eq", value, params) == Some(true)
}

/// Not equal to the parameter, with the same comparison as [`eq`]
pub fn ne(value: &FieldValue, params: &[String]) -> bool {
    equals("ne", value, params) == Some(false)
}

/// Textual value is one of the whitespace separated parameters
pub fn oneof(value: &FieldValue, params: &[String]) -> bool {
    let Some(text) = value.as_text() else {
        return false;
    };

    params
        .iter()
        .flat_map(|p| p.split_whitespace())
        .any(|allowed| allowed == text)
}
