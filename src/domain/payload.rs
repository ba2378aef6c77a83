//! Field access over loosely-typed request bodies
//!
//! Request bodies arrive as arbitrary JSON. The schema types in `user` and
//! `product` use these helpers to decide presence before checking types.

use serde_json::Value;

/// Returns the field if it is present and not blank.
///
/// Absent keys, `null` and empty strings all count as missing. A body that is
/// not a JSON object has no fields at all.
pub fn present<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    match payload.get(name)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        value => Some(value),
    }
}

/// Returns the field only if it is present and truthy.
///
/// On top of the [`present`] rules, `0` and `false` count as missing. Required
/// fields of create-style bodies go through this check.
pub fn required<'a>(payload: &'a Value, name: &str) -> Option<&'a Value> {
    present(payload, name).filter(|value| !is_falsy(value))
}

/// Returns the field as a non-empty string, `None` if missing or not a string
pub fn present_str<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    required(payload, name).and_then(Value::as_str)
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}
