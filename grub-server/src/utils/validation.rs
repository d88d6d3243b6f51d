//! Input validation helpers
//!
//! Payload fields arrive as raw JSON values; these helpers decide whether a
//! value counts as present, as non-empty text, or as a positive integer.

use serde_json::Value;

/// Largest integer a JSON number can carry without precision loss (2^53 - 1)
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// A value that is neither missing nor falsy (`null`, `false`, `0`, `""`)
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Non-empty string content, or `None` for anything else
pub fn required_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Integer in `1..=MAX_SAFE_INTEGER`
///
/// Follows JSON number semantics: `3` and `3.0` qualify, `1.5`, `"3"`,
/// `true` and `null` do not.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    let int = match n.as_u64() {
        Some(u) => u,
        None if n.is_i64() => return None,
        None => {
            let f = n.as_f64()?;
            if f.fract() != 0.0 || f <= 0.0 || f > MAX_SAFE_INTEGER as f64 {
                return None;
            }
            f as u64
        }
    };
    (1..=MAX_SAFE_INTEGER).contains(&int).then_some(int)
}

/// Payload id that conflicts with the route id, rendered for the message
///
/// Empty or falsy ids count as omitted. A string id conflicts when it
/// differs from `route_id`; any other truthy id always conflicts.
pub fn mismatched_id(value: Option<&Value>, route_id: &str) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value? {
        Value::String(s) if s == route_id => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
