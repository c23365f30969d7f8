//! Null-safe access into upstream weather documents
//!
//! Provider payloads are kept as `serde_json::Value`. Every accessor here
//! returns an explicit absent value when any step of the path is missing
//! or is not an object, so callers decide the default instead of failing.

use serde_json::Value;

use crate::units::coerce_number;

/// Walk `path` through nested objects
pub fn lookup<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(doc, |current, key| current.as_object()?.get(*key))
}

/// Numeric field at `path`, `None` when absent or not numeric
pub fn number_at(doc: &Value, path: &[&str]) -> Option<f64> {
    let value = lookup(doc, path)?;
    let coerced = coerce_number(value, f64::NAN);
    (!coerced.is_nan()).then_some(coerced)
}

/// Numeric field at `path`, falling back to `default`
pub fn number_or(doc: &Value, path: &[&str], default: f64) -> f64 {
    lookup(doc, path)
        .map(|value| coerce_number(value, default))
        .unwrap_or(default)
}

/// Integer field at `path`; floats and strings are rejected
pub fn integer_at(doc: &Value, path: &[&str]) -> Option<i64> {
    lookup(doc, path)?.as_i64()
}

/// String field at `path`
pub fn text_at<'a>(doc: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(doc, path)?.as_str()
}
