//! Presence checks shared by the index builders.

use serde_json::Value;

/// Returns `true` when an optional lookup produced a value.
///
/// This is a presence check, not a truthiness check: an empty string or
/// `false` stored under a key still counts as defined.
pub fn is_defined<T>(value: Option<&T>) -> bool {
    value.is_some()
}

/// Refine an optional JSON value so that `null` counts as absent.
pub fn defined_value(value: Option<&Value>) -> Option<&Value> {
    value.filter(|value| !value.is_null())
}
