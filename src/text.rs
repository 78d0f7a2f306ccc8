//! Whitespace normalization for record string fields.

use serde_json::{Map, Value};

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn collapse_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

/// Normalize every top-level string field of a JSON object in place.
///
/// Non-string fields and nested values are left untouched; callers that
/// need deep normalization walk the structure themselves.
pub fn normalize_string_fields(record: &mut Map<String, Value>) {
    for value in record.values_mut() {
        if let Value::String(text) = value {
            *text = collapse_whitespace(text.as_str());
        }
    }
}
