use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::IndexError;
use crate::types::FieldName;
use crate::validation::defined_value;

/// Names the record field whose string value keys an index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyField {
    name: FieldName,
}

impl KeyField {
    /// Create a selector for the field called `name`.
    pub fn new(name: impl Into<FieldName>) -> Self {
        Self { name: name.into() }
    }

    /// Return the raw field name.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Read this field's string value off a JSON object record.
    ///
    /// A missing or null field reports [`IndexError::MissingKeyField`]; a
    /// present non-string value reports [`IndexError::NonStringKeyField`]
    /// naming the JSON type that was found.
    pub fn extract<'a>(&self, record: &'a Map<String, Value>) -> Result<&'a str, IndexError> {
        match defined_value(record.get(&self.name)) {
            Some(Value::String(text)) => Ok(text),
            Some(other) => Err(IndexError::NonStringKeyField {
                field: self.name.clone(),
                found: json_type_name(other),
            }),
            None => Err(IndexError::MissingKeyField {
                field: self.name.clone(),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
