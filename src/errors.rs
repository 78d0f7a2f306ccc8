use thiserror::Error;

use crate::types::{FieldName, KeyValue};

/// Error type for unique-key index construction and key-field access.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("records contain duplicate unique key '{key}'")]
    DuplicateKey { key: KeyValue },
    #[error("record field '{field}' is missing or null")]
    MissingKeyField { field: FieldName },
    #[error("record field '{field}' holds a {found} value, expected a string")]
    NonStringKeyField {
        field: FieldName,
        found: &'static str,
    },
}
