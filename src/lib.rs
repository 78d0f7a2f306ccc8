#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Key-field selectors for dynamic JSON records.
pub mod field;
/// Grouping and duplicate-key diagnostics.
pub mod group;
/// Unique-key index builders and the incremental accumulator.
pub mod index;
/// Whitespace normalization for record string fields.
pub mod text;
/// Shared type aliases.
pub mod types;
/// Presence checks shared by the index builders.
pub mod validation;

mod errors;

pub use errors::IndexError;
pub use field::KeyField;
pub use group::{duplicate_keys, group_by_key, key_counts};
pub use index::{UniqueIndex, unique_key_index, unique_key_index_json};
pub use text::{collapse_whitespace, normalize_string_fields};
pub use types::{FieldName, KeyValue};
pub use validation::{defined_value, is_defined};
