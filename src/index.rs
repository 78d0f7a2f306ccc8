use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::IndexError;
use crate::field::KeyField;
use crate::types::KeyValue;
use crate::validation::is_defined;

/// Insertion-ordered accumulator mapping unique keys to owned records.
///
/// Entries iterate in first-seen key order. Inserting through
/// [`UniqueIndex::try_insert`] enforces key uniqueness; callers that want
/// last-write-wins use [`UniqueIndex::upsert`] instead.
#[derive(Clone, Debug)]
pub struct UniqueIndex<T> {
    entries: IndexMap<KeyValue, T>,
}

impl<T> UniqueIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Create an empty index with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a record under `key`, failing when the key is already present.
    ///
    /// Presence is a containment check: an existing entry blocks the insert
    /// regardless of what value it holds.
    pub fn try_insert(&mut self, key: impl Into<KeyValue>, record: T) -> Result<(), IndexError> {
        let key = key.into();
        if is_defined(self.entries.get(&key)) {
            return Err(IndexError::DuplicateKey { key });
        }
        self.entries.insert(key, record);
        Ok(())
    }

    /// Insert or replace the record under `key`, returning any displaced record.
    pub fn upsert(&mut self, key: impl Into<KeyValue>, record: T) -> Option<T> {
        self.entries.insert(key.into(), record)
    }

    /// Look up the record stored under `key`.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    /// Returns `true` when `key` already has an entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyValue, &T)> {
        self.entries.iter()
    }

    /// Consume the index and return the underlying map.
    pub fn into_inner(self) -> IndexMap<KeyValue, T> {
        self.entries
    }
}

impl<T> Default for UniqueIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a key→record map from `records`, failing on the first duplicate key.
///
/// `key` borrows a string-valued field off each record. The sequence is
/// consumed in a single pass over one accumulator that is mutated in
/// place; the map is never rebuilt per iteration. The second occurrence
/// of a key stops the pass immediately, the partial accumulator is
/// dropped, and the error carries the offending key. An empty input
/// yields an empty map.
pub fn unique_key_index<T, F>(
    records: impl IntoIterator<Item = T>,
    key: F,
) -> Result<IndexMap<KeyValue, T>, IndexError>
where
    F: Fn(&T) -> &str,
{
    let records = records.into_iter();
    let mut index = UniqueIndex::with_capacity(records.size_hint().0);
    for record in records {
        let key_value = key(&record).to_string();
        index.try_insert(key_value, record)?;
    }
    debug!(entries = index.len(), "unique key index built");
    Ok(index.into_inner())
}

/// Build a key→record map from JSON object records.
///
/// The runtime counterpart of [`unique_key_index`] for records without a
/// compile-time type: each record must carry `field` as a non-null string
/// value, validated per record by [`KeyField::extract`]. Duplicate-key
/// semantics are identical to the typed builder.
pub fn unique_key_index_json(
    records: impl IntoIterator<Item = Map<String, Value>>,
    field: &KeyField,
) -> Result<IndexMap<KeyValue, Map<String, Value>>, IndexError> {
    let records = records.into_iter();
    let mut index = UniqueIndex::with_capacity(records.size_hint().0);
    for record in records {
        let key_value = field.extract(&record)?.to_string();
        index.try_insert(key_value, record)?;
    }
    debug!(
        field = field.as_str(),
        entries = index.len(),
        "unique key index built"
    );
    Ok(index.into_inner())
}
