//! Grouping and duplicate-key diagnostics for record sequences.
//!
//! [`crate::unique_key_index`] fails fast on the first collision. The
//! helpers here serve callers that need the full collision picture, or
//! that bucket by a key on purpose.

use indexmap::IndexMap;

use crate::types::KeyValue;

/// Bucket records by extracted key, preserving input order inside buckets.
///
/// Keys appear in first-seen order. Colliding keys are collected rather
/// than rejected.
pub fn group_by_key<T, F>(
    records: impl IntoIterator<Item = T>,
    key: F,
) -> IndexMap<KeyValue, Vec<T>>
where
    F: Fn(&T) -> &str,
{
    let mut groups: IndexMap<KeyValue, Vec<T>> = IndexMap::new();
    for record in records {
        let key_value = key(&record).to_string();
        groups.entry(key_value).or_default().push(record);
    }
    groups
}

/// Count occurrences of each extracted key, in first-seen key order.
pub fn key_counts<T, F>(records: &[T], key: F) -> IndexMap<KeyValue, usize>
where
    F: Fn(&T) -> &str,
{
    let mut counts: IndexMap<KeyValue, usize> = IndexMap::new();
    for record in records {
        *counts.entry(key(record).to_string()).or_insert(0) += 1;
    }
    counts
}

/// List the keys occurring more than once, with their counts.
///
/// Empty exactly when [`crate::unique_key_index`] succeeds on the same
/// records.
pub fn duplicate_keys<T, F>(records: &[T], key: F) -> Vec<(KeyValue, usize)>
where
    F: Fn(&T) -> &str,
{
    key_counts(records, key)
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect()
}
