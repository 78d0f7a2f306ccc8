use std::cell::Cell;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use recmap::{
    IndexError, UniqueIndex, duplicate_keys, group_by_key, key_counts, unique_key_index,
};

#[derive(Debug, Clone, PartialEq)]
struct Article {
    slug: String,
    title: String,
    words: usize,
}

fn article(slug: &str, words: usize) -> Article {
    Article {
        slug: slug.to_string(),
        title: format!("Article {slug}"),
        words,
    }
}

fn corpus(count: usize) -> Vec<Article> {
    (0..count)
        .map(|idx| article(&format!("a{idx:03}"), idx * 10))
        .collect()
}

#[test]
fn index_holds_one_entry_per_record_with_identity_preserved() {
    let records = vec![
        article("alpha", 100),
        article("beta", 250),
        article("gamma", 40),
    ];
    let index = unique_key_index(records.clone(), |article| article.slug.as_str()).unwrap();

    assert_eq!(index.len(), records.len());
    for record in &records {
        assert_eq!(index.get(&record.slug), Some(record));
    }
}

#[test]
fn empty_input_yields_an_empty_map() {
    let index = unique_key_index(Vec::<Article>::new(), |article| article.slug.as_str()).unwrap();
    assert!(index.is_empty());
}

#[test]
fn duplicate_slug_fails_with_the_offending_key() {
    let records = vec![article("alpha", 100), article("beta", 250), article("alpha", 7)];
    let err = unique_key_index(records, |article| article.slug.as_str()).unwrap_err();
    assert!(matches!(err, IndexError::DuplicateKey { key } if key == "alpha"));
}

#[test]
fn build_stops_at_the_second_occurrence_of_a_key() {
    let pulled = Cell::new(0_usize);
    let records = [
        article("alpha", 1),
        article("beta", 2),
        article("alpha", 3),
        article("gamma", 4),
    ]
    .into_iter()
    .map(|record| {
        pulled.set(pulled.get() + 1);
        record
    });

    let err = unique_key_index(records, |article| article.slug.as_str()).unwrap_err();
    assert!(matches!(err, IndexError::DuplicateKey { key } if key == "alpha"));
    assert_eq!(pulled.get(), 3);
}

#[test]
fn repeated_builds_from_the_same_input_are_equal() {
    let records = corpus(32);
    let first = unique_key_index(records.clone(), |article| article.slug.as_str()).unwrap();
    let second = unique_key_index(records, |article| article.slug.as_str()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shuffled_input_builds_the_same_key_record_set() {
    let records = corpus(64);
    let baseline = unique_key_index(records.clone(), |article| article.slug.as_str()).unwrap();

    let mut rng = StdRng::from_seed([11_u8; 32]);
    let mut shuffled = records;
    shuffled.shuffle(&mut rng);
    let permuted = unique_key_index(shuffled, |article| article.slug.as_str()).unwrap();

    assert_eq!(baseline, permuted);
}

#[test]
fn try_insert_rejects_a_present_key_and_keeps_the_first_record() {
    let mut index = UniqueIndex::new();
    index.try_insert("alpha", article("alpha", 100)).unwrap();
    let err = index.try_insert("alpha", article("alpha", 999)).unwrap_err();

    assert!(matches!(err, IndexError::DuplicateKey { key } if key == "alpha"));
    assert_eq!(index.get("alpha").map(|article| article.words), Some(100));
    assert_eq!(index.len(), 1);
}

#[test]
fn upsert_replaces_and_returns_the_displaced_record() {
    let mut index = UniqueIndex::new();
    index.try_insert("alpha", article("alpha", 100)).unwrap();
    let displaced = index.upsert("alpha", article("alpha", 999));

    assert_eq!(displaced.map(|article| article.words), Some(100));
    assert_eq!(index.get("alpha").map(|article| article.words), Some(999));
    assert_eq!(index.len(), 1);
}

#[test]
fn diagnostics_agree_with_the_failing_builder() {
    let records = vec![
        article("alpha", 1),
        article("beta", 2),
        article("alpha", 3),
        article("gamma", 4),
        article("beta", 5),
        article("alpha", 6),
    ];

    let dupes = duplicate_keys(&records, |article| article.slug.as_str());
    assert_eq!(dupes, vec![("alpha".to_string(), 3), ("beta".to_string(), 2)]);
    assert!(unique_key_index(records.clone(), |article| article.slug.as_str()).is_err());

    let counts = key_counts(&records, |article| article.slug.as_str());
    assert_eq!(counts.values().sum::<usize>(), records.len());

    let unique = corpus(8);
    assert!(duplicate_keys(&unique, |article| article.slug.as_str()).is_empty());
    assert!(unique_key_index(unique, |article| article.slug.as_str()).is_ok());
}

#[test]
fn group_by_key_collects_colliding_records_in_input_order() {
    let records = vec![article("alpha", 1), article("beta", 2), article("alpha", 3)];
    let groups = group_by_key(records, |article| article.slug.as_str());

    assert_eq!(groups.len(), 2);
    let words: Vec<_> = groups["alpha"].iter().map(|article| article.words).collect();
    assert_eq!(words, vec![1, 3]);
}
