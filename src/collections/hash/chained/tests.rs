#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::linked::SinglyLinkedList;
use crate::util::alloc::CountedDrop;
use crate::util::error::TableError;
use crate::util::hash::{IdentityHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

#[test]
fn test_insert_and_get() {
    let mut table = ChainedHashTable::<String, u32>::with_buckets(8);
    assert_eq!(table.insert(String::from("alice"), 3), None);
    assert_eq!(table.insert(String::from("bob"), 5), None);
    assert_eq!(table.len(), 2);

    assert_eq!(table.get("alice"), Some(&3), "Lookups should accept borrowed keys.");
    assert_eq!(table.get("carol"), None);
    assert!(table.contains_key("bob"));

    if let Some(value) = table.get_mut("bob") {
        *value += 1;
    }
    assert_eq!(table.get_entry("bob"), Some((&String::from("bob"), &6)));
}

#[test]
fn test_insert_replaces() {
    let mut table = ChainedHashTable::<&str, i32>::with_buckets(4);
    table.insert("score", 1);
    assert_eq!(table.insert("score", 2), Some(1), "Inserting an existing key should replace.");
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(&"score"), Some(&2));
}

#[test]
fn test_insert_duplicate() {
    let mut table = ChainedHashTable::<&str, i32>::with_buckets(4);
    table.insert_duplicate("guest", 1);
    table.insert_duplicate("guest", 2);
    table.insert_duplicate("host", 0);
    table.insert_duplicate("guest", 3);
    assert_eq!(table.len(), 4);

    assert_eq!(table.get(&"guest"), Some(&1), "Lookups should find the earliest entry.");
    assert_eq!(table.get_all(&"guest").copied().collect::<Vec<_>>(), [1, 2, 3]);

    assert_eq!(table.remove(&"guest"), Some(1));
    assert_eq!(table.get(&"guest"), Some(&2));
    assert_eq!(table.get_all(&"missing").count(), 0);
}

#[test]
fn test_collisions_share_a_chain() {
    let mut table = ChainedHashTable::with_buckets_and_hasher(3, IdentityHasherBuilder);
    table.insert(ManualHash::new(1, "one"), 1);
    table.insert(ManualHash::new(4, "four"), 4);
    table.insert(ManualHash::new(7, "seven"), 7);
    table.insert(ManualHash::new(2, "two"), 2);

    assert_eq!(table.bucket_index(&ManualHash::new(4, "four")), 1);
    assert_eq!(
        table.bucket(1).map(SinglyLinkedList::len),
        Some(3),
        "Colliding keys should be chained in the same bucket."
    );
    assert_eq!(table.bucket(0).map(SinglyLinkedList::len), Some(0));
    assert!(table.bucket(3).is_none());

    assert_eq!(table.remove(&ManualHash::new(4, "four")), Some(4));
    assert_eq!(table.get(&ManualHash::new(1, "one")), Some(&1));
    assert_eq!(table.get(&ManualHash::new(7, "seven")), Some(&7));
    assert_eq!(
        table.get(&ManualHash::new(2, "seven")),
        None,
        "An equal key in the wrong bucket shouldn't be found."
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn test_iteration_order() {
    let mut table = ChainedHashTable::with_buckets_and_hasher(4, IdentityHasherBuilder);
    for key in [6_usize, 1, 5, 2, 4] {
        table.insert(key, key * 10);
    }

    let entries = table.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
    assert_eq!(
        entries,
        [(4, 40), (1, 10), (5, 50), (6, 60), (2, 20)],
        "Entries should be visited bucket by bucket, then in chain order."
    );
    assert_eq!(table.iter().len(), 5);
}

#[test]
fn test_zero_buckets() {
    let result = ChainedHashTable::<u8, u8>::try_with_buckets(0);
    assert!(matches!(result, Err(TableError::NoBuckets(_))));

    assert_panics!({
        let _ = ChainedHashTable::<u8, u8>::with_buckets(0);
    });
}

#[test]
fn test_clear_and_drop_counts() {
    let counter = CountedDrop::new(0);
    let mut table = ChainedHashTable::<usize, CountedDrop>::with_buckets(5);
    table.extend((0..10).zip(iter::repeat_with(|| counter.clone())));
    assert_eq!(table.len(), 10);

    table.insert(3, counter.clone());
    assert_eq!(counter.count(), 1, "A replaced value should be dropped once.");

    drop(table.remove(&7));
    assert_eq!(counter.count(), 2);

    table.clear();
    assert_eq!(counter.count(), 11);
    assert!(table.is_empty());
    assert_eq!(table.bucket_count(), 5, "Clearing should keep the buckets.");

    table.insert_duplicate(1, counter.clone());
    table.insert_duplicate(1, counter.clone());
    drop(table);
    assert_eq!(counter.count(), 13);
}

#[test]
fn test_debug_format() {
    let mut table = ChainedHashTable::with_buckets_and_hasher(2, IdentityHasherBuilder);
    table.insert(0_usize, 'a');
    table.insert(2, 'b');
    table.insert(1, 'c');
    assert_eq!(
        format!("{table:?}"),
        "ChainedHashTable { buckets: [{0: 'a', 2: 'b'}, {1: 'c'}], len: 3 }"
    );
}
