#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};

#[test]
fn test_clamped_scenario() {
    let mut list = SinglyLinkedList::<i32>::new();
    list.insert(0, 5);
    assert_eq!(list.to_string(), "5");
    list.insert(0, 3);
    assert_eq!(list.to_string(), "3 5");
    list.insert(5, 9);
    assert_eq!(list.to_string(), "3 5 9", "Inserting past the end should append.");

    assert_eq!(list.remove(1), Some(5));
    assert_eq!(list.to_string(), "3 9");
    assert_eq!(list.len(), 2);
}

#[test]
fn test_append_semantics() {
    let mut list = SinglyLinkedList::new();
    for (i, index) in [0, 1, 7, 3, usize::MAX].into_iter().enumerate() {
        list.insert(index.max(list.len()), i);
        assert_eq!(
            list.back(),
            Some(&i),
            "Inserting at an index >= len should make the value the last element."
        );
    }
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
}

#[test]
fn test_tail_clamp_semantics() {
    let mut list = SinglyLinkedList::from_iter(0..5);

    assert_eq!(list.remove(4), Some(4), "Removing the last index should remove the tail.");
    assert_eq!(list.remove(10), Some(3), "Removing past the end should remove the tail.");
    assert_eq!(list.remove(usize::MAX), Some(2));
    assert_eq!(list.get(100), Some(&1), "Getting past the end should return the tail.");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1]);

    assert_eq!(list.remove(1), Some(1));
    assert_eq!(list.remove(1), Some(0), "With one element, any index removes the head.");
    assert_eq!(list.remove(0), None, "Removing from an empty list should return None.");
    assert!(list.is_empty());
    assert_eq!(list.get(0), None, "Getting from an empty list should return None.");
}

#[test]
fn test_size_invariant() {
    let mut list = SinglyLinkedList::new();
    let mut expected = 0_usize;

    for step in 0..200_usize {
        if step % 3 == 2 {
            if list.remove(step * 7 % 11).is_some() {
                expected -= 1;
            }
        } else {
            list.insert(step * 5 % 13, step);
            expected += 1;
        }
        assert_eq!(list.len(), expected);
        assert_eq!(list.iter().count(), expected, "len should match the reachable nodes.");
    }

    while list.pop_front().is_some() {
        expected -= 1;
    }
    assert_eq!(expected, 0);
    assert_eq!(list.pop_front(), None);
}

#[test]
fn test_insert_middle() {
    let mut list = SinglyLinkedList::from_iter([1, 2, 4, 5]);
    list.insert(2, 3);
    list.insert(0, 0);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 3, 4, 5]);
    assert_eq!(list.get(3), Some(&3));
    assert_eq!(list.front(), Some(&0));
    assert_eq!(list.back(), Some(&5));
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let list = SinglyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(10));
    assert_eq!(counter.count(), 0);

    drop(list);
    assert_eq!(counter.count(), 10, "Every element should be dropped exactly once.");

    let counter = CountedDrop::new(0);
    let mut list = SinglyLinkedList::new();
    for i in 0..6 {
        list.insert(i, counter.clone());
    }

    let removed = list.remove(2);
    assert_eq!(counter.count(), 0, "A removed element is owned by the caller, not dropped.");
    drop(removed);
    assert_eq!(counter.count(), 1);

    list.destroy();
    assert_eq!(counter.count(), 6, "Destroying the list should drop the remaining elements.");
}

#[test]
fn test_clear_and_reuse() {
    let counter = CountedDrop::new(0);
    let mut list = SinglyLinkedList::from_iter(iter::repeat_with(|| counter.clone()).take(4));

    list.clear();
    assert_eq!(counter.count(), 4);
    assert!(list.is_empty());

    list.push_back(counter.clone());
    assert_eq!(list.len(), 1, "A cleared list should remain usable.");
}

#[test]
fn test_reverse() {
    let mut list = SinglyLinkedList::from_iter(1..=5);
    list.reverse();
    assert_eq!(list.to_string(), "5 4 3 2 1");
    assert_eq!(list.len(), 5);

    let mut single = SinglyLinkedList::from_iter([1]);
    single.reverse();
    assert_eq!(single.front(), Some(&1));

    let mut empty = SinglyLinkedList::<u8>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_search() {
    let mut list = SinglyLinkedList::from_iter(["a", "b", "c", "b"]);
    assert_eq!(list.index_of(&"b"), Some(1));
    assert!(list.contains(&"c"));
    assert!(!list.contains(&"z"));

    assert_eq!(list.remove_first(|&s| s == "b"), Some("b"));
    assert_eq!(list.to_string(), "a c b");
    assert_eq!(list.remove_first(|&s| s == "z"), None);
    assert_eq!(list.len(), 3);
}

#[test]
fn test_len_of_absent_list() {
    let list: Option<SinglyLinkedList<u32>> = None;
    assert_eq!(SinglyLinkedList::len_of(list.as_ref()), 0);

    let list = Some(SinglyLinkedList::from_iter([1_u32, 2]));
    assert_eq!(SinglyLinkedList::len_of(list.as_ref()), 2);
}

#[test]
fn test_iterators() {
    let mut list = SinglyLinkedList::from_iter(0..5);
    for value in list.iter_mut() {
        *value *= 2;
    }
    assert_eq!(list.iter().len(), 5);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);

    if let Some(value) = list.get_mut(10) {
        *value = 9;
    }
    assert_eq!(list.clone().into_iter().collect::<Vec<_>>(), [0, 2, 4, 6, 9]);

    list.extend([10, 11]);
    assert_eq!(list.len(), 7);
    assert_eq!(list.back(), Some(&11));
}

#[test]
fn test_equality_and_format() {
    let list = SinglyLinkedList::from_iter([1, 2, 3]);
    assert_eq!(list, SinglyLinkedList::from_iter(1..=3));
    assert_ne!(list, SinglyLinkedList::from_iter(1..=4));
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(SinglyLinkedList::<u8>::new().to_string(), "");
}

#[test]
fn test_zst_support() {
    let mut list = SinglyLinkedList::new();
    for _ in 0..3 {
        list.insert(1, ZeroSizedType);
    }
    assert_eq!(list.len(), 3);
    assert_eq!(list.remove(0), Some(ZeroSizedType));
    assert_eq!(list.len(), 2);
}
