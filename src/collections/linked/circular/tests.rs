#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

fn collect<T: Copy>(list: &CircularList<T>) -> Vec<T> {
    list.iter().copied().collect()
}

/// Walks the ring in both directions and checks that each lap closes after exactly `len` nodes.
fn verify_ring<T>(list: &CircularList<T>) {
    let (Some(head), Some(tail)) = (list.state.head(), list.state.tail()) else {
        assert!(list.is_empty());
        return;
    };

    let mut fwd = head;
    let mut bwd = head;
    for _ in 0..list.len() {
        assert!(*fwd.next().prev() == fwd, "Each node's successor should link back to it.");
        fwd = *fwd.next();
        bwd = *bwd.prev();
    }
    assert!(fwd == head, "A forward lap should return to the head.");
    assert!(bwd == head, "A backward lap should return to the head.");
    assert!(*tail.next() == head);
}

#[test]
fn test_clamped_scenario() {
    let mut list = CircularList::new();
    list.insert(0, 5);
    list.insert(0, 3);
    list.insert(5, 9);
    assert_eq!(list.to_string(), "3 5 9");
    verify_ring(&list);

    assert_eq!(list.remove(1), Some(5));
    assert_eq!(list.to_string(), "3 9");
    verify_ring(&list);
}

#[test]
fn test_single_node_ring() {
    let mut list = CircularList::new();
    list.push_back('a');
    verify_ring(&list);
    assert_eq!(list.front(), Some(&'a'));
    assert_eq!(list.back(), Some(&'a'), "A lone node is both head and tail.");
    assert_eq!(list.get(41), Some(&'a'));

    assert_eq!(list.remove(3), Some('a'));
    assert!(list.is_empty());
    assert_eq!(list.remove(0), None);
    assert_eq!(list.get(0), None);
}

#[test]
fn test_get_wraps() {
    let list = CircularList::from_iter(10..15);
    assert_eq!(list.get(0), Some(&10));
    assert_eq!(list.get(4), Some(&14));
    assert_eq!(list.get(5), Some(&10), "get should wrap around modulo len.");
    assert_eq!(list.get(13), Some(&13));
    assert_eq!(list.get(usize::MAX), list.get(usize::MAX % 5));
}

#[test]
fn test_remove_clamps() {
    let mut list = CircularList::from_iter(0..5);
    assert_eq!(list.remove(100), Some(4), "remove should clamp rather than wrap.");
    assert_eq!(list.remove(0), Some(0));
    verify_ring(&list);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(collect(&list), [1, 2, 3]);
}

#[test]
fn test_insert_positions() {
    let mut list = CircularList::new();
    for (index, value) in [(0, 2), (0, 0), (1, 1), (9, 4), (3, 3)] {
        list.insert(index, value);
        verify_ring(&list);
    }
    assert_eq!(collect(&list), [0, 1, 2, 3, 4]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
}

#[test]
fn test_size_invariant() {
    let mut list = CircularList::new();
    let mut expected = 0_usize;
    for step in 0..150_usize {
        if step % 4 == 3 {
            if list.remove(step % 7).is_some() {
                expected -= 1;
            }
        } else {
            list.insert(step % 5, step);
            expected += 1;
        }
        assert_eq!(list.len(), expected);
        assert_eq!(list.iter().count(), expected);
    }
    verify_ring(&list);
}

#[test]
fn test_rotate_and_iter_from() {
    let mut list = CircularList::from_iter(1..=5);
    assert_eq!(list.iter_from(3).copied().collect::<Vec<_>>(), [4, 5, 1, 2, 3]);
    assert_eq!(list.iter_from(8).len(), 5);
    assert_eq!(list.iter_from(2).next_back(), Some(&2));

    list.rotate(2);
    verify_ring(&list);
    assert_eq!(list.to_string(), "3 4 5 1 2");
    list.rotate(8);
    assert_eq!(list.to_string(), "1 2 3 4 5", "Rotation should wrap around.");

    let mut empty = CircularList::<u8>::new();
    empty.rotate(3);
    assert_eq!(empty.iter_from(1).next(), None);
}

#[test]
fn test_push_pop() {
    let mut list = CircularList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert_eq!(list.pop_back(), None);
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let mut list = CircularList::from_iter(iter::repeat_with(|| counter.clone()).take(7));

    drop(list.remove(2));
    assert_eq!(counter.count(), 1);
    list.rotate(3);
    list.clear();
    assert_eq!(counter.count(), 7, "Clearing should drop each element exactly once.");

    list.extend(iter::repeat_with(|| counter.clone()).take(2));
    list.destroy();
    assert_eq!(counter.count(), 9);
}

#[test]
fn test_iterators_and_traits() {
    let mut list = CircularList::from_iter(0..4);
    for value in list.iter_mut() {
        *value *= 3;
    }
    if let Some(value) = list.get_mut(5) {
        *value = 1;
    }
    assert_eq!(collect(&list), [0, 1, 6, 9]);
    assert_eq!(list.clone(), list);
    assert_eq!(format!("{list:?}"), "[0, 1, 6, 9]");
    assert_eq!(list.index_of(&6), Some(2));
    assert!(!list.contains(&3));
    assert_eq!(CircularList::len_of(Some(&list)), 4);

    let mut into = list.into_iter();
    assert_eq!(into.next_back(), Some(9));
    assert_eq!(into.collect::<Vec<_>>(), [0, 1, 6]);
}
