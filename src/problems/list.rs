//! Problems on the linked lists.

use std::iter;

use crate::collections::linked::{CircularList, DoublyLinkedList, SinglyLinkedList};

/// Adds two numbers stored as lists of decimal digits, least significant digit first, and returns
/// the sum in the same form. The result is built while both lists are walked once, and a carry
/// left over at the end becomes a new most significant digit.
///
/// Two empty lists sum to an empty list.
///
/// # Examples
/// ```
/// # use linked_containers::collections::linked::SinglyLinkedList;
/// # use linked_containers::problems::sum_lists;
/// // 300 + 715
/// let left = SinglyLinkedList::from_iter([0, 0, 3]);
/// let right = SinglyLinkedList::from_iter([5, 1, 7]);
/// assert_eq!(sum_lists(&left, &right).to_string(), "5 1 0 1");
/// ```
pub fn sum_lists(
    left: &SinglyLinkedList<u8>,
    right: &SinglyLinkedList<u8>,
) -> SinglyLinkedList<u8> {
    let mut left = left.iter().copied();
    let mut right = right.iter().copied();
    let mut carry = 0_u16;

    iter::from_fn(|| {
        let (l, r) = (left.next(), right.next());
        if l.is_none() && r.is_none() && carry == 0 {
            return None;
        }

        let sum = u16::from(l.unwrap_or(0)) + u16::from(r.unwrap_or(0)) + carry;
        carry = sum / 10;
        Some((sum % 10) as u8)
    })
    .collect()
}

/// Returns the `k`th element counting back from the tail, where `k = 1` is the tail itself.
/// Returns None if `k` is 0 or larger than the list.
///
/// A leading iterator is sent `k` elements ahead, then both iterators advance together until the
/// leader runs out, so the list is only walked once.
///
/// # Examples
/// ```
/// # use linked_containers::collections::linked::SinglyLinkedList;
/// # use linked_containers::problems::kth_from_end;
/// let list = SinglyLinkedList::from_iter([10, 20, 30, 40]);
/// assert_eq!(kth_from_end(&list, 1), Some(&40));
/// assert_eq!(kth_from_end(&list, 4), Some(&10));
/// assert_eq!(kth_from_end(&list, 5), None);
/// ```
pub fn kth_from_end<T>(list: &SinglyLinkedList<T>, k: usize) -> Option<&T> {
    if k == 0 {
        return None;
    }

    let mut lead = list.iter();
    for _ in 0..k {
        lead.next()?;
    }

    let mut trail = list.iter();
    for _ in lead {
        trail.next();
    }
    trail.next()
}

/// Returns true if `list` reads the same from either end. Both ends are walked towards the middle
/// at once, so only half of the list is compared.
pub fn is_palindrome<T: PartialEq>(list: &DoublyLinkedList<T>) -> bool {
    let half = list.len() / 2;
    list.iter().zip(list.iter().rev()).take(half).all(|(front, back)| front == back)
}

/// Removes adjacent duplicates from a sorted circular list, keeping the first element of each run.
/// Returns the number of elements removed.
///
/// Only neighbours within one lap are compared: the tail is never compared with the head, so a
/// list that is sorted but happens to wrap around keeps both.
pub fn dedup_sorted<T: PartialEq>(list: &mut CircularList<T>) -> usize {
    let mut removed = 0;
    let mut index = 0;

    while index + 1 < list.len() {
        if list.get(index) == list.get(index + 1) {
            list.remove(index + 1);
            removed += 1;
        } else {
            index += 1;
        }
    }

    removed
}

/// Removes adjacent duplicates from a sorted doubly linked list, keeping the first element of each
/// run. Returns the number of elements removed.
///
/// This walks the list once with a [`CursorMut`](crate::collections::linked::CursorMut), removing
/// each duplicate in `O(1)`.
pub fn dedup_sorted_cursor<T: PartialEq>(list: &mut DoublyLinkedList<T>) -> usize {
    let mut removed = 0;
    let mut cursor = list.cursor_front();

    // The cursor is never on the ghost inside the loop, so current is always Some.
    while !cursor.is_ghost() {
        if cursor.peek_next() == cursor.current() {
            cursor.move_next();
            cursor.remove_current();
            cursor.move_prev();
            removed += 1;
        } else {
            cursor.move_next();
        }
    }

    removed
}
