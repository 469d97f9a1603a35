#![cfg(test)]

use super::*;
use crate::collections::linked::{CircularList, DoublyLinkedList, SinglyLinkedList};

#[test]
fn test_remove_k_digits() {
    assert_eq!(remove_k_digits("1432219", 3), "1219");
    assert_eq!(remove_k_digits("10200", 1), "200", "Leading zeros should be stripped.");
    assert_eq!(remove_k_digits("10", 2), "0", "Removing every digit should leave 0.");
    assert_eq!(remove_k_digits("10", 1), "0", "A lone zero should be kept rather than stripped.");
    assert_eq!(remove_k_digits("112", 1), "11");
    assert_eq!(remove_k_digits("12345", 2), "123", "Removals left over should come off the end.");
    assert_eq!(remove_k_digits("9", 0), "9");
    assert_eq!(remove_k_digits("", 3), "0");
}

#[test]
fn test_remove_k_duplicates() {
    assert_eq!(remove_k_duplicates("deeedbbcccbdaa", 3), "aa");
    assert_eq!(remove_k_duplicates("pbbcggttciiippooaais", 2), "ps");
    assert_eq!(remove_k_duplicates("abcd", 2), "abcd");
    assert_eq!(remove_k_duplicates("aaa", 1), "", "A k of 1 should remove every character.");
    assert_eq!(remove_k_duplicates("aab", 0), "aab", "A k of 0 should remove nothing.");
    assert_eq!(remove_k_duplicates("", 2), "");
}

#[test]
fn test_zuma() {
    assert_eq!(zuma("abbbac"), "c");
    assert_eq!(zuma("abc"), "abc");
    assert_eq!(zuma("aa"), "");
    assert_eq!(zuma("abba"), "", "The characters around a vanished run should annihilate.");
    assert_eq!(zuma("abcba"), "abcba");
}

#[test]
fn test_is_balanced() {
    assert!(is_balanced(""));
    assert!(is_balanced("([]{})"));
    assert!(is_balanced("fn main() { let v = [1, 2]; }"));
    assert!(!is_balanced("(]"));
    assert!(!is_balanced("())"), "An unopened closing bracket should be rejected.");
    assert!(!is_balanced("{"), "An unclosed bracket should be rejected.");
}

#[test]
fn test_is_palindrome() {
    assert!(is_palindrome(&DoublyLinkedList::from_iter("racecar".chars())));
    assert!(is_palindrome(&DoublyLinkedList::from_iter([1, 2, 2, 1])));
    assert!(!is_palindrome(&DoublyLinkedList::from_iter([1, 2, 3])));
    assert!(is_palindrome(&DoublyLinkedList::<u8>::new()));
    assert!(is_palindrome(&DoublyLinkedList::from_iter([7])));
}

#[test]
fn test_dedup_sorted() {
    let mut list = CircularList::from_iter([1, 1, 2, 3, 3, 3, 4, 5, 5]);
    assert_eq!(dedup_sorted(&mut list), 4);
    assert_eq!(list.to_string(), "1 2 3 4 5");

    let mut wrapped = CircularList::from_iter([2, 2]);
    wrapped.push_front(2);
    assert_eq!(dedup_sorted(&mut wrapped), 2);
    assert_eq!(wrapped.len(), 1);

    let mut empty = CircularList::<u8>::new();
    assert_eq!(dedup_sorted(&mut empty), 0);
}

#[test]
fn test_dedup_sorted_cursor() {
    let mut list = DoublyLinkedList::from_iter([1, 1, 2, 3, 3, 3, 4, 5, 5]);
    assert_eq!(dedup_sorted_cursor(&mut list), 4);
    assert_eq!(list.to_string(), "1 2 3 4 5");
    list.verify_double_links();

    let mut same = DoublyLinkedList::from_iter(["x"; 5]);
    assert_eq!(dedup_sorted_cursor(&mut same), 4);
    assert_eq!(same.len(), 1);
    same.verify_double_links();

    let mut empty = DoublyLinkedList::<u8>::new();
    assert_eq!(dedup_sorted_cursor(&mut empty), 0);
}

fn digits(values: &[u8]) -> SinglyLinkedList<u8> {
    values.iter().copied().collect()
}

#[test]
fn test_sum_lists() {
    assert_eq!(
        sum_lists(&digits(&[0, 0, 3]), &digits(&[5, 1, 7])),
        digits(&[5, 1, 0, 1]),
        "A carry out of the last digit should add a new digit."
    );
    assert_eq!(sum_lists(&digits(&[2, 4, 3]), &digits(&[5, 6, 4])), digits(&[7, 0, 8]));
    assert_eq!(
        sum_lists(&digits(&[9, 9, 9, 9]), &digits(&[1])),
        digits(&[0, 0, 0, 0, 1]),
        "The carry should run through the rest of the longer list."
    );
    assert_eq!(sum_lists(&digits(&[1]), &digits(&[9, 9])), digits(&[0, 0, 1]));
    assert_eq!(sum_lists(&digits(&[4, 2]), &digits(&[])), digits(&[4, 2]));
    assert!(sum_lists(&digits(&[]), &digits(&[])).is_empty());
}

#[test]
fn test_kth_from_end() {
    let list = SinglyLinkedList::from_iter(['a', 'b', 'c', 'd', 'e']);
    assert_eq!(kth_from_end(&list, 1), Some(&'e'), "k = 1 should be the tail.");
    assert_eq!(kth_from_end(&list, 2), Some(&'d'));
    assert_eq!(kth_from_end(&list, 5), Some(&'a'), "k = len should be the head.");
    assert_eq!(kth_from_end(&list, 0), None);
    assert_eq!(kth_from_end(&list, 6), None);
    assert_eq!(kth_from_end(&list, usize::MAX), None);
    assert_eq!(kth_from_end(&SinglyLinkedList::<char>::new(), 1), None);
}
