#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_lifo_order() {
    let mut stack = Stack::new();
    for value in 0..10 {
        stack.push(value);
        assert_eq!(stack.peek(), Some(&value), "The last pushed value should be on top.");
    }

    for value in (0..10).rev() {
        assert_eq!(stack.pop(), Some(value), "Values should come out in reverse order.");
    }
    assert!(stack.is_empty());
}

#[test]
fn test_empty_stack() {
    let mut stack = Stack::<String>::new();
    assert_eq!(stack.peek(), None, "Peeking an empty stack should return None.");
    assert_eq!(stack.peek_mut(), None);
    assert_eq!(stack.pop(), None, "Popping an empty stack should return None.");
    assert_eq!(stack.len(), 0);

    let absent: Option<Stack<String>> = None;
    assert_eq!(Stack::len_of(absent.as_ref()), 0);
    assert_eq!(Stack::len_of(Some(&stack)), 0);
}

#[test]
fn test_peek_mut_and_iter() {
    let mut stack = Stack::from_iter([1, 2, 3]);
    if let Some(top) = stack.peek_mut() {
        *top = 30;
    }
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [30, 2, 1]);
    assert_eq!(stack.to_string(), "30 2 1");
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.clone(), stack);
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), [30, 2, 1]);
}

#[test]
fn test_try_push() {
    let mut stack = Stack::new();
    assert!(stack.try_push('a').is_ok());
    assert!(stack.try_push('b').is_ok());
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(&'b'));
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let mut stack = Stack::from_iter(iter::repeat_with(|| counter.clone()).take(5));

    drop(stack.pop());
    assert_eq!(counter.count(), 1);

    stack.clear();
    assert_eq!(counter.count(), 5);
    assert!(stack.is_empty());

    stack.extend(iter::repeat_with(|| counter.clone()).take(3));
    stack.destroy();
    assert_eq!(counter.count(), 8, "Destroying the stack should drop the remaining elements.");
}
