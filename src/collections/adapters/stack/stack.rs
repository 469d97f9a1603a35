use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::linked::SinglyLinkedList;
use crate::collections::linked::singly::{IntoIter, Iter};
use crate::util::error::InsertError;
use crate::util::result::InsertResultExtension;

/// A last in, first out stack. The top of the stack is the head of the underlying
/// [`SinglyLinkedList`], so every operation is `O(1)`.
///
/// `peek` and `pop` on an empty stack return [`None`] rather than panicking.
///
/// # Examples
/// ```
/// # use linked_containers::collections::adapters::Stack;
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    pub(crate) list: SinglyLinkedList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack {
            list: SinglyLinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns the length of a stack which may not exist, treating an absent stack as empty.
    pub fn len_of(stack: Option<&Stack<T>>) -> usize {
        stack.map_or(0, Stack::len)
    }

    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes `value` onto the top of the stack.
    ///
    /// If allocation fails, the process is aborted.
    ///
    /// # Panics
    /// Panics if the length of the stack would overflow a [`usize`].
    pub fn push(&mut self, value: T) {
        self.try_push(value).or_raise()
    }

    /// Pushes `value` onto the top of the stack, returning it inside the error if that fails.
    pub fn try_push(&mut self, value: T) -> Result<(), InsertError<T>> {
        self.list.try_insert(0, value)
    }

    /// Removes the top of the stack and returns it.
    pub fn pop(&mut self) -> Option<T> {
        self.list.remove(0)
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.get(0)
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.list.get_mut(0)
    }

    pub fn clear(&mut self) {
        self.list.clear()
    }

    /// Releases every element and the stack itself, consuming the handle.
    pub fn destroy(self) {
        self.list.destroy()
    }

    /// Returns an iterator from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes each item in turn, so the last item of the iterator ends up on top.
impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Pops every element, from the top of the stack to the bottom.
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            list: self.list.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("len", &self.len())
            .field("top_down", &self.list)
            .finish()
    }
}

/// Formats the elements from top to bottom, separated by single spaces.
impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}
