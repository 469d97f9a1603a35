use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{CursorMut, Iter, IterMut, Link, NodeRef};
use crate::collections::linked::Length;
use crate::util::error::InsertError;
use crate::util::option::OptionExtension;
use crate::util::result::InsertResultExtension;

/// A list with links in both directions. See also: [`CursorMut`] for `O(1)` insertion and removal
/// at a position that has already been reached.
///
/// Positional methods follow the same clamping policy as
/// [`SinglyLinkedList`](crate::collections::linked::SinglyLinkedList): insertion at `index >= len`
/// appends, while `get` and `remove` at `index >= len - 1` operate on the tail.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The (clamped) index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

// SAFETY: The list uniquely owns its nodes, so it is as thread-safe as its elements.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared access only produces shared references to elements.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the DoublyLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns the length of a list which may not exist, treating an absent list as empty.
    pub fn len_of(list: Option<&DoublyLinkedList<T>>) -> usize {
        list.map_or(0, DoublyLinkedList::len)
    }

    /// Returns true if the DoublyLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Returns a reference to the element at `index`, clamped to the tail. Returns None only if
    /// the list is empty.
    pub fn get(&self, index: usize) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.seek_clamped(index).value()),
        }
    }

    /// Returns a mutable reference to the element at `index`, clamped to the tail. Returns None
    /// only if the list is empty.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.seek_clamped(index).value_mut()),
        }
    }

    /// Inserts `value` so that it becomes the element at `index`. If `index >= len`, the value is
    /// appended instead.
    ///
    /// If allocation fails, the process is aborted. See [`try_insert`](Self::try_insert) to handle
    /// that case.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).or_raise()
    }

    /// Inserts `value` so that it becomes the element at `index`, clamped to `len`. On failure the
    /// list is left unchanged and `value` is returned inside the error.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError<T>> {
        let (prev, next) = match &self.state {
            Empty => (None, None),
            Full(contents) => {
                let index = cmp::min(index, contents.len.get());
                if index == contents.len.get() {
                    (Some(contents.tail), None)
                } else {
                    let at = contents.seek(index);
                    (*at.prev(), Some(at))
                }
            },
        };

        self.try_link(prev, next, value).map(|_| ())
    }

    /// Removes the element at `index`, clamped to the tail, and returns it. Returns None if the
    /// list is empty.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let node = match &self.state {
            Empty => return None,
            Full(contents) => contents.seek_clamped(index),
        };

        // SAFETY: node was found by seeking through this list.
        Some(unsafe { self.unlink(node) })
    }

    /// Add the provided element to the front of the DoublyLinkedList.
    pub fn push_front(&mut self, value: T) {
        let next = self.state.head();
        self.try_link(None, next, value).or_raise();
    }

    /// Add the provided element to the back of the DoublyLinkedList.
    pub fn push_back(&mut self, value: T) {
        let prev = self.state.tail();
        self.try_link(prev, None, value).or_raise();
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.state.head()?;
        // SAFETY: head belongs to this list.
        Some(unsafe { self.unlink(head) })
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.state.tail()?;
        // SAFETY: tail belongs to this list.
        Some(unsafe { self.unlink(tail) })
    }

    /// Removes the first element matching `predicate` and returns it.
    pub fn remove_first<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) -> Option<T> {
        let mut curr = self.state.head();
        while let Some(node) = curr {
            if predicate(node.value()) {
                // SAFETY: node was reached by walking this list.
                return Some(unsafe { self.unlink(node) });
            }
            curr = *node.next();
        }
        None
    }

    /// Reverses the order of the list in place by swapping the links of every node.
    pub fn reverse(&mut self) {
        if let Full(ListContents { head, tail, .. }) = &mut self.state {
            let mut curr = Some(*head);
            while let Some(node) = curr {
                curr = *node.next();
                mem::swap(node.prev_mut(), node.next_mut());
            }
            mem::swap(head, tail);
        }
    }

    /// Drops every element in the list, leaving it empty but usable.
    pub fn clear(&mut self) {
        if let Full(ListContents { head, .. }) = mem::take(&mut self.state) {
            let mut curr = Some(head);
            while let Some(node) = curr {
                // SAFETY: The state has been taken, so each node is freed exactly once.
                let node = unsafe { node.take_node() };
                curr = node.next;
            }
        }
    }

    /// Releases every node and the list itself, consuming the handle.
    pub fn destroy(self) {
        drop(self)
    }

    /// Returns a cursor positioned on the first element, or on the "ghost" position if the list is
    /// empty.
    pub fn cursor_front(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            current: self.state.head(),
            index: 0,
            list: self,
        }
    }

    /// Returns a cursor positioned on the last element, or on the "ghost" position if the list is
    /// empty.
    pub fn cursor_back(&mut self) -> CursorMut<'_, T> {
        let index = self.len().saturating_sub(1);
        CursorMut {
            current: self.state.tail(),
            index,
            list: self,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Links a new node holding `value` between `prev` and `next`, which must be adjacent nodes of
    /// this list (or None at either end).
    pub(crate) fn try_link(
        &mut self,
        prev: Link<T>,
        next: Link<T>,
        value: T,
    ) -> Result<NodeRef<T>, InsertError<T>> {
        match &mut self.state {
            Empty => {
                let node = NodeRef::try_new(value, None, None)?;
                self.state = Full(ListContents {
                    len: Length::ONE,
                    head: node,
                    tail: node,
                });
                Ok(node)
            },
            Full(contents) => {
                let new_len = match contents.len.try_increment() {
                    Ok(len) => len,
                    Err(error) => return Err(InsertError::new(value, error)),
                };

                let node = NodeRef::try_new(value, prev, next)?;
                match prev {
                    Some(prev) => *prev.next_mut() = Some(node),
                    None => contents.head = node,
                }
                match next {
                    Some(next) => *next.prev_mut() = Some(node),
                    None => contents.tail = node,
                }

                contents.len = new_len;
                Ok(node)
            },
        }
    }

    /// Detaches `node` from the list, relinking its neighbours, and returns its value.
    ///
    /// # Safety
    /// `node` must be a node of this list.
    pub(crate) unsafe fn unlink(&mut self, node: NodeRef<T>) -> T {
        if let Full(contents) = &mut self.state {
            match (*node.prev(), *node.next()) {
                // The only node, the state is reset below.
                (None, None) => {},
                // Removing the head, there is no predecessor to relink.
                (None, Some(next)) => {
                    *next.prev_mut() = None;
                    contents.head = next;
                },
                // Removing the tail, there is no successor to relink.
                (Some(prev), None) => {
                    *prev.next_mut() = None;
                    contents.tail = prev;
                },
                (Some(prev), Some(next)) => {
                    *prev.next_mut() = Some(next);
                    *next.prev_mut() = Some(prev);
                },
            }

            match contents.len.decrement() {
                Some(new_len) => contents.len = new_len,
                None => self.state = Empty,
            }
        }

        // SAFETY: The node is no longer reachable from the list.
        unsafe { node.take_node() }.value
    }

    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none());
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                    count += 1;
                }
                assert!(*tail == curr);
                assert_eq!(count, len.get());
            },
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> ListState<T> {
    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn head(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub const fn tail(&self) -> Link<T> {
        match self {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(*tail),
        }
    }
}

impl<T> ListContents<T> {
    /// Seeks from whichever end of the list is closer to `index`.
    ///
    /// Callers must ensure that `index < len`.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.len.last_index() - index, self.tail)
        }
    }

    pub fn seek_clamped(&self, index: usize) -> NodeRef<T> {
        self.seek(cmp::min(index, self.len.last_index()))
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodeRef<T>) -> NodeRef<T> {
        for _ in 0..count {
            // SAFETY: Callers only seek within the length of the list.
            node = unsafe { (*node.next()).unreachable() };
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodeRef<T>) -> NodeRef<T> {
        for _ in 0..count {
            // SAFETY: Callers only seek within the length of the list.
            node = unsafe { (*node.prev()).unreachable() };
        }
        node
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: Hash> Hash for DoublyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the elements head-to-tail, separated by single spaces.
impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, element) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
