use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, NodeRef};
use crate::collections::linked::Length;
use crate::util::error::InsertError;
use crate::util::result::InsertResultExtension;

/// A doubly linked list whose tail links back to its head, and whose head links back to its tail.
///
/// Because no link is ever missing, traversal never runs out of nodes. Every walk over the list is
/// bounded by its length instead, and there is no separate tail pointer: the tail is simply
/// `head.prev`.
///
/// `insert` and `remove` clamp their index like the other lists, but [`get`](Self::get) wraps
/// around modulo the length, so `get(len)` is the head again.
///
/// # Time Complexity
/// - `n`: The number of items in the CircularList.
/// - `i`: The (clamped or wrapped) index of the item in question.
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
/// | `rotate` | `O(min(i, n-i))` |
pub struct CircularList<T> {
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
}

// SAFETY: The list uniquely owns its nodes, so it is as thread-safe as its elements.
unsafe impl<T: Send> Send for CircularList<T> {}
// SAFETY: Shared access only produces shared references to elements.
unsafe impl<T: Sync> Sync for CircularList<T> {}

impl<T> CircularList<T> {
    /// Creates a new CircularList with no elements.
    pub const fn new() -> CircularList<T> {
        CircularList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    /// Returns the length of a list which may not exist, treating an absent list as empty.
    pub fn len_of(list: Option<&CircularList<T>>) -> usize {
        list.map_or(0, CircularList::len)
    }

    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub const fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    pub const fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.prev().value()),
        }
    }

    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.prev().value_mut()),
        }
    }

    /// Returns a reference to the element at `index % len`. Returns None only if the list is
    /// empty.
    pub fn get(&self, index: usize) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.seek_wrapped(index).value()),
        }
    }

    /// Returns a mutable reference to the element at `index % len`. Returns None only if the list
    /// is empty.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.seek_wrapped(index).value_mut()),
        }
    }

    /// Inserts `value` so that it becomes the element at `index`. If `index >= len`, the value is
    /// appended, which places it directly before the head.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).or_raise()
    }

    /// Inserts `value` at `index`, clamped to `len`. On failure the list is left unchanged and
    /// `value` is returned inside the error.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError<T>> {
        match &mut self.state {
            Empty => {
                let node = NodeRef::try_new(value)?;
                self.state = Full(ListContents {
                    len: Length::ONE,
                    head: node,
                });
            },
            Full(contents) => {
                let new_len = match contents.len.try_increment() {
                    Ok(len) => len,
                    Err(error) => return Err(InsertError::new(value, error)),
                };

                let index = cmp::min(index, contents.len.get());
                // Both ends of the list meet before the head, only index 0 moves the head itself.
                let next = if index == contents.len.get() {
                    contents.head
                } else {
                    contents.seek(index)
                };

                let node = NodeRef::try_new(value)?;
                node.splice_before(next);
                if index == 0 {
                    contents.head = node;
                }
                contents.len = new_len;
            },
        }
        Ok(())
    }

    /// Removes the element at `index`, clamped to `len - 1`, and returns it. Returns None if the
    /// list is empty.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let Full(contents) = &mut self.state else {
            return None;
        };

        let node = contents.seek_clamped(index);
        match contents.len.decrement() {
            Some(new_len) => {
                if node == contents.head {
                    contents.head = *node.next();
                }
                node.unsplice();
                contents.len = new_len;
            },
            None => self.state = Empty,
        }

        // SAFETY: The node has been unspliced, or the list emptied, so nothing else reaches it.
        Some(unsafe { node.take_node() }.value)
    }

    pub fn push_front(&mut self, value: T) {
        self.insert(0, value)
    }

    pub fn push_back(&mut self, value: T) {
        self.insert(usize::MAX, value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0)
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.remove(usize::MAX)
    }

    /// Moves the head forward by `count` positions, wrapping around. No elements are moved, so
    /// this is a matter of seeking from the current head.
    pub fn rotate(&mut self, count: usize) {
        if let Full(contents) = &mut self.state {
            contents.head = contents.seek_wrapped(count);
        }
    }

    /// Drops every element in the list, leaving it empty but usable.
    pub fn clear(&mut self) {
        if let Full(ListContents { len, head }) = mem::take(&mut self.state) {
            let mut curr = head;
            // The ring never ends, so the length bounds the walk.
            for _ in 0..len.get() {
                // SAFETY: The state has been taken, so each node is freed exactly once.
                let node = unsafe { curr.take_node() };
                curr = node.next;
            }
        }
    }

    /// Releases every node and the list itself, consuming the handle.
    pub fn destroy(self) {
        drop(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over one full lap of the list, starting from the element at
    /// `index % len`.
    pub fn iter_from(&self, index: usize) -> Iter<'_, T> {
        match &self.state {
            Empty => Iter::empty(),
            Full(contents) => {
                let front = contents.seek_wrapped(index);
                Iter {
                    front: Some(front),
                    back: Some(*front.prev()),
                    remaining: contents.len.get(),
                    _phantom: PhantomData,
                }
            },
        }
    }
}

impl<T: PartialEq> CircularList<T> {
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> ListContents<T> {
    /// Seeks in whichever direction from the head is shorter. Callers must ensure `index < len`.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        let mut node = self.head;
        if index <= self.len.get() / 2 {
            for _ in 0..index {
                node = *node.next();
            }
        } else {
            for _ in index..self.len.get() {
                node = *node.prev();
            }
        }
        node
    }

    pub fn seek_clamped(&self, index: usize) -> NodeRef<T> {
        self.seek(cmp::min(index, self.len.last_index()))
    }

    pub fn seek_wrapped(&self, index: usize) -> NodeRef<T> {
        self.seek(index % self.len.get())
    }
}

impl<T> ListState<T> {
    pub const fn head(&self) -> Option<NodeRef<T>> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub const fn tail(&self) -> Option<NodeRef<T>> {
        match self {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head.prev()),
        }
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Extend<T> for CircularList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for CircularList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = CircularList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for CircularList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularList<T> {}

impl<T: Hash> Hash for CircularList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T: Debug> Debug for CircularList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats one lap of the list from the head, separated by single spaces.
impl<T: Display> Display for CircularList<T> {
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
