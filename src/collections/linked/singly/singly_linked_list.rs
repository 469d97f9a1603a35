use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{Iter, IterMut, Link, NodeRef};
use crate::collections::linked::Length;
use crate::util::error::InsertError;
use crate::util::option::OptionExtension;
use crate::util::result::InsertResultExtension;

/// A list with links in one direction, from the head towards the tail.
///
/// Positional methods clamp their index rather than panicking: [`insert`](Self::insert) appends
/// when `index >= len`, and [`get`](Self::get) / [`remove`](Self::remove) operate on the last
/// element when `index >= len - 1`. Only the list's head is stored, so every positional operation
/// walks the chain from the front.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SinglyLinkedList.
/// - `i`: The (clamped) index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `get` | `O(i)` |
/// | `insert` | `O(i)` |
/// | `remove` | `O(i)` |
/// | `back/push_back/pop_back` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `reverse` | `O(n)` |
pub struct SinglyLinkedList<T> {
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

// SAFETY: The list uniquely owns every node reachable from its head, so sending or sharing it is
// equivalent to sending or sharing the elements themselves.
unsafe impl<T: Send> Send for SinglyLinkedList<T> {}
// SAFETY: As above, shared access to the list only ever produces shared references to elements.
unsafe impl<T: Sync> Sync for SinglyLinkedList<T> {}

impl<T> SinglyLinkedList<T> {
    /// Creates a new SinglyLinkedList with no elements.
    pub const fn new() -> SinglyLinkedList<T> {
        SinglyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of nodes in the list.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns the length of a list which may not exist, treating an absent list as empty.
    pub fn len_of(list: Option<&SinglyLinkedList<T>>) -> usize {
        list.map_or(0, SinglyLinkedList::len)
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the element at `index`, clamped to the last element. Returns None
    /// only if the list is empty.
    pub fn get(&self, index: usize) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.seek_clamped(index).value()),
        }
    }

    /// Returns a mutable reference to the element at `index`, clamped to the last element.
    /// Returns None only if the list is empty.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.seek_clamped(index).value_mut()),
        }
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
    pub fn back(&self) -> Option<&T> {
        self.get(usize::MAX)
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(usize::MAX)
    }

    /// Inserts `value` so that it becomes the element at `index`. If `index >= len`, the value is
    /// appended to the end of the list instead.
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
        match &mut self.state {
            Empty => {
                let node = NodeRef::try_new(value, None)?;
                self.state = Full(ListContents {
                    len: Length::ONE,
                    head: node,
                });
            },
            Full(contents) => match cmp::min(index, contents.len.get()) {
                0 => {
                    contents.try_link_front(value)?;
                },
                index => {
                    let prev = contents.seek(index - 1);
                    contents.try_link_after(prev, value)?;
                },
            },
        }
        Ok(())
    }

    /// Removes the element at `index`, clamped to the last element, and returns it. The returned
    /// value is owned by the caller and no longer referenced by the list. Returns None if the list
    /// is empty.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => {
                let target = match cmp::min(index, contents.len.last_index()) {
                    0 => {
                        let target = contents.head;
                        if let Some(next) = *target.next() {
                            contents.head = next;
                        }
                        target
                    },
                    index => {
                        let prev = contents.seek(index - 1);
                        // SAFETY: index is at most the last index, so prev is followed by a node.
                        let target = unsafe { (*prev.next()).unreachable() };
                        *prev.next_mut() = *target.next();
                        target
                    },
                };

                match contents.len.decrement() {
                    Some(new_len) => contents.len = new_len,
                    None => self.state = Empty,
                }

                // SAFETY: target has been unlinked above and the list no longer refers to it.
                Some(unsafe { target.take_node() }.value)
            },
        }
    }

    /// Adds the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        self.insert(0, value)
    }

    /// Adds the provided element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        self.insert(usize::MAX, value)
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove(usize::MAX)
    }

    /// Removes the first element matching `predicate` and returns it.
    pub fn remove_first<F: FnMut(&T) -> bool>(&mut self, predicate: F) -> Option<T> {
        let index = self.iter().position(predicate)?;
        self.remove(index)
    }

    /// Reverses the order of the list in place by relinking its nodes.
    pub fn reverse(&mut self) {
        if let Full(contents) = &mut self.state {
            let mut reversed: Link<T> = None;
            let mut curr = Some(contents.head);

            while let Some(node) = curr {
                curr = *node.next();
                *node.next_mut() = reversed;
                reversed = Some(node);
            }

            // SAFETY: The list is full, so at least one node was relinked.
            contents.head = unsafe { reversed.unreachable() };
        }
    }

    /// Drops every element in the list, leaving it empty but usable.
    pub fn clear(&mut self) {
        if let Full(ListContents { head, .. }) = mem::take(&mut self.state) {
            let mut curr = Some(head);
            while let Some(node) = curr {
                // SAFETY: The state has been taken, so each node is visited and freed exactly
                // once.
                let node = unsafe { node.take_node() };
                curr = node.next;
            }
        }
    }

    /// Releases every node and the list itself. Equivalent to dropping the list, but consumes the
    /// handle explicitly so that it can't be used afterwards.
    pub fn destroy(self) {
        drop(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Returns the index of the first element equal to `item`.
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
}

impl<T> ListContents<T> {
    /// Follows `index` links from the head.
    ///
    /// Callers must ensure that `index < len`.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: index < len, so the chain holds at least index + 1 nodes.
            node = unsafe { (*node.next()).unreachable() };
        }
        node
    }

    pub fn seek_clamped(&self, index: usize) -> NodeRef<T> {
        self.seek(cmp::min(index, self.len.last_index()))
    }

    /// Returns the last node, walking the whole chain.
    pub fn tail(&self) -> NodeRef<T> {
        self.seek(self.len.last_index())
    }

    /// Links a new node holding `value` in front of the current head.
    pub fn try_link_front(&mut self, value: T) -> Result<NodeRef<T>, InsertError<T>> {
        let new_len = match self.len.try_increment() {
            Ok(len) => len,
            Err(error) => return Err(InsertError::new(value, error)),
        };

        let node = NodeRef::try_new(value, Some(self.head))?;
        self.head = node;
        self.len = new_len;
        Ok(node)
    }

    /// Links a new node holding `value` directly after `prev`, which must belong to this list.
    pub fn try_link_after(&mut self, prev: NodeRef<T>, value: T) -> Result<NodeRef<T>, InsertError<T>> {
        let new_len = match self.len.try_increment() {
            Ok(len) => len,
            Err(error) => return Err(InsertError::new(value, error)),
        };

        let node = NodeRef::try_new(value, *prev.next())?;
        *prev.next_mut() = Some(node);
        self.len = new_len;
        Ok(node)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Keep hold of the tail so that extending is O(n + m) rather than walking the list for
        // every item.
        let mut tail = match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail()),
        };

        for value in iter {
            tail = match &mut self.state {
                Empty => {
                    self.insert(0, value);
                    self.state.head()
                },
                Full(contents) => {
                    let prev = tail.unwrap_or_else(|| contents.tail());
                    Some(contents.try_link_after(prev, value).or_raise())
                },
            };
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self.iter() {
            element.hash(state);
        }
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the elements head-to-tail, separated by single spaces.
impl<T: Display> Display for SinglyLinkedList<T> {
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
