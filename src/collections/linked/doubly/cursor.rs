use super::{DoublyLinkedList, Link};
use crate::util::error::InsertError;
use crate::util::result::InsertResultExtension;

/// A cursor over a [`DoublyLinkedList`] which can insert and remove at its position in `O(1)`.
///
/// Besides pointing at a node, the cursor can rest on a "ghost" position which sits between the
/// tail and the head. Moving past either end of the list lands on the ghost, and moving again
/// wraps around to the other end.
///
/// Create one with [`DoublyLinkedList::cursor_front`] or [`DoublyLinkedList::cursor_back`].
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut DoublyLinkedList<T>,
    pub(crate) current: Link<T>,
    pub(crate) index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns the index of the current element, or None on the ghost position.
    pub const fn index(&self) -> Option<usize> {
        match self.current {
            Some(_) => Some(self.index),
            None => None,
        }
    }

    pub const fn is_ghost(&self) -> bool {
        self.current.is_none()
    }

    /// Returns a reference to the element under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.current.map(|node| node.value())
    }

    /// Returns a mutable reference to the element under the cursor.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.current.map(|node| node.value_mut())
    }

    /// Returns a reference to the element after the cursor. From the ghost position this is the
    /// head of the list.
    pub fn peek_next(&self) -> Option<&T> {
        let next = match self.current {
            Some(node) => *node.next(),
            None => self.list.state.head(),
        };
        next.map(|node| node.value())
    }

    /// Returns a reference to the element before the cursor. From the ghost position this is the
    /// tail of the list.
    pub fn peek_prev(&self) -> Option<&T> {
        let prev = match self.current {
            Some(node) => *node.prev(),
            None => self.list.state.tail(),
        };
        prev.map(|node| node.value())
    }

    /// Moves the cursor one element towards the tail, passing through the ghost position.
    pub fn move_next(&mut self) -> &mut Self {
        match self.current {
            Some(node) => {
                self.current = *node.next();
                self.index += 1;
            },
            None => {
                self.current = self.list.state.head();
                self.index = 0;
            },
        }
        self
    }

    /// Moves the cursor one element towards the head, passing through the ghost position.
    pub fn move_prev(&mut self) -> &mut Self {
        match self.current {
            Some(node) => {
                self.current = *node.prev();
                self.index = match self.current {
                    Some(_) => self.index - 1,
                    None => self.list.len(),
                };
            },
            None => {
                self.current = self.list.state.tail();
                self.index = self.list.len().saturating_sub(1);
            },
        }
        self
    }

    /// Removes the element under the cursor in `O(1)` and returns it. The cursor moves on to the
    /// following element, or the ghost position if the tail was removed. Returns None on the ghost
    /// position.
    pub fn remove_current(&mut self) -> Option<T> {
        let node = self.current?;
        self.current = *node.next();
        // SAFETY: The cursor only ever points at nodes of its own list.
        Some(unsafe { self.list.unlink(node) })
    }

    /// Inserts `value` after the cursor. From the ghost position, this inserts at the front.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn insert_after(&mut self, value: T) {
        self.try_insert_after(value).or_raise()
    }

    pub fn try_insert_after(&mut self, value: T) -> Result<(), InsertError<T>> {
        match self.current {
            Some(node) => {
                self.list.try_link(Some(node), *node.next(), value)?;
            },
            None => {
                let head = self.list.state.head();
                self.list.try_link(None, head, value)?;
                self.index = self.list.len();
            },
        }
        Ok(())
    }

    /// Inserts `value` before the cursor. From the ghost position, this inserts at the back.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a [`usize`].
    pub fn insert_before(&mut self, value: T) {
        self.try_insert_before(value).or_raise()
    }

    pub fn try_insert_before(&mut self, value: T) -> Result<(), InsertError<T>> {
        match self.current {
            Some(node) => {
                self.list.try_link(*node.prev(), Some(node), value)?;
                self.index += 1;
            },
            None => {
                let tail = self.list.state.tail();
                self.list.try_link(tail, None, value)?;
                self.index = self.list.len();
            },
        }
        Ok(())
    }

    /// Returns a shared view of the underlying list.
    pub fn as_list(&self) -> &DoublyLinkedList<T> {
        self.list
    }

    /// Consumes the cursor, returning the mutable borrow of the list that it held.
    pub fn into_list(self) -> &'a mut DoublyLinkedList<T> {
        self.list
    }
}
