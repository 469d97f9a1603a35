use std::fmt::{self, Debug, Display, Formatter};

use super::Iter;
use crate::collections::contiguous::Slots;
use crate::util::error::{QueueFull, ReserveError};

/// A first in, first out queue with a fixed number of slots, all allocated at creation.
///
/// Values are written at `write` and read from `read`, both of which wrap around to the start of
/// the slots once they pass the end. The queue never grows: once every slot is occupied,
/// [`enqueue`](Self::enqueue) hands the value back inside a [`QueueFull`] error.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)` |
/// | `dequeue` | `O(1)` |
/// | `front` | `O(1)` |
/// | `clear` | `O(n)` |
///
/// # Examples
/// ```
/// # use linked_containers::collections::adapters::RingQueue;
/// let mut queue = RingQueue::with_capacity(2);
/// assert!(queue.enqueue('a').is_ok());
/// assert!(queue.enqueue('b').is_ok());
/// assert_eq!(queue.enqueue('c').map_err(|full| full.into_value()), Err('c'));
/// assert_eq!(queue.dequeue(), Some('a'));
/// ```
pub struct RingQueue<T> {
    pub(crate) slots: Slots<Option<T>>,
    pub(crate) read: usize,
    pub(crate) write: usize,
    pub(crate) len: usize,
}

impl<T> RingQueue<T> {
    /// Creates a queue with room for exactly `capacity` values.
    ///
    /// If allocation fails, the process is aborted.
    ///
    /// # Panics
    /// Panics if the slots would need more than [`isize::MAX`] bytes.
    pub fn with_capacity(capacity: usize) -> RingQueue<T> {
        match RingQueue::try_with_capacity(capacity) {
            Ok(queue) => queue,
            Err(error) => error.raise(),
        }
    }

    /// Creates a queue with room for exactly `capacity` values, reporting allocation failure
    /// instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<RingQueue<T>, ReserveError> {
        Ok(RingQueue {
            slots: Slots::try_repeat_with(capacity, || None)?,
            read: 0,
            write: 0,
            len: 0,
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the length of a queue which may not exist, treating an absent queue as empty.
    pub fn len_of(queue: Option<&RingQueue<T>>) -> usize {
        queue.map_or(0, RingQueue::len)
    }

    pub const fn capacity(&self) -> usize {
        self.slots.size()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Writes `value` into the next free slot.
    ///
    /// # Errors
    /// If every slot is occupied the queue is left unchanged and `value` is returned inside
    /// [`QueueFull`]. A queue with a capacity of 0 is always full.
    pub fn enqueue(&mut self, value: T) -> Result<(), QueueFull<T>> {
        if self.is_full() {
            return Err(QueueFull(value));
        }

        self.slots[self.write] = Some(value);
        self.write = self.wrap_next(self.write);
        self.len += 1;
        Ok(())
    }

    /// Removes the oldest value and returns it, or None if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.read].take();
        self.read = self.wrap_next(self.read);
        self.len -= 1;
        value
    }

    /// Returns a reference to the oldest value without removing it.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_ref()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.read].as_mut()
    }

    /// Drops every queued value, from the read position to the write position, and resets both
    /// positions to the start of the slots. The capacity is unchanged.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
        self.read = 0;
        self.write = 0;
    }

    /// Releases every value and the slots themselves, consuming the handle.
    pub fn destroy(self) {
        drop(self)
    }

    /// Returns an iterator from the oldest value to the newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            index: self.read,
            remaining: self.len,
        }
    }

    /// Advances a position by one slot. Only called with a non-zero capacity, since an empty
    /// queue can't be read and a full one can't be written.
    pub(crate) const fn wrap_next(&self, index: usize) -> usize {
        if index + 1 == self.capacity() {
            0
        } else {
            index + 1
        }
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &self.capacity())
            .field("read", &self.read)
            .field("write", &self.write)
            .field("queued", &DebugQueued(self))
            .finish()
    }
}

struct DebugQueued<'a, T>(&'a RingQueue<T>);

impl<T: Debug> Debug for DebugQueued<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Formats the queued values from oldest to newest, separated by single spaces.
impl<T: Display> Display for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
