use std::iter::FusedIterator;

use crate::collections::contiguous::Slots;

/// An iterator over the queued values of a [`RingQueue`](super::RingQueue), oldest first.
pub struct Iter<'a, T> {
    pub(crate) slots: &'a Slots<Option<T>>,
    pub(crate) index: usize,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = self.slots[self.index].as_ref();
        self.index = if self.index + 1 == self.slots.size() {
            0
        } else {
            self.index + 1
        };
        self.remaining -= 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots,
            index: self.index,
            remaining: self.remaining,
        }
    }
}
