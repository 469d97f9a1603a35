use std::num::NonZero;

use crate::util::error::CapacityOverflow;

/// The length of a non-empty list. Empty lists are represented by their state instead, so a
/// `Length` is never zero.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const ONE: Length = Length(NonZero::<usize>::MIN);

    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub const fn last_index(self) -> usize {
        self.0.get() - 1
    }

    /// Returns the length after one more node is linked.
    pub const fn try_increment(self) -> Result<Length, CapacityOverflow> {
        match self.0.checked_add(1) {
            Some(len) => Ok(Length(len)),
            None => Err(CapacityOverflow),
        }
    }

    /// Returns the length after one node is unlinked, or None if that node was the last one.
    pub const fn decrement(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(len) => Some(Length(len)),
            None => None,
        }
    }
}
