use std::ptr::NonNull;

use crate::util::alloc;
use crate::util::error::InsertError;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are freed through Box::from_raw, because Box has the special property that
// dereferencing it allows a value to be moved out of the heap.

#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Allocates a node holding `value` between `prev` and `next`, without updating either
    /// neighbour. If allocation fails, `value` is handed back inside the error.
    pub fn try_new(value: T, prev: Link<T>, next: Link<T>) -> Result<NodeRef<T>, InsertError<T>> {
        match alloc::try_alloc_one::<Node<T>>() {
            Ok(ptr) => {
                // SAFETY: ptr was just allocated with the layout of Node<T> and is uninitialized.
                unsafe { ptr.write(Node { value, prev, next }) };
                Ok(NodeRef(ptr))
            },
            Err(error) => Err(InsertError::new(value, error)),
        }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodeRef is only held while its node is allocated and owned by a list.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above. The list only hands out one mutable reference at a time.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live for as long as the list holds this NodeRef.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is live for as long as the list holds this NodeRef.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The node is live for as long as the list holds this NodeRef.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The node is live for as long as the list holds this NodeRef.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Moves the node back out of the heap and frees its allocation.
    ///
    /// # Safety
    /// The node must be unlinked from its list, with no other NodeRef to it used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated with the layout of Node<T>, matching Box. The caller
        // guarantees unique ownership.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
