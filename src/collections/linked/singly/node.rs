use std::ptr::NonNull;

use crate::util::alloc;
use crate::util::error::InsertError;

pub(crate) type Link<T> = Option<NodeRef<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A copyable handle to a heap-allocated [`Node`]. The list which holds a NodeRef owns the node;
/// handles are never shared between lists.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Allocates a node holding `value`, linked in front of `next`. If allocation fails, `value`
    /// is handed back inside the error.
    pub fn try_new(value: T, next: Link<T>) -> Result<NodeRef<T>, InsertError<T>> {
        match alloc::try_alloc_one::<Node<T>>() {
            Ok(ptr) => {
                // SAFETY: ptr was just allocated with the layout of Node<T> and is uninitialized.
                unsafe { ptr.write(Node { value, next }) };
                Ok(NodeRef(ptr))
            },
            Err(error) => Err(InsertError::new(value, error)),
        }
    }

    pub const fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodeRef is only held while the node it points to is allocated and owned by the
        // list, which bounds the returned lifetime through its own signatures.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As above. The list only hands out one mutable reference at a time.
        unsafe { &mut (*self.0.as_ptr()).value }
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
    /// The node must already be unlinked from its list, and no other NodeRef to it may be used
    /// afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by try_alloc_one with the layout of Node<T>, which is the
        // layout Box expects. The caller guarantees unique ownership.
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
