use std::ptr::NonNull;

use crate::util::alloc;
use crate::util::error::InsertError;

pub(crate) type Link<T> = Option<NodeRef<T>>;

#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Allocates a node holding `value` which links to itself in both directions, forming a ring
    /// of one. If allocation fails, `value` is handed back inside the error.
    pub fn try_new(value: T) -> Result<NodeRef<T>, InsertError<T>> {
        match alloc::try_alloc_one::<Node<T>>() {
            Ok(ptr) => {
                let node = NodeRef(ptr);
                // SAFETY: ptr was just allocated with the layout of Node<T> and is uninitialized.
                unsafe {
                    ptr.write(Node {
                        value,
                        prev: node,
                        next: node,
                    })
                };
                Ok(node)
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

    pub const fn prev<'a>(&self) -> &'a NodeRef<T> {
        // SAFETY: The node is live for as long as the list holds this NodeRef.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn prev_mut<'a>(&self) -> &'a mut NodeRef<T> {
        // SAFETY: The node is live for as long as the list holds this NodeRef.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub const fn next<'a>(&self) -> &'a NodeRef<T> {
        // SAFETY: The node is live for as long as the list holds this NodeRef.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub const fn next_mut<'a>(&self) -> &'a mut NodeRef<T> {
        // SAFETY: The node is live for as long as the list holds this NodeRef.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Splices this node, which must be a ring of one, into another ring directly before `next`.
    pub fn splice_before(self, next: NodeRef<T>) {
        let prev = *next.prev();
        *self.prev_mut() = prev;
        *self.next_mut() = next;
        *prev.next_mut() = self;
        *next.prev_mut() = self;
    }

    /// Joins this node's neighbours to each other. The node itself keeps its stale links.
    pub fn unsplice(self) {
        let prev = *self.prev();
        let next = *self.next();
        *prev.next_mut() = next;
        *next.prev_mut() = prev;
    }

    /// Moves the node back out of the heap and frees its allocation.
    ///
    /// # Safety
    /// The node must no longer be reachable from its list, with no other NodeRef to it used
    /// afterwards.
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
    pub prev: NodeRef<T>,
    pub next: NodeRef<T>,
}
