use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::alloc;
use crate::util::error::ReserveError;

/// A buffer of `size` initialized values, allocated once and never resized. Similar to a
/// [`Box<[T]>`](Box<T>), except that allocation failure can be handled by the caller.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | index | `O(1)` |
/// | `try_repeat_with` | `O(n)` |
pub struct Slots<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

// SAFETY: Slots uniquely owns its values, like a Box<[T]>.
unsafe impl<T: Send> Send for Slots<T> {}
// SAFETY: Shared access only produces shared references to values.
unsafe impl<T: Sync> Sync for Slots<T> {}

impl<T> Slots<T> {
    /// Returns the number of slots, which is fixed at creation.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Allocates `size` slots, initializing each one with the result of `f`.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the layout would exceed [`isize::MAX`] bytes or the allocator
    /// fails. Nothing is leaked in either case.
    pub fn try_repeat_with<F: FnMut() -> T>(size: usize, mut f: F) -> Result<Slots<T>, ReserveError> {
        let ptr = alloc::try_alloc_array::<T>(size)?;
        let mut guard = PartialSlots {
            ptr,
            size,
            init: 0,
        };

        while guard.init < size {
            // SAFETY: init < size, so the write stays within the allocation.
            unsafe { ptr.add(guard.init).write(f()) };
            guard.init += 1;
        }

        mem::forget(guard);
        Ok(Slots {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Allocates `size` slots, initializing each one with the result of `f`.
    ///
    /// If allocation fails, the process is aborted.
    ///
    /// # Panics
    /// Panics if the layout would exceed [`isize::MAX`] bytes.
    pub fn repeat_with<F: FnMut() -> T>(size: usize, f: F) -> Slots<T> {
        match Slots::try_repeat_with(size, f) {
            Ok(slots) => slots,
            Err(error) => error.raise(),
        }
    }
}

impl<T: Default> Slots<T> {
    /// Allocates `size` slots holding the default value of `T`.
    ///
    /// # Panics
    /// Panics if the layout would exceed [`isize::MAX`] bytes.
    pub fn repeat_default(size: usize) -> Slots<T> {
        Slots::repeat_with(size, T::default)
    }
}

/// Owns a partially initialized allocation while a [`Slots`] is being filled, so that a panic in
/// the initializer drops what was written and frees the memory.
struct PartialSlots<T> {
    ptr: NonNull<T>,
    size: usize,
    init: usize,
}

impl<T> Drop for PartialSlots<T> {
    fn drop(&mut self) {
        // SAFETY: The first init values have been written and nothing else refers to them.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.init));
            alloc::dealloc_array(self.ptr, self.size);
        }
    }
}

impl<T> Drop for Slots<T> {
    fn drop(&mut self) {
        // SAFETY: Every slot is initialized, and the allocation was made by try_alloc_array with
        // the same size.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
            alloc::dealloc_array(self.ptr, self.size);
        }
    }
}

impl<T> Deref for Slots<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is properly initialized. Dangling
        // pointers are only used for zero-sized layouts, which slices accept.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Slots<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As above, and the mutable borrow of self prevents any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T: Debug> Debug for Slots<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
