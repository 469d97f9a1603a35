use std::alloc::{self, Layout};
use std::ptr::NonNull;

use super::error::{AllocError, CapacityOverflow, ReserveError};

/// Allocates space for a single `T` without initializing it. Returns a dangling pointer for
/// zero-sized types.
///
/// Memory returned by this function is compatible with [`Box::from_raw`], which is how nodes are
/// freed once they are detached from a list.
pub(crate) fn try_alloc_one<T>() -> Result<NonNull<T>, AllocError> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }

    // SAFETY: Zero-sized layouts have been guarded against.
    NonNull::new(unsafe { alloc::alloc(layout) }.cast()).ok_or(AllocError { layout })
}

/// Allocates space for `count` contiguous values of `T` without initializing them. Returns a
/// dangling pointer if the resulting layout is zero-sized.
pub(crate) fn try_alloc_array<T>(count: usize) -> Result<NonNull<T>, ReserveError> {
    let layout = array_layout::<T>(count)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }

    // SAFETY: Zero-sized layouts have been guarded against.
    NonNull::new(unsafe { alloc::alloc(layout) }.cast())
        .ok_or(ReserveError::Alloc(AllocError { layout }))
}

/// Frees memory obtained from [`try_alloc_array`] with the same `count`.
///
/// # Safety
/// `ptr` must have been returned by `try_alloc_array::<T>(count)` and not freed since. Any values
/// stored in the allocation must already have been dropped or moved out.
pub(crate) unsafe fn dealloc_array<T>(ptr: NonNull<T>, count: usize) {
    // The layout was valid when the allocation was made, so it is still valid now.
    if let Ok(layout) = array_layout::<T>(count) {
        if layout.size() != 0 {
            // SAFETY: The caller guarantees that ptr was allocated with this layout.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }
}

fn array_layout<T>(count: usize) -> Result<Layout, CapacityOverflow> {
    Layout::array::<T>(count).map_err(|_| CapacityOverflow)
}

#[cfg(test)]
pub(crate) use test_types::*;
