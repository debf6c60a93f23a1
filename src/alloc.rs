//! Fallible boxing. `Box::new` aborts the process when the allocator comes back empty-handed;
//! the tree would rather hand that back to its caller.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// The global allocator returned null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AllocError;

/// Moves `value` into a fresh heap allocation, returning [`AllocError`] instead of aborting when
/// the allocation can't be satisfied.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, AllocError> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        // Zero sized values never touch the allocator.
        return Ok(Box::new(value));
    }

    // SAFETY: `layout` has a non-zero size, checked above.
    let ptr = unsafe { alloc::alloc(layout) }.cast::<T>();
    let Some(ptr) = NonNull::new(ptr) else {
        return Err(AllocError);
    };

    // SAFETY: `ptr` came from the global allocator with `Layout::new::<T>()`, which is exactly
    // the layout `Box<T>` uses, so `Box` may free it. It's non-null, aligned and uninitialized,
    // so writing `value` into it without dropping anything is sound, and nothing else holds it.
    unsafe {
        ptr.as_ptr().write(value);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}
