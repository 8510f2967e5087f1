use crate::native_buffer::ReleaseFn;
use std::borrow::Cow;
use std::ffi::{c_char, CStr};
use std::fmt;
use std::ptr::NonNull;

/// A string owned by the native allocator.
///
/// Dropping the guard hands the pointer to its release function, exactly
/// once. The text can only be borrowed from the guard, so it cannot be read
/// after release.
pub struct NativeBuffer {
    ptr: NonNull<c_char>,
    release: ReleaseFn,
}

impl NativeBuffer {
    /// Takes ownership of a native string. Returns `None` for null.
    ///
    /// # Safety
    /// A non-null `ptr` must be a NUL-terminated string that `release` frees,
    /// and nothing else may free it.
    pub unsafe fn from_raw(ptr: *mut c_char, release: ReleaseFn) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr, release })
    }

    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: `from_raw` requires a live NUL-terminated string.
        unsafe { CStr::from_ptr(self.ptr.as_ptr()) }
    }

    /// The contents as UTF-8, replacing invalid sequences.
    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        self.as_c_str().to_string_lossy()
    }

    pub fn is_empty(&self) -> bool {
        self.as_c_str().is_empty()
    }
}

impl Drop for NativeBuffer {
    fn drop(&mut self) {
        // SAFETY: the guard is the sole owner and drop runs once.
        unsafe { (self.release)(self.ptr.as_ptr()) }
    }
}

impl fmt::Debug for NativeBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeBuffer")
            .field("ptr", &self.ptr)
            .field("len", &self.as_c_str().to_bytes().len())
            .finish()
    }
}
