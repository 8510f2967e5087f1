use crate::buffer::NativeBuffer;
use crate::config::Convention;
use crate::outcome::{SearchOutcome, NO_RESULTS_MESSAGE};
use crate::search::{c_args, decode_output, fail, RecordSearch};
use std::ffi::{c_char, CStr};

/// `char* search(const char* locator, const char* term)`; null on failure.
pub type OwnedSearchFn = unsafe extern "C" fn(*const c_char, *const c_char) -> *mut c_char;

/// `void release(char* buffer)` for strings returned by [`OwnedSearchFn`].
pub type ReleaseFn = unsafe extern "C" fn(*mut c_char);

/// `const char* last_error(void)`; borrowed, may be null.
pub type LastErrorFn = extern "C" fn() -> *const c_char;

const CONVENTION: Convention = Convention::NativeBuffer;

/// Drives a native routine that allocates its own result buffer.
///
/// The buffer is wrapped in a [`NativeBuffer`] as soon as it is received and
/// released when the guard drops, after decoding and on every other path.
#[derive(Debug, Clone, Copy)]
pub struct NativeBufferAdapter {
    search_fn: OwnedSearchFn,
    release_fn: ReleaseFn,
    last_error_fn: Option<LastErrorFn>,
}

impl NativeBufferAdapter {
    /// Wraps a native search function and its matching release function.
    ///
    /// # Safety
    /// `search_fn` must return null or a NUL-terminated string that
    /// `release_fn` frees, and must not retain its arguments.
    pub unsafe fn new(search_fn: OwnedSearchFn, release_fn: ReleaseFn) -> Self {
        Self {
            search_fn,
            release_fn,
            last_error_fn: None,
        }
    }

    /// Adds a function describing the most recent failure on this thread.
    ///
    /// # Safety
    /// `last_error_fn` must return null or a NUL-terminated string that stays
    /// valid until the next search call on the same thread.
    pub unsafe fn with_last_error(mut self, last_error_fn: LastErrorFn) -> Self {
        self.last_error_fn = Some(last_error_fn);
        self
    }

    /// Binds to `roster_search`, `roster_free_result` and `roster_last_error`
    /// from the linked native library.
    pub fn linked() -> Self {
        // SAFETY: the roster-native exports honor the native-buffer contract.
        unsafe {
            Self::new(roster_native::roster_search, roster_native::roster_free_result)
                .with_last_error(roster_native::roster_last_error)
        }
    }

    fn failure_message(&self) -> String {
        let detail = self.last_error_fn.and_then(|last_error| {
            let ptr = last_error();
            // SAFETY: guaranteed by `with_last_error`.
            (!ptr.is_null()).then(|| unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
        });
        match detail {
            Some(detail) => format!("{NO_RESULTS_MESSAGE}: {detail}"),
            None => NO_RESULTS_MESSAGE.to_string(),
        }
    }
}

impl RecordSearch for NativeBufferAdapter {
    fn search(&self, locator: &str, term: &str) -> SearchOutcome {
        let (locator_c, term_c) = match c_args(CONVENTION, locator, term) {
            Ok(args) => args,
            Err(outcome) => return outcome,
        };

        // SAFETY: the arguments outlive the call; ownership of the result
        // moves into the guard immediately.
        let buffer = unsafe {
            let ptr = (self.search_fn)(locator_c.as_ptr(), term_c.as_ptr());
            NativeBuffer::from_raw(ptr, self.release_fn)
        };

        let Some(buffer) = buffer else {
            return fail(CONVENTION, term, None, self.failure_message());
        };
        if buffer.is_empty() {
            return fail(CONVENTION, term, None, NO_RESULTS_MESSAGE);
        }

        decode_output(CONVENTION, term, &buffer.to_str_lossy())
    }
}
