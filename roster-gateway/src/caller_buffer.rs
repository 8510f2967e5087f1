use crate::config::{capacity_to_c_int, Convention};
use crate::error::GatewayResult;
use crate::outcome::SearchOutcome;
use crate::search::{c_args, decode_output, fail, RecordSearch};
use std::borrow::Cow;
use std::ffi::{c_char, c_int};

/// `int search(const char* locator, const char* term, char* out, int capacity)`
///
/// Returns `0` with wire text in `out`, or non-zero with a diagnostic.
pub type BufferedSearchFn =
    unsafe extern "C" fn(*const c_char, *const c_char, *mut c_char, c_int) -> c_int;

const CONVENTION: Convention = Convention::CallerBuffer;

/// Drives a native routine that writes into a caller-allocated buffer.
///
/// A fresh zeroed buffer of `capacity` bytes is allocated per call. Output
/// longer than that is cut off by the native side and the cut cannot be
/// detected here; the truncated text is decoded as-is.
#[derive(Debug, Clone, Copy)]
pub struct CallerBufferAdapter {
    search_fn: BufferedSearchFn,
    capacity: c_int,
}

impl CallerBufferAdapter {
    /// Wraps a native search function.
    ///
    /// # Safety
    /// `search_fn` must accept NUL-terminated `locator` and `term`, write
    /// no more than `capacity` bytes into `out`, and return without
    /// retaining any of the pointers.
    pub unsafe fn new(search_fn: BufferedSearchFn, capacity: usize) -> GatewayResult<Self> {
        Ok(Self {
            search_fn,
            capacity: capacity_to_c_int(capacity)?,
        })
    }

    /// Binds to `roster_search_into` from the linked native library.
    pub fn linked(capacity: usize) -> GatewayResult<Self> {
        // SAFETY: `roster_search_into` honors the caller-buffer contract.
        unsafe { Self::new(roster_native::roster_search_into, capacity) }
    }

    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }
}

impl RecordSearch for CallerBufferAdapter {
    fn search(&self, locator: &str, term: &str) -> SearchOutcome {
        let (locator_c, term_c) = match c_args(CONVENTION, locator, term) {
            Ok(args) => args,
            Err(outcome) => return outcome,
        };

        let mut buf = vec![0u8; self.capacity()];
        // SAFETY: the arguments outlive the call and `buf` holds `capacity` bytes.
        let status = unsafe {
            (self.search_fn)(
                locator_c.as_ptr(),
                term_c.as_ptr(),
                buf.as_mut_ptr().cast::<c_char>(),
                self.capacity,
            )
        };

        let text = buffer_text(&buf);
        if status != 0 {
            return fail(CONVENTION, term, Some(status), text);
        }
        decode_output(CONVENTION, term, &text)
    }
}

/// Text up to the first NUL, or the whole buffer if the native side did not
/// terminate it.
fn buffer_text(buf: &[u8]) -> Cow<'_, str> {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..end])
}
