//! C ABI exports.

use crate::error::{NativeError, NativeResult};
use crate::store::{open_for_search, search_wire};
use std::cell::RefCell;
use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;
use tracing::warn;

/// Status returned by [`roster_search_into`] on success.
pub const STATUS_OK: c_int = 0;

/// Status returned by [`roster_search_into`] on failure.
pub const STATUS_FAILURE: c_int = -1;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(message: &str) {
    let message = CString::new(message.replace('\0', " ")).ok();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = message);
}

fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

unsafe fn read_str<'a>(ptr: *const c_char, what: &'static str) -> NativeResult<&'a str> {
    if ptr.is_null() {
        return Err(NativeError::NullArgument(what));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| NativeError::InvalidUtf8(what))
}

unsafe fn run_search(locator: *const c_char, term: *const c_char) -> NativeResult<String> {
    let locator = unsafe { read_str(locator, "locator") }?;
    let term = unsafe { read_str(term, "term") }?;
    let conn = open_for_search(locator)?;
    search_wire(&conn, term)
}

/// Copies `bytes` into `out`, keeping at most `capacity - 1` bytes and
/// always NUL-terminating.
unsafe fn write_truncated(out: *mut c_char, capacity: usize, bytes: &[u8]) {
    let len = bytes.len().min(capacity - 1);
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), out.cast::<u8>(), len);
        *out.add(len) = 0;
    }
}

/// Search students, writing wire text into a caller-owned buffer.
///
/// Returns [`STATUS_OK`] with the matches in `out`, or [`STATUS_FAILURE`]
/// with a diagnostic in `out`. Output that does not fit is truncated to
/// `capacity - 1` bytes without notice. A null `out` or non-positive
/// `capacity` writes nothing and fails.
///
/// # Safety
/// `locator` and `term` must be null or valid NUL-terminated strings.
/// `out` must be null or writable for `capacity` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn roster_search_into(
    locator: *const c_char,
    term: *const c_char,
    out: *mut c_char,
    capacity: c_int,
) -> c_int {
    if out.is_null() || capacity <= 0 {
        return STATUS_FAILURE;
    }
    let (status, text) = match unsafe { run_search(locator, term) } {
        Ok(text) => (STATUS_OK, text),
        Err(e) => {
            warn!("Student search failed: {}", e);
            (STATUS_FAILURE, e.to_string())
        }
    };
    unsafe { write_truncated(out, capacity as usize, text.as_bytes()) };
    status
}

/// Search students, returning a newly allocated wire-text string.
///
/// Returns null on failure; [`roster_last_error`] then holds the reason.
/// A search with no matches returns an empty string, not null.
///
/// # Safety
/// `locator` and `term` must be null or valid NUL-terminated strings.
/// The returned pointer must be freed with `roster_free_result`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn roster_search(locator: *const c_char, term: *const c_char) -> *mut c_char {
    let result = unsafe { run_search(locator, term) }
        .and_then(|text| {
            CString::new(text.replace('\0', ""))
                .map_err(|e| NativeError::InvalidArgument(e.to_string()))
        });
    match result {
        Ok(text) => {
            clear_last_error();
            text.into_raw()
        }
        Err(e) => {
            warn!("Student search failed: {}", e);
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a string returned by [`roster_search`]. Null is ignored.
///
/// # Safety
/// `buffer` must be null or a pointer obtained from `roster_search` that has
/// not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn roster_free_result(buffer: *mut c_char) {
    if !buffer.is_null() {
        unsafe {
            drop(CString::from_raw(buffer));
        }
    }
}

/// Last failure message on the calling thread, or null.
///
/// The pointer is borrowed and stays valid until the next `roster_search`
/// call on the same thread. Do not free it.
#[unsafe(no_mangle)]
pub extern "C" fn roster_last_error() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(ptr::null(), |message| message.as_ptr())
    })
}
