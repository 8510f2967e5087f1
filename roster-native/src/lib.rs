//! Native student search routine for Roster.
//!
//! Exposes the search over a C ABI in both calling conventions the
//! application side knows how to drive:
//!
//! - [`roster_search_into`] writes wire text into a caller-allocated buffer
//!   and returns a status code (`0` on success, `-1` with a diagnostic in the
//!   buffer on failure). Output longer than the buffer is silently truncated.
//! - [`roster_search`] returns a newly allocated string that the caller must
//!   hand back to [`roster_free_result`] exactly once. Null means failure;
//!   [`roster_last_error`] then describes it.
//!
//! The store is a SQLite file holding a single `students` table, matched
//! case-insensitively by substring on the indexed `name` column.
//!
//! # Safety
//!
//! Pointer arguments must be null or point to valid NUL-terminated strings
//! for the duration of the call. Output buffers must be writable for the
//! capacity passed alongside them.

mod error;
mod ffi;
mod store;

pub use error::{NativeError, NativeResult};
pub use ffi::{
    roster_free_result, roster_last_error, roster_search, roster_search_into, STATUS_FAILURE,
    STATUS_OK,
};
pub use store::{init_schema, insert_student, open_for_search, open_store, search_wire};
