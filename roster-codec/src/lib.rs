//! Record type and wire codec for Roster search results.
//!
//! The native search routine hands its matches back as a flat text blob:
//! one `key: value` line per field, `NULL` for absent values, and a `---`
//! line after every record.
//!
//! ```text
//! id: 1
//! name: Ann
//! grade: 90
//! course: Math
//! ---
//! ```
//!
//! - [`Record`] / [`Field`] — the fixed record shape (`id`, `name`, `grade`, `course`)
//! - [`encode`] / [`Encoder`] — produce wire text
//! - [`decode`] — best-effort parse back into records, never fails
//!
//! The format has no escaping: a value containing a newline cannot be
//! represented, and a text value equal to `NULL` reads back as absent.

mod decode;
mod encode;
mod record;

pub use decode::{decode, decode_records, DecodeAnomaly, Decoded};
pub use encode::{encode, Encoder};
pub use record::{Field, Record};

/// Sentinel written in place of an absent value.
pub const NULL_SENTINEL: &str = "NULL";

/// Line terminating each record block.
pub const RECORD_SEPARATOR: &str = "---";

/// Delimiter between a key and its value. Only the first occurrence splits.
pub const KEY_VALUE_DELIMITER: &str = ": ";
