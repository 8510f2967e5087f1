//! Native search gateway for Roster.
//!
//! The native search routine comes in two calling conventions that disagree
//! on who owns the result buffer. The gateway hides both behind one
//! interface, [`RecordSearch`], so the application never branches on the
//! protocol:
//!
//! - [`CallerBufferAdapter`] allocates a fixed-capacity buffer per call and
//!   reads a status code. Results longer than the buffer are truncated by the
//!   native side without notice, so long result sets are unsafe here.
//! - [`NativeBufferAdapter`] receives a buffer allocated by the native side
//!   and returns it through the release function exactly once, on every exit
//!   path, via [`NativeBuffer`].
//!
//! Both adapters decode the wire text with `roster_codec` and log every call.
//!
//! # Example
//!
//! ```no_run
//! use roster_gateway::{gateway_from_config, GatewayConfig, RecordSearch};
//!
//! let gateway = gateway_from_config(&GatewayConfig::default()).unwrap();
//! let outcome = gateway.search("students.db", "ann");
//! for record in outcome.records() {
//!     println!("{:?}", record.name);
//! }
//! ```
//!
//! Calls are synchronous and have no timeout: a native routine that hangs
//! blocks the caller.

mod buffer;
mod caller_buffer;
mod config;
mod error;
mod native_buffer;
mod outcome;
mod search;

pub use buffer::NativeBuffer;
pub use caller_buffer::{BufferedSearchFn, CallerBufferAdapter};
pub use config::{Convention, GatewayConfig, DEFAULT_BUFFER_CAPACITY};
pub use error::{GatewayError, GatewayResult};
pub use native_buffer::{LastErrorFn, NativeBufferAdapter, OwnedSearchFn, ReleaseFn};
pub use outcome::{NativeFailure, SearchOutcome, NO_RESULTS_MESSAGE};
pub use search::{gateway_from_config, RecordSearch};

pub use roster_codec::{DecodeAnomaly, Field, Record};
