use crate::caller_buffer::CallerBufferAdapter;
use crate::config::{Convention, GatewayConfig};
use crate::error::GatewayResult;
use crate::native_buffer::NativeBufferAdapter;
use crate::outcome::SearchOutcome;
use std::ffi::CString;
use tracing::{error, info, warn};

/// Searches the record store through a native routine.
///
/// Implementations never panic on native or decode problems; they report
/// them through [`SearchOutcome`].
pub trait RecordSearch: Send + Sync {
    /// Finds records whose name matches `term` in the store at `locator`.
    fn search(&self, locator: &str, term: &str) -> SearchOutcome;
}

/// Builds an adapter bound to the linked `roster-native` library.
pub fn gateway_from_config(config: &GatewayConfig) -> GatewayResult<Box<dyn RecordSearch>> {
    config.validate()?;
    let gateway: Box<dyn RecordSearch> = match config.convention {
        Convention::CallerBuffer => Box::new(CallerBufferAdapter::linked(config.buffer_capacity)?),
        Convention::NativeBuffer => Box::new(NativeBufferAdapter::linked()),
    };
    Ok(gateway)
}

/// Converts call arguments to C strings, or a failure if either contains NUL.
pub(crate) fn c_args(
    convention: Convention,
    locator: &str,
    term: &str,
) -> Result<(CString, CString), SearchOutcome> {
    info!(convention = convention.as_str(), term = %term, "Searching for students");
    let locator = CString::new(locator)
        .map_err(|_| fail(convention, term, None, "locator contains a NUL byte"))?;
    let term_c =
        CString::new(term).map_err(|_| fail(convention, term, None, "term contains a NUL byte"))?;
    Ok((locator, term_c))
}

/// Decodes native output and logs the result.
pub(crate) fn decode_output(convention: Convention, term: &str, raw: &str) -> SearchOutcome {
    info!(convention = convention.as_str(), term = %term, raw = %raw, "Native search output");

    let decoded = roster_codec::decode(raw);
    for anomaly in &decoded.anomalies {
        warn!(convention = convention.as_str(), term = %term, "Malformed field in native output: {}", anomaly);
    }
    info!(
        convention = convention.as_str(),
        term = %term,
        count = decoded.records.len(),
        records = ?decoded.records,
        "Decoded search results"
    );

    SearchOutcome::Found {
        records: decoded.records,
        anomalies: decoded.anomalies,
    }
}

/// Logs a native failure and builds the outcome for it.
pub(crate) fn fail(
    convention: Convention,
    term: &str,
    status: Option<i32>,
    message: impl Into<String>,
) -> SearchOutcome {
    let message = message.into();
    error!(
        convention = convention.as_str(),
        term = %term,
        status = ?status,
        "Search failed: {}",
        message
    );
    SearchOutcome::failure(status, message)
}
