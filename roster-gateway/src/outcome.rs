use roster_codec::{DecodeAnomaly, Record};
use serde::Serialize;
use thiserror::Error;

/// Message used when the native-buffer convention returns nothing.
pub const NO_RESULTS_MESSAGE: &str = "no results or error occurred";

/// The native routine reported an error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("native search failed: {message}")]
pub struct NativeFailure {
    /// Status code, when the convention has one.
    pub status: Option<i32>,
    /// Diagnostic text from the native side.
    pub message: String,
}

/// Result of one search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The native call succeeded. `anomalies` lists fields that were nulled
    /// because their value did not parse.
    Found {
        records: Vec<Record>,
        anomalies: Vec<DecodeAnomaly>,
    },
    /// The native call failed; nothing was decoded.
    Failure(NativeFailure),
}

impl SearchOutcome {
    pub(crate) fn failure(status: Option<i32>, message: impl Into<String>) -> Self {
        Self::Failure(NativeFailure {
            status,
            message: message.into(),
        })
    }

    /// Decoded records; empty on failure.
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Found { records, .. } => records,
            Self::Failure(_) => &[],
        }
    }

    /// Decode anomalies; empty on failure.
    pub fn anomalies(&self) -> &[DecodeAnomaly] {
        match self {
            Self::Found { anomalies, .. } => anomalies,
            Self::Failure(_) => &[],
        }
    }

    pub fn into_records(self) -> Vec<Record> {
        match self {
            Self::Found { records, .. } => records,
            Self::Failure(_) => Vec::new(),
        }
    }

    pub fn as_failure(&self) -> Option<&NativeFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Found { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts to a `Result`, dropping anomaly reports.
    pub fn into_result(self) -> Result<Vec<Record>, NativeFailure> {
        match self {
            Self::Found { records, .. } => Ok(records),
            Self::Failure(failure) => Err(failure),
        }
    }
}
