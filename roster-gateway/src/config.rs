use crate::error::{GatewayError, GatewayResult};
use serde::{Deserialize, Serialize};
use std::ffi::c_int;
use std::path::Path;

/// Buffer size handed to the caller-buffer convention unless configured.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Which native calling convention the gateway drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Convention {
    /// Caller-allocated fixed buffer plus an integer status.
    CallerBuffer,
    /// Native-allocated buffer released by the caller.
    #[default]
    NativeBuffer,
}

impl Convention {
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::CallerBuffer => "caller-buffer",
            Convention::NativeBuffer => "native-buffer",
        }
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Calling convention to use.
    pub convention: Convention,
    /// Size in bytes of the caller-allocated buffer, including the NUL
    /// terminator. Ignored by the native-buffer convention.
    pub buffer_capacity: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            convention: Convention::default(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl GatewayConfig {
    /// Loads a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file(path: &Path) -> GatewayResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the buffer capacity can be passed across the C boundary.
    pub fn validate(&self) -> GatewayResult<()> {
        capacity_to_c_int(self.buffer_capacity).map(|_| ())
    }
}

pub(crate) fn capacity_to_c_int(capacity: usize) -> GatewayResult<c_int> {
    if capacity == 0 {
        return Err(GatewayError::InvalidConfig(
            "buffer_capacity must be at least 1".to_string(),
        ));
    }
    c_int::try_from(capacity).map_err(|_| {
        GatewayError::InvalidConfig(format!(
            "buffer_capacity {capacity} exceeds {}",
            c_int::MAX
        ))
    })
}
