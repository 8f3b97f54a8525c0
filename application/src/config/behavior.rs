//! Source retrieval behavior.

use std::time::Duration;

/// Default upper bound for a single source retrieval
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Application behavior configuration.
///
/// Controls how long a source retrieval may run before it is treated as a
/// fetch failure.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for one source. `None` disables the limit.
    pub fetch_timeout: Option<Duration>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self::with_timeout_seconds(DEFAULT_FETCH_TIMEOUT_SECS)
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            fetch_timeout: Some(Duration::from_secs(seconds)),
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            fetch_timeout: seconds.map(Duration::from_secs),
        }
    }
}
