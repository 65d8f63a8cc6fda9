//! Host-side configuration and log types.
//!
//! `HostConfig` bundles the limits enforced on a single invocation.

use hashrec_primitives::{Timestamp, MAX_KEY_LEN, MAX_VALUE_LEN};

/// Where `HostApi::timestamp` reads the current time from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeSource {
    /// Wall clock, seconds since the Unix epoch.
    #[default]
    System,
    /// Always the given instant. Used for deterministic tests.
    Fixed(Timestamp),
}

/// Configuration for a single contract invocation.
///
/// These limits are enforced by the host context; the contract cannot
/// exceed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// Maximum number of log lines kept per invocation.
    pub max_log_lines: u32,
    /// Maximum length of a single log line in bytes.
    pub max_log_line_len: usize,
    pub time_source: TimeSource,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            max_log_lines: 256,
            max_log_line_len: 1024,
            time_source: TimeSource::System,
        }
    }
}

impl HostConfig {
    /// Default limits with a frozen clock.
    pub fn with_fixed_time(ts: Timestamp) -> Self {
        Self {
            time_source: TimeSource::Fixed(ts),
            ..Self::default()
        }
    }
}

/// Severity of a contract log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

/// A log line emitted by the contract during one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub message: String,
}
