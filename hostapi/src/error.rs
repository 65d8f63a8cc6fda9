//! Host-side error types.
//!
//! `HostError` is returned by every `HostApi` and `StateStore` method.
//! The contract never inspects it beyond wrapping it as a backend
//! failure, so variants carry enough context for host-side debugging.

/// Host-side error type returned by the state API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// Keys must be non-empty.
    #[error("state key is empty")]
    EmptyKey,

    /// Key exceeds `HostConfig::max_key_len`.
    #[error("state key too large: {len} bytes (max {max})")]
    KeyTooLarge { len: usize, max: usize },

    /// Value exceeds `HostConfig::max_value_len`.
    #[error("state value too large: {len} bytes (max {max})")]
    ValueTooLarge { len: usize, max: usize },

    /// A key read during the invocation changed before commit.
    #[error("read conflict on key {0}")]
    ReadConflict(String),

    /// The storage backend could not be reached or refused the operation.
    #[error("state backend unavailable: {0}")]
    Unavailable(String),

    /// Any other host failure.
    #[error("internal host error: {0}")]
    Internal(String),
}

impl HostError {
    /// Create a key-too-large error.
    pub fn key_too_large(len: usize, max: usize) -> Self {
        Self::KeyTooLarge { len, max }
    }

    /// Create a value-too-large error.
    pub fn value_too_large(len: usize, max: usize) -> Self {
        Self::ValueTooLarge { len, max }
    }

    /// Returned when a state lock was poisoned by a panicking writer.
    pub fn poisoned() -> Self {
        Self::Internal("state lock poisoned".into())
    }
}
