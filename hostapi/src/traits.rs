//! Host API trait — what the ledger runtime offers the contract.
//!
//! The contract only ever talks to world state through this trait, so the
//! same contract code runs against the in-process `TxContext` or any other
//! host that can provide get/put, a log sink and a clock.

use hashrec_primitives::Timestamp;

use crate::error::HostError;
use crate::types::LogLevel;

/// Host-side services available during one invocation.
pub trait HostApi {
    /// Read a value from state.
    ///
    /// Reads see this invocation's own earlier writes, then committed
    /// state. Returns `Ok(None)` if the key doesn't exist in either.
    fn state_get(&mut self, key: &str) -> Result<Option<Vec<u8>>, HostError>;

    /// Write a key-value pair.
    ///
    /// Durable once the invocation is committed by the host.
    fn state_put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError>;

    /// Debug log. Not part of the state transition.
    ///
    /// Callers must not branch on the result. The host may drop lines.
    fn log(&mut self, level: LogLevel, message: &str) -> Result<(), HostError>;

    /// Current time in seconds since the Unix epoch.
    fn timestamp(&self) -> Result<Timestamp, HostError>;
}
