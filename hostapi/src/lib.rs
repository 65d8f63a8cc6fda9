//! `hashrec-hostapi` — host-side state API for the HashRecorder contract.
//!
//! This crate defines what the hosting ledger runtime supplies to the
//! contract. It provides:
//!
//! - `HostApi` trait — state get/put, logging and wall clock as seen by the contract
//! - `StateStore` trait — committed state backend abstraction
//! - `MemStore` — in-memory versioned `StateStore`
//! - `TxOverlay` — per-invocation read set and write buffer
//! - `TxContext` — per-invocation `HostApi` implementation with atomic commit
//! - `HostConfig` — key/value and log limits, time source
//! - `HostError` — host-side error type

pub mod error;
pub mod types;
pub mod state_store;
pub mod mem_store;
pub mod overlay;
pub mod traits;
pub mod tx_context;

// Re-export commonly used types at the crate root.
pub use error::HostError;
pub use types::{HostConfig, LogLevel, LogLine, TimeSource};
pub use state_store::{StateStore, Version, VersionedValue};
pub use mem_store::MemStore;
pub use overlay::{ReadSet, TxOverlay, WriteSet};
pub use traits::HostApi;
pub use tx_context::TxContext;
