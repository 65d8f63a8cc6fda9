//! `hashrec-contract` — write-once model hash contract.
//!
//! Records the result hash of each aggregation round exactly once and
//! serves it back by round number. All persistence goes through the
//! host's state API; the contract itself holds no state.
//!
//! ## Architecture
//!
//! - [`validation`] — argument checks, run before any state access
//! - [`record_store::RecordStore`] — `record_hash`, `query_hash`, `init_ledger`
//! - [`dispatch`] — invocation by function name with string arguments
//! - [`runtime::Ledger`] — in-process host: one `TxContext` per call, commit or discard

pub mod error;
pub mod validation;
pub mod record_store;
pub mod dispatch;
pub mod runtime;

// Re-export key types for convenience
pub use error::ContractError;
pub use record_store::RecordStore;
pub use dispatch::{Invocation, Response};
pub use runtime::Ledger;
