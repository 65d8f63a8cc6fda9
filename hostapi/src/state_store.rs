//! Committed state backend abstraction.
//!
//! `StateStore` is the durable world state the host keeps between
//! invocations. A `TxContext` combines a `StateStore` (committed state)
//! with a `TxOverlay` (read set and write buffer): reads check the overlay
//! first, then fall through to the store, and the overlay is applied to
//! the store in one atomic `commit`.
//!
//! Implementations:
//! - `MemStore` (this crate) — in-memory, `RwLock`-guarded `BTreeMap`

use crate::error::HostError;
use crate::overlay::{ReadSet, WriteSet};

/// Per-key version. Bumped on every committed write to that key.
pub type Version = u64;

/// A committed value together with the version that wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedValue {
    pub version: Version,
    pub value: Vec<u8>,
}

/// Abstraction over committed world state.
///
/// Shared between concurrent invocations, hence `Send + Sync` and `&self`
/// receivers. Implementations serialize `commit` internally.
pub trait StateStore: Send + Sync {
    /// Get the committed value and version for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<VersionedValue>, HostError>;

    /// Atomically validate `reads` and apply `writes`.
    ///
    /// Every key in `reads` must still have the version observed by the
    /// invocation (`None` meaning absent). If any differs, nothing is
    /// written and `HostError::ReadConflict` names the first stale key.
    fn commit(&self, reads: &ReadSet, writes: &WriteSet) -> Result<(), HostError>;
}
