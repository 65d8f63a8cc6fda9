//! In-memory versioned state store.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` behind an
//! `RwLock`, so one store can be shared by concurrent invocations.
//! Versions come from a single counter, so every committed write gets a
//! fresh version and a stale read can always be detected.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::HostError;
use crate::overlay::{ReadSet, WriteSet};
use crate::state_store::{StateStore, Version, VersionedValue};

#[derive(Debug, Default)]
struct Inner {
    data: BTreeMap<String, VersionedValue>,
    last_version: Version,
}

impl Inner {
    fn put(&mut self, key: String, value: Vec<u8>) {
        self.last_version += 1;
        let version = self.last_version;
        self.data.insert(key, VersionedValue { version, value });
    }
}

/// In-memory world state.
#[derive(Debug, Default)]
pub struct MemStore {
    inner: RwLock<Inner>,
}

impl MemStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a key directly, bypassing any invocation.
    ///
    /// Models out-of-band administrative changes to world state.
    pub fn insert(&self, key: impl Into<String>, value: Vec<u8>) -> Result<(), HostError> {
        let mut inner = self.inner.write().map_err(|_| HostError::poisoned())?;
        inner.put(key.into(), value);
        Ok(())
    }

    /// Raw committed bytes for a key.
    pub fn value(&self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        Ok(self.get(key)?.map(|v| v.value))
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> Result<usize, HostError> {
        let inner = self.inner.read().map_err(|_| HostError::poisoned())?;
        Ok(inner.data.len())
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> Result<bool, HostError> {
        Ok(self.len()? == 0)
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<VersionedValue>, HostError> {
        let inner = self.inner.read().map_err(|_| HostError::poisoned())?;
        Ok(inner.data.get(key).cloned())
    }

    fn commit(&self, reads: &ReadSet, writes: &WriteSet) -> Result<(), HostError> {
        let mut inner = self.inner.write().map_err(|_| HostError::poisoned())?;
        for (key, observed) in reads {
            let current = inner.data.get(key).map(|v| v.version);
            if current != *observed {
                return Err(HostError::ReadConflict(key.clone()));
            }
        }
        for (key, value) in writes {
            inner.put(key.clone(), value.clone());
        }
        Ok(())
    }
}
