//! Shared test helpers for integration tests.
//!
//! Provides a scripted `HostApi` that counts backend calls and can be
//! told to fail, a `StateStore` that is always unavailable, and ledger
//! factory functions used across all integration test files.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use hashrec_contract::Ledger;
use hashrec_hostapi::{
    HostApi, HostConfig, HostError, LogLevel, MemStore, ReadSet, StateStore, VersionedValue,
    WriteSet,
};
use hashrec_primitives::Timestamp;

/// Fixed clock used by deterministic ledgers.
pub const FIXED_NOW: Timestamp = 1_700_000_000;

// ── Ledgers ──

/// Ledger over a fresh store, plus a handle to inspect that store.
pub fn ledger_with_store() -> (Ledger, Arc<MemStore>) {
    let store = Arc::new(MemStore::new());
    let ledger = Ledger::new(store.clone(), HostConfig::default());
    (ledger, store)
}

/// Ledger whose clock is frozen at [`FIXED_NOW`].
pub fn fixed_time_ledger() -> (Ledger, Arc<MemStore>) {
    let store = Arc::new(MemStore::new());
    let ledger = Ledger::new(store.clone(), HostConfig::with_fixed_time(FIXED_NOW));
    (ledger, store)
}

pub fn unix_now() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as Timestamp
}

// ── Scripted host ──

/// `HostApi` over a plain map that counts calls and fails on request.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub data: BTreeMap<String, Vec<u8>>,
    pub gets: usize,
    pub puts: usize,
    pub fail_get: bool,
    pub fail_put: bool,
    pub logs: Vec<String>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_get() -> Self {
        Self {
            fail_get: true,
            ..Self::default()
        }
    }

    pub fn failing_put() -> Self {
        Self {
            fail_put: true,
            ..Self::default()
        }
    }

    pub fn io_count(&self) -> usize {
        self.gets + self.puts
    }
}

impl HostApi for ScriptedHost {
    fn state_get(&mut self, key: &str) -> Result<Option<Vec<u8>>, HostError> {
        self.gets += 1;
        if self.fail_get {
            return Err(HostError::Unavailable("read refused".into()));
        }
        Ok(self.data.get(key).cloned())
    }

    fn state_put(&mut self, key: &str, value: &[u8]) -> Result<(), HostError> {
        self.puts += 1;
        if self.fail_put {
            return Err(HostError::Unavailable("write refused".into()));
        }
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn log(&mut self, _level: LogLevel, message: &str) -> Result<(), HostError> {
        self.logs.push(message.to_string());
        Ok(())
    }

    fn timestamp(&self) -> Result<Timestamp, HostError> {
        Ok(FIXED_NOW)
    }
}

// ── Unavailable store ──

/// World state that refuses every operation.
#[derive(Debug, Default)]
pub struct DownStore;

impl StateStore for DownStore {
    fn get(&self, _key: &str) -> Result<Option<VersionedValue>, HostError> {
        Err(HostError::Unavailable("store offline".into()))
    }

    fn commit(&self, _reads: &ReadSet, _writes: &WriteSet) -> Result<(), HostError> {
        Err(HostError::Unavailable("store offline".into()))
    }
}
