//! In-process ledger runtime.
//!
//! `Ledger` plays the hosting platform's part for the contract: for every
//! call it creates a fresh `TxContext` over the shared world state, runs
//! the contract, and commits the context on success or discards it on
//! error. It is `Sync`, so many threads may invoke it at once; the
//! store's read-set validation keeps the write-once guarantee intact.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use hashrec_hostapi::{HostConfig, MemStore, StateStore, TxContext};
use hashrec_primitives::{ModelHashRecord, RoundNum};

use crate::dispatch::{dispatch, Response};
use crate::error::ContractError;
use crate::record_store::RecordStore;

/// The contract deployed over one world state.
pub struct Ledger {
    store: Arc<dyn StateStore>,
    config: HostConfig,
    contract: RecordStore,
    next_tx: AtomicU64,
}

impl Ledger {
    /// Deploy the contract over an existing world state.
    pub fn new(store: Arc<dyn StateStore>, config: HostConfig) -> Self {
        Self {
            store,
            config,
            contract: RecordStore::new(),
            next_tx: AtomicU64::new(1),
        }
    }

    /// Deploy over a fresh in-memory world state with default limits.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemStore::new()), HostConfig::default())
    }

    /// Invoke an exported function by name.
    pub fn invoke(&self, function: &str, args: &[&str]) -> Response {
        let result = self.execute(|ctx| dispatch(&self.contract, ctx, function, args));
        if let Err(err) = &result {
            tracing::debug!(function, status = %err.code(), error = %err, "invocation failed");
        }
        result.into()
    }

    pub fn init_ledger(&self) -> Result<(), ContractError> {
        self.execute(|ctx| self.contract.init_ledger(ctx))
    }

    pub fn record_hash(
        &self,
        round: RoundNum,
        model_hash: &str,
        aggregated_by: &str,
    ) -> Result<ModelHashRecord, ContractError> {
        self.execute(|ctx| self.contract.record_hash(ctx, round, model_hash, aggregated_by))
    }

    pub fn query_hash(&self, round: RoundNum) -> Result<ModelHashRecord, ContractError> {
        self.execute(|ctx| self.contract.query_hash(ctx, round))
    }

    /// Run `f` in its own transaction context.
    fn execute<T>(
        &self,
        f: impl FnOnce(&mut TxContext) -> Result<T, ContractError>,
    ) -> Result<T, ContractError> {
        let tx_id = format!("tx-{}", self.next_tx.fetch_add(1, Ordering::Relaxed));
        let mut ctx = TxContext::new(tx_id, self.store.clone(), self.config.clone());
        match f(&mut ctx) {
            Ok(value) => {
                ctx.commit()?;
                Ok(value)
            }
            Err(err) => {
                ctx.discard();
                Err(err)
            }
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::in_memory()
    }
}
