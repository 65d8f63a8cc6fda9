//! The record store contract.
//!
//! Each round number maps to one key, `HASH_<round>`, which moves from
//! absent to present exactly once. `record_hash` checks for an existing
//! value before writing; the host's commit-time read validation turns
//! that check-then-write into an atomic step across concurrent callers.

use hashrec_hostapi::{HostApi, LogLevel};
use hashrec_primitives::{
    codec::{decode_record, encode_record},
    types::round_key,
    ModelHashRecord, RoundNum,
};

use crate::error::ContractError;
use crate::validation::{validate_record_args, validate_round};

/// Write-once model hash store.
///
/// Stateless: all state is accessed through the `HostApi`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordStore;

impl RecordStore {
    pub fn new() -> Self {
        Self
    }

    /// Initialization hook. Writes nothing.
    pub fn init_ledger(&self, host: &mut dyn HostApi) -> Result<(), ContractError> {
        let _ = host.log(LogLevel::Info, "hash recorder initialized");
        Ok(())
    }

    /// Record the hash for `round`.
    ///
    /// Fails with `AlreadyExists` if the round already has a record; the
    /// stored value is never replaced. The timestamp is taken from the
    /// host clock at write time. Returns the record as stored.
    pub fn record_hash(
        &self,
        host: &mut dyn HostApi,
        round: RoundNum,
        model_hash: &str,
        aggregated_by: &str,
    ) -> Result<ModelHashRecord, ContractError> {
        validate_record_args(round, model_hash, aggregated_by)?;

        let key = round_key(round);
        if host.state_get(&key)?.is_some() {
            return Err(ContractError::AlreadyExists(round));
        }

        let record = ModelHashRecord::new(round, model_hash, aggregated_by, host.timestamp()?);
        let payload = encode_record(&record)?;
        host.state_put(&key, &payload)?;

        let _ = host.log(
            LogLevel::Info,
            &format!(
                "recorded hash for round {} (hash: {}) by {}",
                round, model_hash, aggregated_by
            ),
        );
        Ok(record)
    }

    /// Fetch the record for `round`.
    pub fn query_hash(
        &self,
        host: &mut dyn HostApi,
        round: RoundNum,
    ) -> Result<ModelHashRecord, ContractError> {
        validate_round(round)?;

        let key = round_key(round);
        let payload = host
            .state_get(&key)?
            .ok_or(ContractError::NotFound(round))?;
        let record = decode_record(&payload)?;
        if record.round_num != round {
            return Err(ContractError::Decode(format!(
                "record under {} claims round {}",
                key, record.round_num
            )));
        }

        let _ = host.log(
            LogLevel::Debug,
            &format!("queried hash for round {}: {}", round, record.model_hash),
        );
        Ok(record)
    }
}
