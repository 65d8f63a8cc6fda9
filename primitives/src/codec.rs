//! Payload encoding for records in world state.
//!
//! Records are stored as a JSON object with exactly the fields
//! `roundNum`, `modelHash`, `aggregatedBy` and `timestamp`. Integers are
//! 64-bit on both sides so no precision is lost. Unknown fields are
//! ignored on decode; missing or mistyped fields are an error.

use crate::record::ModelHashRecord;

/// Payload could not be produced or parsed.
#[derive(Debug, thiserror::Error)]
#[error("record payload: {0}")]
pub struct CodecError(#[from] serde_json::Error);

/// Encode a record to its stored byte form.
pub fn encode_record(record: &ModelHashRecord) -> Result<Vec<u8>, CodecError> {
    Ok(serde_json::to_vec(record)?)
}

/// Decode a record from its stored byte form.
pub fn decode_record(bytes: &[u8]) -> Result<ModelHashRecord, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}
