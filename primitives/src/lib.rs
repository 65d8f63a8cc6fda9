//! `hashrec-primitives` — foundational types for the HashRecorder contract.
//!
//! This crate provides the record type, storage key derivation, the
//! self-describing payload codec, numeric status codes and the model
//! digest helper shared by the host API and the contract.

pub mod types;
pub mod error;
pub mod record;
pub mod codec;
pub mod digest;

// Re-export commonly used types at the crate root for convenience.
pub use types::{RoundNum, Timestamp, KEY_PREFIX, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use error::ErrorCode;
pub use record::ModelHashRecord;
pub use codec::{decode_record, encode_record, CodecError};
pub use digest::model_digest;
