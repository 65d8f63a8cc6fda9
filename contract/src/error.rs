//! Contract error type.

use hashrec_hostapi::HostError;
use hashrec_primitives::{CodecError, ErrorCode, RoundNum};

/// Every way a contract call can fail. Surfaced to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    /// Malformed input. Always a caller bug.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The round already has a record. Terminal for that round.
    #[error("hash for round {0} already exists, cannot overwrite")]
    AlreadyExists(RoundNum),

    /// No record for the round.
    #[error("hash record for round {0} does not exist")]
    NotFound(RoundNum),

    /// World state read or write failed.
    #[error("state backend: {0}")]
    Backend(#[from] HostError),

    /// Stored bytes could not be turned back into a record.
    #[error("decode: {0}")]
    Decode(String),

    /// Invocation named a function the contract does not export.
    #[error("unknown function: {0}")]
    UnknownFunction(String),
}

impl ContractError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Numeric status reported to the invoking client.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::AlreadyExists(_) => ErrorCode::AlreadyExists,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Backend(_) => ErrorCode::Backend,
            Self::Decode(_) => ErrorCode::Decode,
            Self::UnknownFunction(_) => ErrorCode::UnknownFunction,
        }
    }
}

impl From<CodecError> for ContractError {
    fn from(err: CodecError) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ContractError::invalid("x").code(), ErrorCode::InvalidArgument);
        assert_eq!(ContractError::AlreadyExists(1).code(), ErrorCode::AlreadyExists);
        assert_eq!(ContractError::NotFound(1).code(), ErrorCode::NotFound);
        assert_eq!(
            ContractError::Backend(HostError::EmptyKey).code(),
            ErrorCode::Backend
        );
        assert_eq!(ContractError::Decode("x".into()).code(), ErrorCode::Decode);
        assert_eq!(
            ContractError::UnknownFunction("f".into()).code(),
            ErrorCode::UnknownFunction
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ContractError::AlreadyExists(5).to_string(),
            "hash for round 5 already exists, cannot overwrite"
        );
        assert_eq!(
            ContractError::invalid("model hash empty").to_string(),
            "invalid argument: model hash empty"
        );
        let err: ContractError = HostError::Unavailable("peer down".into()).into();
        assert!(err.to_string().contains("peer down"));
    }
}
