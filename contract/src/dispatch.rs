//! Invocation by function name.
//!
//! Ledger clients invoke contract functions by name with a list of
//! string arguments. The exported functions are:
//! - `InitLedger` — no arguments, no state change
//! - `RecordHash` — `roundNum`, `modelHash`, `aggregatedBy`
//! - `QueryHash` — `roundNum`; payload is the stored record as JSON
//!
//! `dispatch` never panics; every failure becomes a non-zero status.

use hashrec_hostapi::HostApi;
use hashrec_primitives::{codec::encode_record, ErrorCode, RoundNum};

use crate::error::ContractError;
use crate::record_store::RecordStore;
use crate::validation::parse_round_arg;

pub const FN_INIT_LEDGER: &str = "InitLedger";
pub const FN_RECORD_HASH: &str = "RecordHash";
pub const FN_QUERY_HASH: &str = "QueryHash";

/// A parsed contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    InitLedger,
    RecordHash {
        round: RoundNum,
        model_hash: String,
        aggregated_by: String,
    },
    QueryHash {
        round: RoundNum,
    },
}

impl Invocation {
    /// Parse a function name and its string arguments.
    ///
    /// Only arity and integer syntax are checked here; the contract
    /// applies the value checks.
    pub fn parse(function: &str, args: &[&str]) -> Result<Self, ContractError> {
        match function {
            FN_INIT_LEDGER => {
                expect_args(args, 0)?;
                Ok(Self::InitLedger)
            }
            FN_RECORD_HASH => {
                expect_args(args, 3)?;
                Ok(Self::RecordHash {
                    round: parse_round_arg(args[0])?,
                    model_hash: args[1].to_string(),
                    aggregated_by: args[2].to_string(),
                })
            }
            FN_QUERY_HASH => {
                expect_args(args, 1)?;
                Ok(Self::QueryHash {
                    round: parse_round_arg(args[0])?,
                })
            }
            other => Err(ContractError::UnknownFunction(other.to_string())),
        }
    }

    /// Run the call against `host`. Returns the response payload.
    pub fn execute(
        &self,
        contract: &RecordStore,
        host: &mut dyn HostApi,
    ) -> Result<Vec<u8>, ContractError> {
        match self {
            Self::InitLedger => {
                contract.init_ledger(host)?;
                Ok(Vec::new())
            }
            Self::RecordHash {
                round,
                model_hash,
                aggregated_by,
            } => {
                contract.record_hash(host, *round, model_hash, aggregated_by)?;
                Ok(Vec::new())
            }
            Self::QueryHash { round } => {
                let record = contract.query_hash(host, *round)?;
                Ok(encode_record(&record)?)
            }
        }
    }
}

fn expect_args(args: &[&str], expected: usize) -> Result<(), ContractError> {
    if args.len() != expected {
        return Err(ContractError::invalid(format!(
            "expected {} arguments, got {}",
            expected,
            args.len()
        )));
    }
    Ok(())
}

/// Result of one invocation as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: ErrorCode,
    /// Error description; empty on success.
    pub message: String,
    pub payload: Vec<u8>,
}

impl Response {
    pub fn ok(payload: Vec<u8>) -> Self {
        Self {
            status: ErrorCode::Ok,
            message: String::new(),
            payload,
        }
    }

    pub fn error(err: &ContractError) -> Self {
        Self {
            status: err.code(),
            message: err.to_string(),
            payload: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

impl From<Result<Vec<u8>, ContractError>> for Response {
    fn from(result: Result<Vec<u8>, ContractError>) -> Self {
        match result {
            Ok(payload) => Self::ok(payload),
            Err(err) => Self::error(&err),
        }
    }
}

/// Parse and run one call against `host`.
///
/// The caller owns the host context and decides whether to commit it.
pub fn dispatch(
    contract: &RecordStore,
    host: &mut dyn HostApi,
    function: &str,
    args: &[&str],
) -> Result<Vec<u8>, ContractError> {
    Invocation::parse(function, args)?.execute(contract, host)
}
