//! Argument validation.
//!
//! These checks run before the contract touches world state, so a
//! rejected call never performs backend I/O. For `record_hash` the
//! checks run in a fixed order and the first failure wins:
//! 1. round number positive
//! 2. model hash non-empty
//! 3. aggregator id non-empty

use hashrec_primitives::RoundNum;

use crate::error::ContractError;

/// Reject round numbers below 1.
pub fn validate_round(round: RoundNum) -> Result<(), ContractError> {
    if round < 1 {
        return Err(ContractError::invalid("round number must be positive"));
    }
    Ok(())
}

/// Validate the three arguments of `record_hash`.
pub fn validate_record_args(
    round: RoundNum,
    model_hash: &str,
    aggregated_by: &str,
) -> Result<(), ContractError> {
    validate_round(round)?;

    if model_hash.is_empty() {
        return Err(ContractError::invalid("model hash empty"));
    }

    if aggregated_by.is_empty() {
        return Err(ContractError::invalid("aggregator id empty"));
    }

    Ok(())
}

/// Parse a round number passed as a string argument.
///
/// Accepts anything `i64` parses, including signs, so that `"0"` and
/// `"-3"` reach [`validate_round`] and fail with the usual message.
/// Surrounding whitespace is not stripped.
pub fn parse_round_arg(arg: &str) -> Result<RoundNum, ContractError> {
    arg.parse().map_err(|_| ContractError::invalid("round number must be an integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_args_pass() {
        assert!(validate_record_args(1, "h", "A").is_ok());
        assert!(validate_record_args(i64::MAX, "h", "A").is_ok());
    }

    #[test]
    fn test_non_positive_round() {
        for round in [0, -1, i64::MIN] {
            assert_eq!(
                validate_record_args(round, "h", "A").unwrap_err(),
                ContractError::invalid("round number must be positive")
            );
            assert!(validate_round(round).is_err());
        }
    }

    #[test]
    fn test_empty_model_hash() {
        assert_eq!(
            validate_record_args(1, "", "A").unwrap_err(),
            ContractError::invalid("model hash empty")
        );
    }

    #[test]
    fn test_empty_aggregator() {
        assert_eq!(
            validate_record_args(1, "h", "").unwrap_err(),
            ContractError::invalid("aggregator id empty")
        );
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(
            validate_record_args(0, "", "").unwrap_err(),
            ContractError::invalid("round number must be positive")
        );
        assert_eq!(
            validate_record_args(3, "", "").unwrap_err(),
            ContractError::invalid("model hash empty")
        );
    }

    #[test]
    fn test_parse_round_arg() {
        assert_eq!(parse_round_arg("7").unwrap(), 7);
        assert_eq!(parse_round_arg("-3").unwrap(), -3);
        assert_eq!(
            parse_round_arg("seven").unwrap_err(),
            ContractError::invalid("round number must be an integer")
        );
        assert!(parse_round_arg("").is_err());
        assert!(parse_round_arg("1.5").is_err());
    }

    #[test]
    fn test_parse_round_arg_rejects_whitespace() {
        for arg in [" 42", "42 ", " 42 ", "\t7", "7\n"] {
            assert_eq!(
                parse_round_arg(arg).unwrap_err(),
                ContractError::invalid("round number must be an integer"),
                "{:?}",
                arg
            );
        }
    }
}
