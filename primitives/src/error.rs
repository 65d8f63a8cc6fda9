//! Numeric status codes for contract invocations.
//!
//! Every invocation response carries one of these codes. `0` = OK,
//! non-zero = the error kind that ended the call. The repr values are
//! part of the invocation surface and must not be renumbered.

use std::fmt;

/// Invocation status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,
    InvalidArgument = 1,
    AlreadyExists = 2,
    NotFound = 3,
    Backend = 4,
    Decode = 5,
    UnknownFunction = 6,
}

impl ErrorCode {
    /// Returns true if this is the `Ok` variant.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::InvalidArgument => write!(f, "ERR_INVALID_ARGUMENT"),
            Self::AlreadyExists => write!(f, "ERR_ALREADY_EXISTS"),
            Self::NotFound => write!(f, "ERR_NOT_FOUND"),
            Self::Backend => write!(f, "ERR_BACKEND"),
            Self::Decode => write!(f, "ERR_DECODE"),
            Self::UnknownFunction => write!(f, "ERR_UNKNOWN_FUNCTION"),
        }
    }
}
