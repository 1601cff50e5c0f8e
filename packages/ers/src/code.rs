//! Canonical status codes
//!
//! The catalog of classifications mirrors the gRPC status codes. The zero
//! value is reserved for the [`Code::Wrap`] sentinel carried by wrap
//! envelopes and never names a real failure.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status code of a classified error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
pub enum Code {
    /// Sentinel carried by wrap envelopes (transport value `OK`)
    Wrap = 0,
    /// The operation was canceled, typically by the caller
    Canceled = 1,
    /// Unknown error
    Unknown = 2,
    /// The client specified an invalid argument
    InvalidArgument = 3,
    /// The deadline expired before the operation could complete
    DeadlineExceeded = 4,
    /// Some requested entity was not found
    NotFound = 5,
    /// The entity a client attempted to create already exists
    AlreadyExists = 6,
    /// The caller does not have permission to execute the operation
    PermissionDenied = 7,
    /// Some resource has been exhausted
    ResourceExhausted = 8,
    /// The system is not in a state required for the operation
    FailedPrecondition = 9,
    /// The operation was aborted
    Aborted = 10,
    /// The operation was attempted past the valid range
    OutOfRange = 11,
    /// The operation is not implemented or supported
    Unimplemented = 12,
    /// An invariant expected by the system has been broken
    Internal = 13,
    /// The service is currently unavailable
    Unavailable = 14,
    /// Unrecoverable data loss or corruption
    DataLoss = 15,
    /// The request does not have valid authentication credentials
    Unauthenticated = 16,
}

/// Failure to parse a [`Code`] from its name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status code: {0}")]
pub struct ParseCodeError(pub String);

impl Code {
    /// The sixteen canonical codes, excluding the sentinel
    pub const CANONICAL: [Code; 16] = [
        Code::Canceled,
        Code::Unknown,
        Code::InvalidArgument,
        Code::DeadlineExceeded,
        Code::NotFound,
        Code::AlreadyExists,
        Code::PermissionDenied,
        Code::ResourceExhausted,
        Code::FailedPrecondition,
        Code::Aborted,
        Code::OutOfRange,
        Code::Unimplemented,
        Code::Internal,
        Code::Unavailable,
        Code::DataLoss,
        Code::Unauthenticated,
    ];

    /// Name of the code, identical to the reason of its catalog entry
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Code::Wrap => "Wrap",
            Code::Canceled => "Canceled",
            Code::Unknown => "Unknown",
            Code::InvalidArgument => "InvalidArgument",
            Code::DeadlineExceeded => "DeadlineExceeded",
            Code::NotFound => "NotFound",
            Code::AlreadyExists => "AlreadyExists",
            Code::PermissionDenied => "PermissionDenied",
            Code::ResourceExhausted => "ResourceExhausted",
            Code::FailedPrecondition => "FailedPrecondition",
            Code::Aborted => "Aborted",
            Code::OutOfRange => "OutOfRange",
            Code::Unimplemented => "Unimplemented",
            Code::Internal => "Internal",
            Code::Unavailable => "Unavailable",
            Code::DataLoss => "DataLoss",
            Code::Unauthenticated => "Unauthenticated",
        }
    }

    /// Wire value of the code
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Code for a wire value, `None` outside `0..=16`
    #[must_use]
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Code::Wrap),
            1 => Some(Code::Canceled),
            2 => Some(Code::Unknown),
            3 => Some(Code::InvalidArgument),
            4 => Some(Code::DeadlineExceeded),
            5 => Some(Code::NotFound),
            6 => Some(Code::AlreadyExists),
            7 => Some(Code::PermissionDenied),
            8 => Some(Code::ResourceExhausted),
            9 => Some(Code::FailedPrecondition),
            10 => Some(Code::Aborted),
            11 => Some(Code::OutOfRange),
            12 => Some(Code::Unimplemented),
            13 => Some(Code::Internal),
            14 => Some(Code::Unavailable),
            15 => Some(Code::DataLoss),
            16 => Some(Code::Unauthenticated),
            _ => None,
        }
    }

    /// Whether this is one of the sixteen canonical codes
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        !matches!(self, Code::Wrap)
    }

    /// HTTP status conventionally paired with the code
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Code::Wrap => 200,
            Code::Canceled => 499,
            Code::Unknown | Code::Internal | Code::DataLoss => 500,
            Code::InvalidArgument | Code::FailedPrecondition | Code::OutOfRange => 400,
            Code::DeadlineExceeded => 504,
            Code::NotFound => 404,
            Code::AlreadyExists | Code::Aborted => 409,
            Code::PermissionDenied => 403,
            Code::ResourceExhausted => 429,
            Code::Unimplemented => 501,
            Code::Unavailable => 503,
            Code::Unauthenticated => 401,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Code {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(Code::Wrap)
            .chain(Code::CANONICAL)
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseCodeError(s.to_string()))
    }
}

impl From<tonic::Code> for Code {
    fn from(code: tonic::Code) -> Self {
        // tonic maps out-of-range wire values to Unknown; do the same
        Code::from_i32(i32::from(code)).unwrap_or(Code::Unknown)
    }
}

impl From<Code> for tonic::Code {
    fn from(code: Code) -> Self {
        tonic::Code::from(code.as_i32())
    }
}
