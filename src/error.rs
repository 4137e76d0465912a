//! Error types for the numeric kernels

use thiserror::Error;

/// Failure statuses returned by fallible operations.
///
/// Discriminants are the numeric status codes of the C-compatible surface,
/// available through [`Error::code`]. Success has no variant; it is `Ok`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Error {
    /// Unspecified failure
    #[error("operation failed")]
    Failure = -1,

    /// Input outside the function's domain (e.g. a negative square root)
    #[error("input outside the function's domain")]
    Domain = 1,

    /// Result outside the representable range
    #[error("result outside the representable range")]
    Range = 2,

    /// Argument rejected by the operation
    #[error("invalid argument")]
    InvalidArgument = 3,

    /// Allocation failure, reserved: no kernel allocates
    #[error("allocation failed")]
    OutOfMemory = 4,

    /// A divisor's magnitude is below epsilon
    #[error("division by a value below epsilon")]
    ZeroDivision = 5,

    /// Input or result is NaN
    #[error("not a number")]
    NotANumber = 6,

    /// Result overflowed to infinity
    #[error("overflow")]
    Overflow = 7,

    /// Result underflowed
    #[error("underflow")]
    Underflow = 8,

    /// Required storage is missing, reserved: references cannot be null
    #[error("required storage is missing")]
    NullStorage = 9,
}

impl Error {
    /// Numeric status code of this error
    #[inline]
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// Map a numeric status code back to an error.
    ///
    /// Returns `None` for `0` (success) and for unknown codes.
    pub const fn from_code(code: i8) -> Option<Self> {
        Some(match code {
            -1 => Self::Failure,
            1 => Self::Domain,
            2 => Self::Range,
            3 => Self::InvalidArgument,
            4 => Self::OutOfMemory,
            5 => Self::ZeroDivision,
            6 => Self::NotANumber,
            7 => Self::Overflow,
            8 => Self::Underflow,
            9 => Self::NullStorage,
            _ => return None,
        })
    }
}

/// Result alias used by every fallible operation in the crate
pub type Result<T> = std::result::Result<T, Error>;
