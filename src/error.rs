//! Error types for combr

use thiserror::Error;

/// Result type alias using combr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in combr operations
///
/// Every failure is deterministic: identical arguments always produce the
/// same outcome, and preconditions are rejected before any computation
/// begins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A size parameter is negative
    #[error("Invalid argument '{arg}': {value} is negative")]
    Negative {
        /// The argument name
        arg: &'static str,
        /// The offending value
        value: i64,
    },

    /// An argument is outside the supported range
    #[error("Invalid argument '{arg}': {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// The argument name
        arg: &'static str,
        /// The offending value
        value: i64,
        /// Smallest supported value
        min: i64,
        /// Largest supported value
        max: i64,
    },

    /// The mathematically correct result exceeds the signed 64-bit range
    #[error("Arithmetic overflow: {op}({n}, {k}) does not fit in an i64")]
    Overflow {
        /// The operation name
        op: &'static str,
        /// First operand
        n: i64,
        /// Second operand
        k: i64,
    },
}
