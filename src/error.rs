//! Error types for the codec boundary.
//!
//! The codecs themselves are closed-form computations; every failure mode
//! is a rejected input, caught before any division or parity arithmetic
//! runs.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is empty, contains characters outside {0,1}, or is too short
    /// for the requested operation
    #[error("invalid bit string: {0}")]
    InvalidBitString(String),

    /// CRC generator key is empty or its leading bit is not 1
    #[error("invalid generator key: {0}")]
    InvalidKey(String),

    /// Redundancy count is inconsistent with the received word
    #[error("invalid redundancy count: {0}")]
    InvalidRedundancy(String),
}

/// Result type for all operations in the crate
pub type Result<T> = std::result::Result<T, Error>;
