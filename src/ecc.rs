//! Binary error-control code implementations.
//!
//! This module provides the two classical codecs of the crate:
//! - Cyclic Redundancy Check (detection only)
//! - Hamming single-error-correcting code
//!
//! # Error-Control Codes
//!
//! Both codecs operate on [`BitString`](crate::bits::BitString) words and
//! are pure functions of their inputs: the CRC divides the message by a
//! generator polynomial over GF(2) and transmits the remainder with the
//! data, while the Hamming code interleaves parity bits at power-of-two
//! positions so a single flipped bit can be located and repaired.
//!
//! # Examples
//!
//! ```rust
//! use codeword::ecc::{crc_encode, crc_check};
//!
//! let sent = crc_encode("1101011011", "1011").unwrap();
//! let received = crc_check(&sent.codeword.to_string(), "1011").unwrap();
//! assert!(received.ok);
//! ```

use crate::error::Error;

/// Result type for error-control operations
pub type Result<T> = std::result::Result<T, Error>;

/// Cyclic Redundancy Check codec
pub mod crc;
/// Hamming single-error-correcting codec
pub mod hamming;

pub use crc::{crc_check, crc_encode, Crc, CrcCheck, CrcEncoding};
pub use hamming::{
    hamming_check, hamming_encode, redundancy_count, HammingCheck, HammingEncoding,
};
