pub mod bits;
pub mod ecc;
pub mod error;

pub use bits::BitString;
pub use ecc::{crc, hamming};
pub use error::{Error, Result};
