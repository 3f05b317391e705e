//! CRC (Cyclic Redundancy Check) over explicit bit strings.
//!
//! CRC treats the message as a binary polynomial and divides it modulo 2 by
//! a generator polynomial, transmitting the remainder alongside the data.
//! A receiver repeats the division over the whole received word; a non-zero
//! remainder means the word was corrupted in transit.
//!
//! Unlike table-driven byte-oriented CRC32 implementations, this codec
//! works on bit strings of any length under an arbitrary generator key, and
//! keeps leading zeros significant throughout. Division is the textbook
//! XOR-shift long division: addition and subtraction coincide in GF(2), so
//! each reduction step is a plain XOR against the divisor.
//!
//! # Examples
//!
//! ```
//! use codeword::ecc::crc_encode;
//!
//! let enc = crc_encode("1101011011", "1011").unwrap();
//! assert_eq!(enc.remainder.to_string(), "100");
//! assert_eq!(enc.codeword.to_string(), "1101011011100");
//! ```

use bitvec::prelude::*;

use crate::bits::BitString;
use crate::ecc::Result;
use crate::error::Error;

/// Outcome of a CRC encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcEncoding {
    /// The message with `key length - 1` zero bits appended (the dividend)
    pub appended: BitString,
    /// GF(2) division remainder, always `key length - 1` bits
    pub remainder: BitString,
    /// The message followed by the remainder, ready for transmission
    pub codeword: BitString,
}

/// Outcome of a CRC check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrcCheck {
    /// Remainder of the received word under the same key
    pub syndrome: BitString,
    /// True iff the syndrome is all zeros
    pub ok: bool,
}

/// CRC codec for a fixed generator key.
///
/// The key is the binary generator polynomial, most significant bit first.
/// Its leading bit must be 1; a key of length `k` produces checksums of
/// `k - 1` bits.
#[derive(Debug, Clone)]
pub struct Crc {
    key: BitString,
}

impl Crc {
    /// Create a codec for the given generator key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKey`] if the key is empty or its leading bit
    /// is not 1 (a divisor with no leading term has no defined degree).
    pub fn new(key: BitString) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::InvalidKey("key is empty".to_string()));
        }
        if !key.bit(0) {
            return Err(Error::InvalidKey(
                "leading bit of the key must be 1".to_string(),
            ));
        }
        Ok(Self { key })
    }

    /// The generator key.
    pub fn key(&self) -> &BitString {
        &self.key
    }

    /// Width of the checksum in bits (`key length - 1`).
    pub fn width(&self) -> usize {
        self.key.len() - 1
    }

    /// Compute the checksum for `data` and build the transmitted codeword.
    ///
    /// Appends [`width`](Self::width) zero bits to the message, divides the
    /// result by the key over GF(2), and returns the dividend, the
    /// remainder, and `data ++ remainder`. Messages shorter than the key
    /// are fine: the zero padding alone makes the dividend at least as long
    /// as the divisor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBitString`] if `data` is empty.
    pub fn encode(&self, data: &BitString) -> Result<CrcEncoding> {
        if data.is_empty() {
            return Err(Error::InvalidBitString("data is empty".to_string()));
        }
        let appended = data.concat(&BitString::zeros(self.width()));
        let remainder = mod2_div(appended.as_bits(), self.key.as_bits());
        let codeword = data.concat(&remainder);
        Ok(CrcEncoding {
            appended,
            remainder,
            codeword,
        })
    }

    /// Validate a received word against the key.
    ///
    /// Divides the received word itself (no extra padding) by the key and
    /// reports the remainder as the syndrome; `ok` is true iff it is all
    /// zeros. Detection only, no correction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBitString`] if the received word is empty or
    /// shorter than the key, in which case the windowed division is not
    /// defined. Any genuine codeword carries at least `key length - 1`
    /// checksum bits on top of a non-empty message, so this cannot fire on
    /// well-formed traffic.
    pub fn check(&self, received: &BitString) -> Result<CrcCheck> {
        if received.is_empty() {
            return Err(Error::InvalidBitString("received word is empty".to_string()));
        }
        if received.len() < self.key.len() {
            return Err(Error::InvalidBitString(format!(
                "received word of {} bits is shorter than the {}-bit key",
                received.len(),
                self.key.len()
            )));
        }
        let syndrome = mod2_div(received.as_bits(), self.key.as_bits());
        let ok = syndrome.is_all_zero();
        if !ok {
            log::debug!(
                "crc check failed: syndrome {} for {}-bit word",
                syndrome,
                received.len()
            );
        }
        Ok(CrcCheck { syndrome, ok })
    }
}

/// GF(2) polynomial-division remainder of `dividend` by `divisor`.
///
/// Maintains a sliding window of `divisor.len()` bits over the dividend.
/// Each step reduces the window (XOR against the divisor when the leading
/// bit is 1, against zeros otherwise) and shifts in the next dividend bit;
/// a final reduction once the dividend is exhausted leaves the remainder,
/// which is always one bit shorter than the divisor.
///
/// Callers guarantee `dividend.len() >= divisor.len()`.
fn mod2_div(dividend: &BitSlice<u8, Msb0>, divisor: &BitSlice<u8, Msb0>) -> BitString {
    let pick = divisor.len();
    debug_assert!(dividend.len() >= pick);

    let mut window = dividend[..pick].to_bitvec();
    for idx in pick..dividend.len() {
        window = reduce_step(&window, divisor, Some(dividend[idx]));
    }
    BitString::from_bits(reduce_step(&window, divisor, None))
}

/// One long-division step: drop the window's leading bit, XOR the tail with
/// the divisor's tail when that leading bit was 1, and shift in `next`.
fn reduce_step(
    window: &BitSlice<u8, Msb0>,
    divisor: &BitSlice<u8, Msb0>,
    next: Option<bool>,
) -> BitVec<u8, Msb0> {
    let lead = window[0];
    let mut out = BitVec::with_capacity(window.len());
    for i in 1..window.len() {
        out.push(window[i] ^ (lead & divisor[i]));
    }
    if let Some(bit) = next {
        out.push(bit);
    }
    out
}

/// Encode `data` under the generator `key`, both given as ASCII bit strings.
pub fn crc_encode(data: &str, key: &str) -> Result<CrcEncoding> {
    let data: BitString = data.parse()?;
    let key: BitString = key.parse()?;
    Crc::new(key)?.encode(&data)
}

/// Check a received ASCII bit string against the generator `key`.
pub fn crc_check(received: &str, key: &str) -> Result<CrcCheck> {
    let received: BitString = received.parse()?;
    let key: BitString = key.parse()?;
    Crc::new(key)?.check(&received)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_word(rng: &mut StdRng, len: usize) -> String {
        (0..len)
            .map(|_| if rng.gen::<bool>() { '1' } else { '0' })
            .collect()
    }

    #[test]
    fn test_textbook_division() {
        let enc = crc_encode("1101011011", "1011").unwrap();
        assert_eq!(enc.appended.to_string(), "1101011011000");
        assert_eq!(enc.remainder.to_string(), "100");
        assert_eq!(enc.codeword.to_string(), "1101011011100");
    }

    #[test]
    fn test_round_trip() {
        for (data, key) in [
            ("1101011011", "1011"),
            ("1", "1101"),
            ("100100", "1101"),
            ("11010011101100", "10011"),
            ("0000", "101"),
        ] {
            let enc = crc_encode(data, key).unwrap();
            let chk = crc_check(&enc.codeword.to_string(), key).unwrap();
            assert!(chk.ok, "codeword for {} under {} failed check", data, key);
            assert!(chk.syndrome.is_all_zero());
        }
    }

    #[test]
    fn test_remainder_width() {
        for (data, key) in [
            ("1101011011", "1011"),
            ("1", "10011"),
            ("10101010", "11"),
            ("111", "1"),
        ] {
            let enc = crc_encode(data, key).unwrap();
            assert_eq!(enc.remainder.len(), key.len() - 1);
            assert_eq!(enc.appended.len(), data.len() + key.len() - 1);
            assert_eq!(enc.codeword.len(), data.len() + key.len() - 1);
        }
    }

    #[test]
    fn test_degree_zero_key() {
        // Dividing by "1" leaves nothing: empty remainder, codeword == data.
        let enc = crc_encode("10110", "1").unwrap();
        assert!(enc.remainder.is_empty());
        assert_eq!(enc.codeword.to_string(), "10110");
        assert!(crc_check("10110", "1").unwrap().ok);
    }

    #[test]
    fn test_data_shorter_than_key() {
        let enc = crc_encode("1", "10011").unwrap();
        assert_eq!(enc.appended.len(), 5);
        assert_eq!(enc.remainder.len(), 4);
        assert!(crc_check(&enc.codeword.to_string(), "10011").unwrap().ok);
    }

    #[test]
    fn test_detects_single_bit_flips() {
        // Any generator with two or more terms catches every single-bit
        // error; sweep all positions for two standard keys.
        for key in ["1101", "10011"] {
            for data in ["1", "10", "1101011011", "00000001", "1111111"] {
                let codeword = crc_encode(data, key).unwrap().codeword;
                for i in 0..codeword.len() {
                    let corrupted = codeword.flipped(i);
                    let chk = crc_check(&corrupted.to_string(), key).unwrap();
                    assert!(
                        !chk.ok,
                        "flip at {} of {} under {} went undetected",
                        i, codeword, key
                    );
                }
            }
        }
    }

    #[test]
    fn test_rejects_bad_key() {
        assert!(matches!(
            crc_encode("1010", "0101"),
            Err(Error::InvalidKey(_))
        ));
        assert!(matches!(crc_check("1010", "011"), Err(Error::InvalidKey(_))));
        assert!(matches!(
            crc_encode("1010", ""),
            Err(Error::InvalidBitString(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_bit_strings() {
        assert!(matches!(
            crc_encode("", "1011"),
            Err(Error::InvalidBitString(_))
        ));
        assert!(matches!(
            crc_encode("10a1", "1011"),
            Err(Error::InvalidBitString(_))
        ));
        assert!(matches!(
            crc_check("21", "1011"),
            Err(Error::InvalidBitString(_))
        ));
    }

    #[test]
    fn test_rejects_received_shorter_than_key() {
        assert!(matches!(
            crc_check("10", "1011"),
            Err(Error::InvalidBitString(_))
        ));
    }

    #[test]
    fn test_random_round_trips() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for key in ["11", "1011", "10011", "110101"] {
            for _ in 0..50 {
                let len = rng.gen_range(1..=64);
                let data = random_word(&mut rng, len);
                let enc = crc_encode(&data, key).unwrap();
                assert_eq!(enc.remainder.len(), key.len() - 1);
                let chk = crc_check(&enc.codeword.to_string(), key).unwrap();
                assert!(chk.ok, "random word {} failed under {}", data, key);
            }
        }
    }
}
