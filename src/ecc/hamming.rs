//! Hamming single-error-correcting code over explicit bit strings.
//!
//! Hamming codes interleave parity bits into the payload at the positions
//! whose 1-based index is a power of two, counting from the least
//! significant (right) end of the word. Each parity bit covers exactly the
//! positions whose index has the corresponding bit set, so recomputing the
//! parities over a received word yields a syndrome that is zero for a clean
//! word and otherwise spells out the position of the flipped bit.
//!
//! One flipped bit per word is the design limit: two or more simultaneous
//! flips can alias to a plausible-looking position and be "corrected" into
//! a different word. Callers needing multi-error detection should layer a
//! CRC or a stronger code on top.
//!
//! # Examples
//!
//! ```
//! use codeword::ecc::{hamming_encode, hamming_check};
//!
//! let enc = hamming_encode("1011").unwrap();
//! assert_eq!(enc.r, 3);
//! assert_eq!(enc.codeword.len(), 7);
//!
//! let chk = hamming_check(&enc.codeword.to_string(), enc.r).unwrap();
//! assert!(chk.ok);
//! assert_eq!(chk.error_position, 0);
//! ```

use bitvec::prelude::*;

use crate::bits::BitString;
use crate::ecc::Result;
use crate::error::Error;

/// Outcome of a Hamming encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingEncoding {
    /// Number of parity bits placed into the codeword
    pub r: usize,
    /// Payload interleaved with computed parity bits, `m + r` bits long
    pub codeword: BitString,
}

/// Outcome of a Hamming check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingCheck {
    /// True iff the syndrome was zero
    pub ok: bool,
    /// 1-based position of the flipped bit counted from the right, 0 when
    /// the word is clean
    pub error_position: usize,
    /// The repaired word; present exactly when a single-bit error was found
    pub corrected: Option<BitString>,
}

/// Smallest number of parity bits `r` satisfying `2^r >= m + r + 1`.
///
/// The right side grows linearly and the left exponentially, so counting
/// up from zero terminates at the unique minimal solution.
///
/// # Example
/// ```
/// use codeword::ecc::redundancy_count;
///
/// assert_eq!(redundancy_count(4), 3);
/// assert_eq!(redundancy_count(7), 4);
/// ```
pub fn redundancy_count(m: usize) -> usize {
    let mut r = 0;
    while (1usize << r) < m + r + 1 {
        r += 1;
    }
    r
}

/// Left-to-right index of the 1-based position `pos` counted from the right.
///
/// Placement, parity fill, syndrome detection, and correction all convert
/// through here so the two numbering directions cannot drift apart.
fn index_from_right(len: usize, pos: usize) -> usize {
    len - pos
}

/// Position mask `2^i` for parity group `i`, or `None` once the group lies
/// entirely past the end of a `len`-bit word.
fn group_mask(i: usize, len: usize) -> Option<usize> {
    match 1usize.checked_shl(i as u32) {
        Some(mask) if mask <= len => Some(mask),
        _ => None,
    }
}

/// XOR of all bits whose 1-based right-to-left position has `mask`'s bit
/// set. Membership is decided by position number alone; parity slots take
/// part like any other position.
fn group_parity(bits: &BitSlice<u8, Msb0>, mask: usize) -> bool {
    let len = bits.len();
    let mut val = false;
    for pos in 1..=len {
        if pos & mask != 0 {
            val ^= bits[index_from_right(len, pos)];
        }
    }
    val
}

/// Spread the payload over an `m + r` bit word, leaving zeroed parity slots
/// at the power-of-two positions.
///
/// Positions are numbered 1-based from the right; payload bits keep their
/// original left-to-right order, filled from the rightmost non-parity slot
/// upward. Use [`redundancy_count`] of the payload length for `r`.
pub fn place_redundant_bits(data: &BitString, r: usize) -> BitString {
    let total = data.len() + r;
    let mut out = BitVec::repeat(false, total);
    let mut payload = data.iter().rev();
    for pos in 1..=total {
        if pos.is_power_of_two() {
            continue; // parity slot, filled later
        }
        let bit = payload.next().unwrap_or(false);
        out.set(index_from_right(total, pos), bit);
    }
    BitString::from_bits(out)
}

/// Overwrite the parity slots of a placed word with their computed values.
///
/// For each group `i` in `0..r` the XOR over the group's member positions
/// lands in the slot at right-to-left position `2^i`. Payload bits are
/// untouched. A parity slot belongs to no group but its own, so filling in
/// ascending order never disturbs a value computed earlier.
pub fn fill_parity_bits(arr: &BitString, r: usize) -> BitString {
    let mut out = arr.as_bits().to_bitvec();
    let total = out.len();
    for i in 0..r {
        let mask = match group_mask(i, total) {
            Some(mask) => mask,
            None => break,
        };
        let val = group_parity(&out, mask);
        out.set(index_from_right(total, mask), val);
    }
    BitString::from_bits(out)
}

/// Recompute the parity groups over a received word and accumulate the
/// syndrome.
///
/// Returns 0 for a clean word; otherwise the 1-based right-to-left position
/// of the flipped bit, assuming at most one bit flipped. Groups whose mask
/// exceeds the word length contribute nothing.
pub fn detect_error(received: &BitString, r: usize) -> usize {
    let bits = received.as_bits();
    let mut pos = 0;
    for i in 0..r {
        let mask = match group_mask(i, bits.len()) {
            Some(mask) => mask,
            None => break,
        };
        if group_parity(bits, mask) {
            pos += mask;
        }
    }
    pos
}

/// Flip the bit at 1-based right-to-left position `pos`.
///
/// Returns `None` when there is nothing to do (`pos == 0`) or when `pos`
/// lies past the end of the word, which no single-bit error can produce.
pub fn correct(received: &BitString, pos: usize) -> Option<BitString> {
    if pos == 0 || pos > received.len() {
        return None;
    }
    Some(received.flipped(index_from_right(received.len(), pos)))
}

/// Encode an ASCII bit string, deriving the parity count from its length.
pub fn hamming_encode(data: &str) -> Result<HammingEncoding> {
    let data: BitString = data.parse()?;
    let r = redundancy_count(data.len());
    let placed = place_redundant_bits(&data, r);
    let codeword = fill_parity_bits(&placed, r);
    Ok(HammingEncoding { r, codeword })
}

/// Check an ASCII bit string received with `r` parity bits, repairing a
/// single flipped bit if one is found.
///
/// # Errors
///
/// Returns [`Error::InvalidBitString`] on malformed input and
/// [`Error::InvalidRedundancy`] when the syndrome names a position past the
/// end of the word, which means `r` does not belong to this word.
pub fn hamming_check(received: &str, r: usize) -> Result<HammingCheck> {
    let received: BitString = received.parse()?;
    let pos = detect_error(&received, r);
    if pos == 0 {
        return Ok(HammingCheck {
            ok: true,
            error_position: 0,
            corrected: None,
        });
    }
    if pos > received.len() {
        return Err(Error::InvalidRedundancy(format!(
            "syndrome names position {} in a {}-bit word",
            pos,
            received.len()
        )));
    }
    log::debug!("correcting single-bit error at position {} from the right", pos);
    Ok(HammingCheck {
        ok: false,
        error_position: pos,
        corrected: correct(&received, pos),
    })
}
