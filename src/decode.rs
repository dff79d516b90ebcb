//! Base58 decoding module for fast58.
//! Bitcoin alphabet; leading '1's map back to zero bytes ahead of the arithmetic.
//! Optimizations: precomp table for char->digit; up to 9 digits folded into one
//! u64 carry per sweep of the byte buffer (worst case 0x1A63_6A90_B079_FFFF).
//! Input is validated up front, so a rejected call writes nothing.

use crate::ALPHABET;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Byte outside the Base58 alphabet, at this offset in the input.
    #[error("invalid base58 character at position {0}")]
    InvalidChar(usize),
}

/// Decodes a Base58 string (Bitcoin alphabet) to bytes.
///
/// # Errors
/// - `InvalidChar(pos)`: non-alphabet byte at offset `pos`.
#[inline]
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::new();
    decode_into(input, &mut out)?;
    Ok(out)
}

/// Decodes Base58, appending the bytes to `out`. The input is checked before
/// anything is written, so `out` is untouched by a failed call.
///
/// On 32-bit targets the capacity estimate overflows past ~11 MiB of text;
/// staying below that is a precondition, not a checked error.
///
/// # Errors
/// - `InvalidChar(pos)`: non-alphabet byte at offset `pos`. Everything outside
///   the 58 alphabet characters is rejected, whitespace included; a multi-byte
///   UTF-8 character fails at its first byte.
#[allow(clippy::cast_possible_truncation)]
pub fn decode_into(input: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    let bytes = input.as_bytes();
    let zeros = bytes.iter().take_while(|&&b| b == b'1').count();
    let rest = &bytes[zeros..];

    // Whole-input validation first keeps the failure all-or-nothing and the
    // sweeps below free of error branches.
    for (i, &b) in rest.iter().enumerate() {
        if digit(b) == 255 {
            return Err(DecodeError::InvalidChar(zeros + i));
        }
    }

    if rest.is_empty() {
        out.extend(std::iter::repeat_n(0u8, zeros));
        return Ok(());
    }

    // ln(58)/ln(256) = 0.733 bytes per base58 digit; 375/512 = 0.7324 rounds
    // that up in integer math, +1 covers the floor.
    let bound = ((rest.len() * 375) >> 9) + 1;
    out.reserve(zeros + bound);
    out.extend(std::iter::repeat_n(0u8, zeros));

    // Big-endian base256 digits; buf[start..] is the populated suffix and
    // grows leftward as carries spill past the current top byte.
    let mut buf = vec![0u8; bound];
    let mut start = buf.len();

    // Fold up to 9 digits into one carry per sweep: against a top byte of
    // 0xFF, 58^9 - 1 + 58^9 * 255 = 0x1A63_6A90_B079_FFFF still fits u64, a
    // 10th digit would not. rchunks(9).rev() hands back the remainder-sized
    // batch first, keeping intermediate numbers small.
    for batch in rest.rchunks(9).rev() {
        let mut carry = 0u64;
        for &b in batch {
            carry = carry * 58 + u64::from(digit(b));
        }
        let multiplier = POW58[batch.len()];

        // buf = buf * multiplier + carry, least significant first.
        for byte in buf[start..].iter_mut().rev() {
            carry += multiplier * u64::from(*byte);
            *byte = (carry % 256) as u8;
            carry /= 256;
        }
        // Drain the residue into new top bytes; at most 8 of them.
        while carry != 0 {
            start -= 1;
            buf[start] = (carry % 256) as u8;
            carry /= 256;
        }
    }

    out.extend_from_slice(&buf[start..]);
    Ok(())
}

/// Digit value of `b`, or 255 for anything outside the alphabet (including
/// every byte past 'z', which the table does not cover).
#[inline]
fn digit(b: u8) -> u8 {
    BASE58_DIGITS.get(b as usize).copied().unwrap_or(255)
}

/// Char -> digit value for ASCII 0 through 'z'; 255 marks the gaps.
const BASE58_DIGITS: [u8; 123] = {
    let mut table = [255u8; 123];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// 58^0 ..= 58^9; POW58[k] is the multiplier for a k-digit batch.
const POW58: [u64; 10] = {
    let mut table = [1u64; 10];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * 58;
        i += 1;
    }
    table
};
