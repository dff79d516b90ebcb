//! Base58 encoding module for fast58.
//! Bitcoin alphabet; leading zero bytes have no arithmetic weight and map to '1's.
//! Optimizations: up to 7 input bytes folded into one u64 carry per sweep of the
//! digit buffer, remainder-sized batch first so intermediate numbers stay small.
//! Perf: O(n^2 / 7) scalar; worst-case sweep carry 0x39FF_FFFF_FFFF_FFFF fits u64.
use crate::ALPHABET;

/// Encodes bytes as a Base58 string.
#[must_use]
#[inline]
pub fn encode(input: &[u8]) -> String {
    let mut out = String::new();
    encode_into(input, &mut out);
    out
}

/// Encodes bytes as Base58, appending to `out`. Reserves the worst case up
/// front, so an already-sized buffer is reused without reallocation; prefer
/// this form when encoding in a loop.
///
/// Cannot fail. On 32-bit targets the capacity estimate overflows past
/// ~12 MiB of input; staying below that is a precondition, not a checked
/// error.
#[allow(clippy::cast_possible_truncation)]
pub fn encode_into(input: &[u8], out: &mut String) {
    // Zero bytes up front are not digits of the number; emit them as '1's
    // and run the conversion on the rest.
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let rest = &input[zeros..];
    if rest.is_empty() {
        out.extend(std::iter::repeat_n('1', zeros));
        return;
    }

    // ln(256)/ln(58) = 1.365 base58 digits per byte; 350/256 = 1.367 rounds
    // that up in integer math, +1 covers the floor.
    let bound = ((rest.len() * 350) >> 8) + 1;
    out.reserve(zeros + bound);
    out.extend(std::iter::repeat_n('1', zeros));

    // Big-endian base58 digits; digits[start..] is the populated suffix and
    // grows leftward as carries spill past the current top digit.
    let mut digits = vec![0u8; bound];
    let mut start = digits.len();

    // Fold up to 7 bytes into one carry per sweep: against a top digit of 57,
    // 57 * 2^56 + (2^56 - 1) = 0x39FF_FFFF_FFFF_FFFF still fits u64, an 8th
    // byte would not. rchunks(7).rev() hands back the remainder-sized batch
    // first, so the number is still short while sweeps are cheapest.
    for batch in rest.rchunks(7).rev() {
        let mut carry = 0u64;
        for &byte in batch {
            carry = (carry << 8) | u64::from(byte);
        }
        let multiplier = 1u64 << (8 * batch.len());

        // digits = digits * multiplier + carry, least significant first.
        for digit in digits[start..].iter_mut().rev() {
            carry += multiplier * u64::from(*digit);
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        // Drain the residue into new top digits; at most 11 of them, since
        // ln(0x39FF_FFFF_FFFF_FFFF) / ln(58) = 10.6.
        while carry != 0 {
            start -= 1;
            digits[start] = (carry % 58) as u8;
            carry /= 58;
        }
    }

    out.extend(digits[start..].iter().map(|&d| ALPHABET[d as usize] as char));
}
