//! Fast Base58 codec.
//!
//! Converts bytes to the Bitcoin alphabet and back without a bignum library.
//! Both directions treat the input as one big-endian number and re-express it
//! digit by digit, folding up to 7 input bytes (encode) or 9 base58 digits
//! (decode) into a single `u64` carry per pass, so the quadratic digit sweep
//! runs a fraction as often as the textbook one-digit loop.
//!
//! ```
//! let text = fast58::encode(b"Hello World");
//! assert_eq!(text, "JxF12TrwUP45BMd");
//! assert_eq!(fast58::decode(&text).unwrap(), b"Hello World");
//! ```

#![forbid(unsafe_code)]

/// The 58-character Bitcoin alphabet; a byte's index here is its digit value.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

mod encode;
mod decode;

pub use encode::{encode, encode_into};
pub use decode::{decode, decode_into, DecodeError};
