//! Reversible short codes for recipe ids.
//!
//! A recipe id is mapped to a short lowercase alphanumeric token in two steps:
//!
//! 1. The low [`BLOCK_SIZE`] bits of the id are bit-reversed. This is an
//!    involution on `u64`, so sequential ids stop looking sequential while the
//!    mapping stays a bijection.
//! 2. The scrambled value is written in base 31 over [`ALPHABET`] and
//!    left-padded with the zero symbol up to [`MIN_LENGTH`] characters.
//!
//! [`decode`] accepts exactly the tokens [`encode`] can produce: any token
//! that is not the canonical encoding of an id in `1..=i64::MAX` is rejected.
//!
//! The mapping is obfuscation only. It is not a secret and must never be used
//! to gate access to a recipe.

use thiserror::Error;

/// Token symbols. Index in this slice is the digit value.
const ALPHABET: &[u8; 31] = b"mn6j2c4rv8bpygw95z7hsdaetxuk3fq";

/// Number of low bits that are reversed before base conversion.
const BLOCK_SIZE: u32 = 24;

const BLOCK_MASK: u64 = (1 << BLOCK_SIZE) - 1;

/// Shortest token produced by [`encode`].
pub const MIN_LENGTH: usize = 5;

/// Longest possible token: `u64::MAX` needs 13 base-31 digits.
pub const MAX_LENGTH: usize = 13;

/// Errors returned by [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid short code")]
    InvalidToken,
}

/// Encodes a recipe id into its short code.
///
/// Ids are database-assigned and therefore positive; non-positive values are
/// outside the supported domain and [`decode`] will never return them.
pub fn encode(id: i64) -> String {
    let value = scramble(id as u64);
    let base = ALPHABET.len() as u64;

    let mut digits = Vec::with_capacity(MAX_LENGTH);
    let mut rest = value;
    loop {
        digits.push(ALPHABET[(rest % base) as usize]);
        rest /= base;
        if rest == 0 {
            break;
        }
    }
    while digits.len() < MIN_LENGTH {
        digits.push(ALPHABET[0]);
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Decodes a short code back into the recipe id it was produced from.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidToken`] if the token:
/// - is shorter than [`MIN_LENGTH`] or longer than [`MAX_LENGTH`]
/// - contains a character outside the alphabet
/// - overflows a 64-bit value
/// - maps to an id outside `1..=i64::MAX`
/// - is not the canonical encoding of that id (for example extra padding)
pub fn decode(token: &str) -> Result<i64, DecodeError> {
    if token.len() < MIN_LENGTH || token.len() > MAX_LENGTH {
        return Err(DecodeError::InvalidToken);
    }

    let base = ALPHABET.len() as u64;
    let mut value: u64 = 0;
    for byte in token.bytes() {
        let digit = digit_value(byte).ok_or(DecodeError::InvalidToken)?;
        value = value
            .checked_mul(base)
            .and_then(|v| v.checked_add(digit))
            .ok_or(DecodeError::InvalidToken)?;
    }

    let id = i64::try_from(scramble(value)).map_err(|_| DecodeError::InvalidToken)?;
    if id <= 0 || encode(id) != token {
        return Err(DecodeError::InvalidToken);
    }

    Ok(id)
}

fn digit_value(byte: u8) -> Option<u64> {
    ALPHABET
        .iter()
        .position(|&symbol| symbol == byte)
        .map(|index| index as u64)
}

/// Reverses the low [`BLOCK_SIZE`] bits and keeps the high bits untouched.
fn scramble(value: u64) -> u64 {
    let low = value & BLOCK_MASK;
    let reversed = low.reverse_bits() >> (u64::BITS - BLOCK_SIZE);
    (value & !BLOCK_MASK) | reversed
}
