//! Short code generation over the base62 alphabet.
//!
//! Codes are drawn uniformly at random, one character at a time, with no
//! sequential or counter-based component. [`encode_base62`] is the matching
//! positional encoder, kept for deterministic-ID schemes; it is not on the
//! live request path.

use rand::Rng;

/// The 62-character alphabet: digits, lowercase, uppercase, in that order.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default generated code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random short code of the given length.
///
/// Each position is an independent uniform draw from [`BASE62_ALPHABET`].
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| BASE62_ALPHABET[rng.random_range(0..BASE62_ALPHABET.len())] as char)
        .collect()
}

/// Encodes a non-negative integer in base62 positional notation.
///
/// Most significant digit first; zero maps to the alphabet's first
/// character (`"0"`).
pub fn encode_base62(mut n: u64) -> String {
    if n == 0 {
        return (BASE62_ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE62_ALPHABET[(n % 62) as usize]);
        n /= 62;
    }
    digits.reverse();

    String::from_utf8(digits).expect("alphabet is ASCII")
}
