//! The 32-bit string fingerprint candidates are matched against.
//!
//! This is a plain multiplicative rolling hash (`h = h * 31 + byte`). It is
//! not cryptographic and collides easily: a matching fingerprint does not
//! prove the candidate is the original string.

/// Fingerprint width used throughout the search.
pub type Fingerprint = u32;

const MULTIPLIER: Fingerprint = 31;

/// Compute the fingerprint of a byte sequence.
///
/// Arithmetic wraps modulo 2^32 after every step. Bytes are read as signed
/// (`i8`), so values from `0x80` up are sign-extended before the addition.
#[inline]
pub fn fingerprint(bytes: &[u8]) -> Fingerprint {
    bytes.iter().fold(0, |hash: Fingerprint, &byte| {
        hash.wrapping_mul(MULTIPLIER)
            .wrapping_add(i32::from(byte as i8) as Fingerprint)
    })
}
