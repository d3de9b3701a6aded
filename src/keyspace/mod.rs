//! Bijection between keyspace indices and candidate strings.
//!
//! Candidates are ordered first by length, then lexicographically by digit
//! value. With a base-`B` charset, the tier of length `len` holds `B^len`
//! candidates and starts at `Σ_{k<len} B^k`, so:
//!
//! ```text
//! index 0          -> "0"
//! index B-1        -> "z"
//! index B          -> "00"
//! index B + B^2 -1 -> "zz"
//! ```
//!
//! Everything here is pure and can be called from any number of workers
//! without synchronization.

pub mod charset;

pub use charset::{Charset, REFERENCE_ALPHABET};

use crate::error::{Result, SearchError};

/// Number of candidates of length `1..=max_length` over a `base`-symbol
/// alphabet, or `None` if it overflows `u64`.
pub fn keyspace_size(base: usize, max_length: usize) -> Option<u64> {
    let base = u64::try_from(base).ok()?;
    let mut total: u64 = 0;
    let mut tier: u64 = 1;
    for _ in 0..max_length {
        tier = tier.checked_mul(base)?;
        total = total.checked_add(tier)?;
    }
    Some(total)
}

/// All candidates up to a maximum length over one charset.
#[derive(Debug, Clone)]
pub struct Keyspace {
    charset: Charset,
    max_length: usize,
    size: u64,
}

impl Keyspace {
    pub fn new(charset: Charset, max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(SearchError::ZeroLength);
        }
        let size = keyspace_size(charset.len(), max_length).ok_or(
            SearchError::KeyspaceOverflow {
                base: charset.len(),
                max_length,
            },
        )?;
        Ok(Self {
            charset,
            max_length,
            size,
        })
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Total number of candidates.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Decode `index` into `buf`, returning the candidate bytes.
    ///
    /// `buf` is overwritten and reused between calls so the hot loop does
    /// not allocate. Returns `None` when `index >= size()`.
    pub fn decode_into<'a>(&self, index: u64, buf: &'a mut Vec<u8>) -> Option<&'a [u8]> {
        if index >= self.size {
            return None;
        }

        let base = self.charset.len() as u64;
        let mut cumulative: u64 = 0;
        let mut tier: u64 = base;
        let mut len = 1;

        // `cumulative + tier` never exceeds `size`, and the loop only moves
        // to the next tier while one exists, so none of this overflows.
        while index >= cumulative + tier {
            cumulative += tier;
            tier *= base;
            len += 1;
        }

        let mut offset = index - cumulative;
        buf.clear();
        buf.resize(len, 0);
        for slot in buf.iter_mut().rev() {
            *slot = self.charset.symbol((offset % base) as usize);
            offset /= base;
        }

        Some(buf.as_slice())
    }

    /// Decode `index` into an owned candidate string.
    pub fn decode(&self, index: u64) -> Option<String> {
        let mut buf = Vec::with_capacity(self.max_length);
        self.decode_into(index, &mut buf)?;
        // Charset symbols are ASCII.
        String::from_utf8(buf).ok()
    }

    /// Index of `candidate`, the inverse of [`Keyspace::decode`].
    ///
    /// Returns `None` for an empty candidate, one longer than
    /// `max_length()`, or one containing a symbol outside the charset.
    pub fn encode(&self, candidate: &str) -> Option<u64> {
        let bytes = candidate.as_bytes();
        if bytes.is_empty() || bytes.len() > self.max_length {
            return None;
        }

        let base = self.charset.len() as u64;
        // Both terms are bounded by `size`, which fits.
        let cumulative = keyspace_size(self.charset.len(), bytes.len() - 1)?;
        let mut offset: u64 = 0;
        for &byte in bytes {
            let digit = self.charset.digit(byte)?;
            offset = offset * base + u64::from(digit);
        }
        Some(cumulative + offset)
    }
}
