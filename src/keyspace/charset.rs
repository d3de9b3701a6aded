//! Ordered candidate alphabet.

use crate::error::{Result, SearchError};

/// Digits followed by lowercase ASCII letters.
pub const REFERENCE_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// An ordered set of distinct printable ASCII symbols.
///
/// A symbol's position is its digit value when indices are written in base
/// `len()`. Restricting to ASCII keeps every candidate valid UTF-8 and lets
/// the digit lookup be a flat table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    symbols: Vec<u8>,
    digits: [Option<u8>; 128],
}

impl Charset {
    /// Build a charset from the symbols of `alphabet`, in order.
    pub fn new(alphabet: &str) -> Result<Self> {
        if alphabet.is_empty() {
            return Err(SearchError::EmptyCharset);
        }

        let mut symbols = Vec::with_capacity(alphabet.len());
        let mut digits = [None; 128];

        for ch in alphabet.chars() {
            if !ch.is_ascii_graphic() {
                return Err(SearchError::NonPrintableSymbol(ch));
            }
            let byte = ch as u8;
            let slot = &mut digits[usize::from(byte)];
            if slot.is_some() {
                return Err(SearchError::DuplicateSymbol(ch));
            }
            // At most 94 printable symbols, so the digit fits in a u8.
            *slot = Some(symbols.len() as u8);
            symbols.push(byte);
        }

        Ok(Self { symbols, digits })
    }

    /// Number of symbols (the numeric base).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol for a digit value. `digit` must be below `len()`.
    #[inline]
    pub fn symbol(&self, digit: usize) -> u8 {
        self.symbols[digit]
    }

    /// Digit value of a symbol, or `None` if it is not in the charset.
    #[inline]
    pub fn digit(&self, symbol: u8) -> Option<u8> {
        self.digits.get(usize::from(symbol)).copied().flatten()
    }

    pub fn as_str(&self) -> &str {
        // Every symbol was validated as ASCII on construction.
        std::str::from_utf8(&self.symbols).unwrap_or_default()
    }
}

impl Default for Charset {
    fn default() -> Self {
        let symbols = REFERENCE_ALPHABET.as_bytes().to_vec();
        let mut digits = [None; 128];
        for (digit, &byte) in symbols.iter().enumerate() {
            digits[usize::from(byte)] = Some(digit as u8);
        }
        Self { symbols, digits }
    }
}

impl std::fmt::Display for Charset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Charset {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
