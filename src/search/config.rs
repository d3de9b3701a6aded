//! Configuration types for a keyspace search

use crate::error::Result;
use crate::fingerprint::{Fingerprint, fingerprint};
use crate::keyspace::{Charset, Keyspace};

/// Longest candidate length the CLI accepts.
pub const MAX_SUPPORTED_LENGTH: usize = 8;

/// Attempts a worker accumulates locally before adding them to the shared
/// total.
pub const DEFAULT_BATCH_SIZE: u64 = 50_000;

/// Clamp a requested maximum length into `1..=MAX_SUPPORTED_LENGTH`.
pub fn clamp_max_length(requested: usize) -> usize {
    requested.clamp(1, MAX_SUPPORTED_LENGTH)
}

/// What to search for and over which keyspace.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// String whose fingerprint is the search target
    pub target: String,
    /// Alphabet candidates are built from
    pub charset: Charset,
    /// Longest candidate enumerated
    pub max_length: usize,
    /// Local attempts between flushes into the shared counter
    pub batch_size: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target: String::from("test"),
            charset: Charset::default(),
            max_length: 4,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl SearchConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the flush batch size (at least 1).
    pub fn with_batch_size(mut self, batch_size: u64) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Fingerprint every candidate is compared against.
    pub fn target_fingerprint(&self) -> Fingerprint {
        fingerprint(self.target.as_bytes())
    }

    /// Build the keyspace this configuration enumerates.
    pub fn keyspace(&self) -> Result<Keyspace> {
        Keyspace::new(self.charset.clone(), self.max_length)
    }
}
