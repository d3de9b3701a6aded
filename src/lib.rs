//! Parallel brute-force search for a string with a given 32-bit fingerprint.
//!
//! Candidates of length `1..=max_length` over a charset are numbered by a
//! bijective index ([`keyspace`]), the index space is partitioned across a
//! fixed pool of worker threads ([`search`]), and the first candidate whose
//! [`fingerprint`] equals the target's is recorded exactly once.

pub mod error;
pub mod fingerprint;
pub mod keyspace;
pub mod report;
pub mod search;

pub use error::{Result, SearchError};
pub use fingerprint::{Fingerprint, fingerprint};
pub use keyspace::{Charset, Keyspace, REFERENCE_ALPHABET};
pub use search::{
    MatchKind, ParallelConfig, SearchConfig, SearchOutcome, WorkerMetrics, run_parallel_search,
};
