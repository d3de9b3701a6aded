//! Exhaustive keyspace search
//!
//! The keyspace is split into contiguous per-worker ranges by
//! [`partition`], and each range is searched by one thread in [`parallel`].
//! The first worker whose candidate fingerprint matches the target claims
//! the result; every other worker stops at its next candidate.

pub mod config;
pub mod parallel;
pub mod partition;
pub mod result;

pub use config::{DEFAULT_BATCH_SIZE, MAX_SUPPORTED_LENGTH, SearchConfig, clamp_max_length};
pub use parallel::{ParallelConfig, run_parallel_search};
pub use partition::{WorkerRange, partition};
pub use result::{MatchKind, SearchOutcome, WorkerMetrics, WorkerState};
