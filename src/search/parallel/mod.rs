//! Parallel search execution over a partitioned keyspace.
//!
//! # Architecture
//!
//! The parallel search system consists of:
//! - A **coordinator** that spawns one thread per partition range, logs
//!   worker events and joins every worker before building the outcome
//! - Multiple **workers** that enumerate their range and stop early once
//!   any worker has claimed a match
//! - A **channel** carrying worker lifecycle events to the coordinator
//! - A **search context** holding the exactly-once found claim, the shared
//!   attempt counter and per-worker metrics
//!
//! # Example
//!
//! ```no_run
//! use hashcrack::search::{ParallelConfig, SearchConfig, run_parallel_search};
//!
//! let search = SearchConfig::new("ab").with_max_length(2);
//! let parallel = ParallelConfig::default().with_workers(4);
//!
//! let outcome = run_parallel_search(&search, &parallel)?;
//! assert_eq!(outcome.found.as_deref(), Some("ab"));
//! # Ok::<(), hashcrack::SearchError>(())
//! ```

pub mod channel;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod worker;

pub use config::ParallelConfig;
pub use context::{Claim, SearchContext};
pub use coordinator::run_parallel_search;
pub use worker::Worker;
