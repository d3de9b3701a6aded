//! Error types for keyspace construction and search execution.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("charset must contain at least one symbol")]
    EmptyCharset,

    #[error("charset symbol {0:?} appears more than once")]
    DuplicateSymbol(char),

    #[error("charset symbol {0:?} is not printable ASCII")]
    NonPrintableSymbol(char),

    #[error("maximum candidate length must be at least 1")]
    ZeroLength,

    #[error("keyspace for a {base}-symbol charset up to length {max_length} does not fit in 64 bits")]
    KeyspaceOverflow { base: usize, max_length: usize },

    /// A worker decoded an index outside the keyspace. Only a broken
    /// partition can cause this, so the run is abandoned.
    #[error("worker {worker_id} reached index {index} outside keyspace of size {size}")]
    IndexOutOfRange {
        worker_id: usize,
        index: u64,
        size: u64,
    },

    #[error("failed to spawn worker {worker_id}: {source}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("worker {0} panicked")]
    WorkerPanicked(usize),

    #[error("failed to write report to {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SearchError>;
