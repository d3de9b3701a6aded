//! Search outcome types and metrics

use crate::fingerprint::Fingerprint;
use crate::search::partition::WorkerRange;
use std::time::Duration;

/// Durations below this are too short to derive a meaningful rate from.
pub const MIN_MEASURABLE_DURATION: Duration = Duration::from_millis(1);

/// Attempts per second over `elapsed`, or `None` if `elapsed` is too short.
pub fn rate(attempts: u64, elapsed: Duration) -> Option<f64> {
    if elapsed < MIN_MEASURABLE_DURATION {
        None
    } else {
        Some(attempts as f64 / elapsed.as_secs_f64())
    }
}

/// Terminal state of one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// This worker matched and won the claim.
    Found,
    /// Another worker's match stopped this one.
    FoundElsewhere,
    /// The whole range was searched without a match.
    Exhausted,
}

impl std::fmt::Display for WorkerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkerState::Found => write!(f, "found"),
            WorkerState::FoundElsewhere => write!(f, "found elsewhere"),
            WorkerState::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// Metrics one worker records when it stops.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerMetrics {
    pub worker_id: usize,
    pub range: WorkerRange,
    /// Candidates fingerprinted by this worker
    pub attempts: u64,
    /// Wall time from worker start to stop
    pub elapsed: Duration,
    pub state: WorkerState,
}

impl WorkerMetrics {
    /// Attempts per second for this worker.
    pub fn throughput(&self) -> Option<f64> {
        rate(self.attempts, self.elapsed)
    }
}

/// How the found candidate relates to the original target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The candidate is the target string itself.
    Exact,
    /// A different string with the same fingerprint.
    Collision,
    /// The keyspace was exhausted.
    NotFound,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Exact => write!(f, "exact match"),
            MatchKind::Collision => write!(f, "hash collision"),
            MatchKind::NotFound => write!(f, "not found"),
        }
    }
}

/// Read-only snapshot of a finished search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub target: String,
    pub target_fingerprint: Fingerprint,
    pub charset: String,
    pub max_length: usize,
    pub keyspace_size: u64,
    /// The range assigned to each worker, indexed by worker id
    pub ranges: Vec<WorkerRange>,
    /// Candidate that won the claim, if any
    pub found: Option<String>,
    pub total_attempts: u64,
    /// Wall-clock time from the first spawn to the last join
    pub elapsed: Duration,
    /// Per-worker metrics, sorted by worker id
    pub workers: Vec<WorkerMetrics>,
}

impl SearchOutcome {
    pub fn match_kind(&self) -> MatchKind {
        match self.found.as_deref() {
            Some(candidate) if candidate == self.target => MatchKind::Exact,
            Some(_) => MatchKind::Collision,
            None => MatchKind::NotFound,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }

    /// Aggregate attempts per second over the whole run.
    pub fn throughput(&self) -> Option<f64> {
        rate(self.total_attempts, self.elapsed)
    }
}
