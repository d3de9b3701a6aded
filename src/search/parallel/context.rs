//! State shared by all workers of one search run.

use crate::fingerprint::Fingerprint;
use crate::search::result::WorkerMetrics;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Result of trying to record a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// This caller recorded the result.
    Won,
    /// A result was already recorded.
    Lost,
}

/// Shared state for one search run.
///
/// The found flag is set at most once and never cleared. It is only
/// written while `found_candidate` is locked, after the candidate has been
/// stored, and with release ordering. A worker that observes the flag with
/// [`SearchContext::is_found`] therefore also observes the candidate.
#[derive(Debug)]
pub struct SearchContext {
    target: Fingerprint,
    found: AtomicBool,
    found_candidate: Mutex<Option<String>>,
    total_attempts: AtomicU64,
    metrics: Mutex<Vec<WorkerMetrics>>,
}

impl SearchContext {
    pub fn new(target: Fingerprint, num_workers: usize) -> Self {
        Self {
            target,
            found: AtomicBool::new(false),
            found_candidate: Mutex::new(None),
            total_attempts: AtomicU64::new(0),
            metrics: Mutex::new(Vec::with_capacity(num_workers)),
        }
    }

    /// Fingerprint every candidate is compared against.
    #[inline]
    pub fn target(&self) -> Fingerprint {
        self.target
    }

    /// Whether any worker has claimed a match.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::Acquire)
    }

    /// Try to record `candidate` as the result. First caller wins.
    pub fn try_claim(&self, candidate: &str) -> Claim {
        let mut slot = self.found_candidate.lock();
        if self.found.load(Ordering::Relaxed) {
            return Claim::Lost;
        }
        *slot = Some(candidate.to_owned());
        self.found.store(true, Ordering::Release);
        Claim::Won
    }

    /// The claimed candidate, if any.
    pub fn found_candidate(&self) -> Option<String> {
        self.found_candidate.lock().clone()
    }

    /// Add a batch of locally counted attempts to the shared total.
    #[inline]
    pub fn add_attempts(&self, attempts: u64) {
        if attempts > 0 {
            self.total_attempts.fetch_add(attempts, Ordering::Relaxed);
        }
    }

    /// Attempts flushed so far. Exact once every worker has stopped.
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts.load(Ordering::Relaxed)
    }

    /// Append a stopped worker's metrics.
    pub fn record_worker(&self, metrics: WorkerMetrics) {
        self.metrics.lock().push(metrics);
    }

    /// Recorded worker metrics, sorted by worker id.
    pub fn worker_metrics(&self) -> Vec<WorkerMetrics> {
        let mut metrics = self.metrics.lock().clone();
        metrics.sort_by_key(|m| m.worker_id);
        metrics
    }
}
