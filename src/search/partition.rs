//! Splitting the index space into per-worker ranges.

use std::ops::Range;

/// Half-open range of keyspace indices assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkerRange {
    /// First index (inclusive).
    pub start: u64,
    /// One past the last index.
    pub end: u64,
}

impl WorkerRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of indices in the range.
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Indices of the range in increasing order.
    pub fn indices(&self) -> Range<u64> {
        self.start..self.end
    }
}

impl std::fmt::Display for WorkerRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Partition `[0, total)` into `workers` contiguous ranges.
///
/// Every range gets `total / workers` indices and the last one also takes
/// the remainder. When `total < workers` the leading ranges are empty.
/// A worker count of zero is treated as one.
pub fn partition(total: u64, workers: usize) -> Vec<WorkerRange> {
    let workers = workers.max(1) as u64;
    let base = total / workers;
    let remainder = total % workers;

    (0..workers)
        .map(|i| {
            let start = i * base;
            let mut end = (i + 1) * base;
            if i == workers - 1 {
                end += remainder;
            }
            WorkerRange::new(start, end)
        })
        .collect()
}
