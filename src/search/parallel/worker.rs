//! The per-worker search loop.

use crate::error::{Result, SearchError};
use crate::fingerprint::fingerprint;
use crate::keyspace::Keyspace;
use crate::search::parallel::channel::WorkerMessage;
use crate::search::parallel::context::{Claim, SearchContext};
use crate::search::partition::WorkerRange;
use crate::search::result::{WorkerMetrics, WorkerState};
use crossbeam_channel::Sender;
use std::time::Instant;
use tracing::trace;

/// One worker bound to a range of the keyspace.
pub struct Worker<'a> {
    id: usize,
    range: WorkerRange,
    keyspace: &'a Keyspace,
    context: &'a SearchContext,
    batch_size: u64,
}

impl<'a> Worker<'a> {
    pub fn new(
        id: usize,
        range: WorkerRange,
        keyspace: &'a Keyspace,
        context: &'a SearchContext,
        batch_size: u64,
    ) -> Self {
        Self {
            id,
            range,
            keyspace,
            context,
            batch_size: batch_size.max(1),
        }
    }

    /// Search the range in increasing index order until a match is claimed
    /// (here or by another worker) or the range runs out.
    ///
    /// The found flag is checked before every candidate. Attempts are added
    /// to the shared total every `batch_size` candidates and once more on
    /// exit. The returned metrics are also recorded in the context.
    ///
    /// Send failures on `events` are ignored; the coordinator only uses them
    /// for logging.
    pub fn run(&self, events: &Sender<WorkerMessage>) -> Result<WorkerMetrics> {
        let started = Instant::now();
        let _ = events.send(WorkerMessage::Started {
            worker_id: self.id,
            range: self.range,
        });

        let target = self.context.target();
        let mut attempts: u64 = 0;
        let mut unflushed: u64 = 0;
        let mut state = WorkerState::Exhausted;
        let mut buf = Vec::with_capacity(self.keyspace.max_length());

        for index in self.range.indices() {
            if self.context.is_found() {
                state = WorkerState::FoundElsewhere;
                break;
            }

            let Some(candidate) = self.keyspace.decode_into(index, &mut buf) else {
                self.context.add_attempts(unflushed);
                let err = SearchError::IndexOutOfRange {
                    worker_id: self.id,
                    index,
                    size: self.keyspace.size(),
                };
                let _ = events.send(WorkerMessage::Failed {
                    worker_id: self.id,
                    message: err.to_string(),
                });
                return Err(err);
            };

            attempts += 1;
            unflushed += 1;

            if fingerprint(candidate) == target {
                let candidate = String::from_utf8_lossy(candidate).into_owned();
                let claim = self.context.try_claim(&candidate);
                self.context.add_attempts(unflushed);
                unflushed = 0;

                state = match claim {
                    Claim::Won => {
                        let _ = events.send(WorkerMessage::Matched {
                            worker_id: self.id,
                            candidate,
                            attempts,
                        });
                        WorkerState::Found
                    }
                    Claim::Lost => WorkerState::FoundElsewhere,
                };
                break;
            }

            if unflushed >= self.batch_size {
                self.context.add_attempts(unflushed);
                unflushed = 0;
                trace!(worker_id = self.id, index, "flushed attempt batch");
            }
        }

        self.context.add_attempts(unflushed);

        let metrics = WorkerMetrics {
            worker_id: self.id,
            range: self.range,
            attempts,
            elapsed: started.elapsed(),
            state,
        };
        self.context.record_worker(metrics.clone());
        let _ = events.send(WorkerMessage::Finished(metrics.clone()));

        Ok(metrics)
    }
}
