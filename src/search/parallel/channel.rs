//! Worker lifecycle events sent to the coordinator.

use crate::search::partition::WorkerRange;
use crate::search::result::WorkerMetrics;
use crossbeam_channel::{Receiver, Sender, unbounded};

/// Message sent from a worker to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Worker is about to search its range.
    Started { worker_id: usize, range: WorkerRange },
    /// Worker matched the target fingerprint and won the claim.
    Matched {
        worker_id: usize,
        candidate: String,
        attempts: u64,
    },
    /// Worker reached a terminal state.
    Finished(WorkerMetrics),
    /// Worker hit an internal invariant violation.
    Failed { worker_id: usize, message: String },
}

impl WorkerMessage {
    /// True for messages that end a worker's lifecycle.
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkerMessage::Finished(_) | WorkerMessage::Failed { .. })
    }
}

/// Create the worker-to-coordinator channel.
///
/// Returns the coordinator's receiver and one sender per worker. The channel
/// is unbounded so workers never block on it.
pub fn create_channels(num_workers: usize) -> (Receiver<WorkerMessage>, Vec<Sender<WorkerMessage>>) {
    let (tx, rx) = unbounded();
    let senders = (0..num_workers).map(|_| tx.clone()).collect();
    (rx, senders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::result::WorkerState;
    use crossbeam_channel::TryRecvError;
    use std::time::Duration;

    #[test]
    fn test_create_channels() {
        let (rx, senders) = create_channels(4);
        assert_eq!(senders.len(), 4);

        senders[2]
            .send(WorkerMessage::Started {
                worker_id: 2,
                range: WorkerRange::new(10, 20),
            })
            .unwrap();

        match rx.recv().unwrap() {
            WorkerMessage::Started { worker_id, range } => {
                assert_eq!(worker_id, 2);
                assert_eq!(range.len(), 10);
            }
            other => panic!("Unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_disconnects_when_workers_drop() {
        let (rx, senders) = create_channels(2);
        drop(senders);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[test]
    fn test_terminal_messages() {
        let finished = WorkerMessage::Finished(WorkerMetrics {
            worker_id: 0,
            range: WorkerRange::default(),
            attempts: 0,
            elapsed: Duration::ZERO,
            state: WorkerState::Exhausted,
        });
        let failed = WorkerMessage::Failed {
            worker_id: 0,
            message: "boom".into(),
        };
        let matched = WorkerMessage::Matched {
            worker_id: 0,
            candidate: "ab".into(),
            attempts: 408,
        };

        assert!(finished.is_terminal());
        assert!(failed.is_terminal());
        assert!(!matched.is_terminal());
    }
}
