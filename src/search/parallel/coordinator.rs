//! Fork-join coordinator for a parallel keyspace search.

use crate::error::{Result, SearchError};
use crate::search::config::SearchConfig;
use crate::search::parallel::channel::{WorkerMessage, create_channels};
use crate::search::parallel::config::ParallelConfig;
use crate::search::parallel::context::SearchContext;
use crate::search::parallel::worker::Worker;
use crate::search::partition::partition;
use crate::search::result::{SearchOutcome, WorkerMetrics};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Run a parallel search with the given configuration.
///
/// Spawns one thread per partition range, logs worker events and progress
/// until every worker has stopped, then joins all of them before building
/// the outcome. Threads are joined even when a later spawn fails.
pub fn run_parallel_search(
    search_config: &SearchConfig,
    parallel_config: &ParallelConfig,
) -> Result<SearchOutcome> {
    let keyspace = Arc::new(search_config.keyspace()?);
    let target = search_config.target_fingerprint();
    let num_workers = parallel_config.num_workers.max(1);
    let ranges = partition(keyspace.size(), num_workers);

    debug!(
        target_fingerprint = target,
        keyspace_size = keyspace.size(),
        num_workers,
        "starting search"
    );

    let context = Arc::new(SearchContext::new(target, num_workers));
    let (events, senders) = create_channels(num_workers);
    let batch_size = search_config.batch_size;

    let start_time = Instant::now();
    let mut handles = Vec::with_capacity(num_workers);
    let mut spawn_error = None;

    for (worker_id, (range, tx)) in ranges.iter().copied().zip(senders).enumerate() {
        let keyspace = Arc::clone(&keyspace);
        let context = Arc::clone(&context);

        let spawned = thread::Builder::new()
            .name(format!("worker-{}", worker_id))
            .spawn(move || {
                let worker = Worker::new(worker_id, range, &keyspace, &context, batch_size);
                worker.run(&tx)
            });

        match spawned {
            Ok(handle) => handles.push((worker_id, handle)),
            Err(source) => {
                error!(worker_id, %source, "failed to spawn worker");
                spawn_error = Some(SearchError::Spawn { worker_id, source });
                break;
            }
        }
    }

    monitor_workers(
        &events,
        &context,
        handles.len(),
        parallel_config.progress_interval,
    );

    let first_error = join_workers(handles, spawn_error);
    let elapsed = start_time.elapsed();

    if let Some(err) = first_error {
        return Err(err);
    }

    Ok(SearchOutcome {
        target: search_config.target.clone(),
        target_fingerprint: target,
        charset: keyspace.charset().to_string(),
        max_length: keyspace.max_length(),
        keyspace_size: keyspace.size(),
        ranges,
        found: context.found_candidate(),
        total_attempts: context.total_attempts(),
        elapsed,
        workers: context.worker_metrics(),
    })
}

/// Join every handle, keeping the first error seen. A panic becomes
/// `WorkerPanicked`.
fn join_workers(
    handles: Vec<(usize, JoinHandle<Result<WorkerMetrics>>)>,
    mut first_error: Option<SearchError>,
) -> Option<SearchError> {
    for (worker_id, handle) in handles {
        match handle.join() {
            Ok(Ok(_)) => {}
            Ok(Err(err)) => {
                first_error.get_or_insert(err);
            }
            Err(_) => {
                error!(worker_id, "worker panicked");
                first_error.get_or_insert(SearchError::WorkerPanicked(worker_id));
            }
        }
    }
    first_error
}

/// Log worker events until `expected` workers have stopped or every sender
/// is gone. Logs the live attempt total whenever no event arrives within
/// `interval`. Returns how many terminal events were seen.
fn monitor_workers(
    events: &Receiver<WorkerMessage>,
    context: &SearchContext,
    expected: usize,
    interval: Duration,
) -> usize {
    let mut stopped = 0;

    while stopped < expected {
        match events.recv_timeout(interval) {
            Ok(msg) => {
                if msg.is_terminal() {
                    stopped += 1;
                }
                log_event(msg);
            }
            Err(RecvTimeoutError::Timeout) => {
                debug!(
                    total_attempts = context.total_attempts(),
                    found = context.is_found(),
                    "progress"
                );
            }
            // A panicking worker drops its sender without a terminal event.
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    stopped
}

fn log_event(msg: WorkerMessage) {
    match msg {
        WorkerMessage::Started { worker_id, range } => {
            debug!(worker_id, %range, "worker starting");
        }
        WorkerMessage::Matched {
            worker_id,
            candidate,
            attempts,
        } => {
            info!(worker_id, %candidate, attempts, "found matching candidate");
        }
        WorkerMessage::Finished(metrics) => {
            info!(
                worker_id = metrics.worker_id,
                attempts = metrics.attempts,
                elapsed_secs = metrics.elapsed.as_secs_f64(),
                state = %metrics.state,
                "worker completed"
            );
        }
        WorkerMessage::Failed { worker_id, message } => {
            error!(worker_id, %message, "worker failed");
        }
    }
}
