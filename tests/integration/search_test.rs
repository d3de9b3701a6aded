use hashcrack::search::{WorkerState, partition};
use hashcrack::{Charset, MatchKind, ParallelConfig, SearchConfig, SearchOutcome, run_parallel_search};
use std::time::Duration;

fn search(target: &str, max_length: usize, workers: usize) -> SearchOutcome {
    let search_config = SearchConfig::new(target).with_max_length(max_length);
    let parallel_config = ParallelConfig::default()
        .with_workers(workers)
        .with_progress_interval(Duration::from_millis(20));
    run_parallel_search(&search_config, &parallel_config).expect("search should complete")
}

#[test]
fn test_reference_example_single_worker() {
    let outcome = search("ab", 2, 1);

    assert_eq!(outcome.keyspace_size, 1332);
    assert_eq!(outcome.found.as_deref(), Some("ab"));
    assert_eq!(outcome.match_kind(), MatchKind::Exact);
    // "ab" is at index 407.
    assert_eq!(outcome.total_attempts, 408);
}

#[test]
fn test_outcome_independent_of_worker_count() {
    for target in ["ab", "zz", "7", "q0"] {
        let baseline = search(target, 2, 1);
        for workers in [2, 3, 8] {
            let outcome = search(target, 2, workers);
            assert_eq!(
                outcome.found, baseline.found,
                "target {:?} with {} workers",
                target, workers
            );
            assert!(outcome.total_attempts <= outcome.keyspace_size);
        }
    }
}

#[test]
fn test_exhaustion_attempts_equal_keyspace() {
    for workers in [1, 2, 8] {
        let outcome = search("hello", 3, workers);
        assert_eq!(outcome.match_kind(), MatchKind::NotFound);
        assert_eq!(outcome.total_attempts, 47_988);
        assert_eq!(outcome.workers.len(), workers);
        let per_worker: u64 = outcome.workers.iter().map(|w| w.attempts).sum();
        assert_eq!(per_worker, outcome.total_attempts);
    }
}

#[test]
fn test_collision_reported_distinctly() {
    let outcome = search("b[", 2, 4);
    assert_eq!(outcome.found.as_deref(), Some("az"));
    assert_eq!(outcome.match_kind(), MatchKind::Collision);
}

#[test]
fn test_default_target_with_colliding_candidates() {
    // "test", "teu6", "tg5t" and "tg76" share a fingerprint and all fall in
    // the last of four ranges, so the first in index order wins.
    let outcome = search("tg76", 4, 4);
    assert_eq!(outcome.found.as_deref(), Some("test"));
    assert_eq!(outcome.match_kind(), MatchKind::Collision);
}

#[test]
fn test_every_worker_reports_once() {
    let outcome = search("ab", 2, 6);

    let ids: Vec<usize> = outcome.workers.iter().map(|w| w.worker_id).collect();
    assert_eq!(ids, (0..6).collect::<Vec<_>>());
    assert_eq!(outcome.ranges, partition(1332, 6));

    let winners = outcome
        .workers
        .iter()
        .filter(|w| w.state == WorkerState::Found)
        .count();
    assert_eq!(winners, 1);
}

#[test]
fn test_idle_workers_with_tiny_keyspace() {
    let search_config = SearchConfig::new("1")
        .with_charset(Charset::new("01").unwrap())
        .with_max_length(1);
    let parallel_config = ParallelConfig::default().with_workers(8);

    let outcome = run_parallel_search(&search_config, &parallel_config).unwrap();

    assert_eq!(outcome.found.as_deref(), Some("1"));
    assert_eq!(outcome.total_attempts, 2);
    for worker in outcome.workers.iter().filter(|w| w.range.is_empty()) {
        assert_eq!(worker.attempts, 0);
        assert_eq!(worker.state, WorkerState::Exhausted);
    }
}
