//! Human-readable rendering of a search and its persisted performance report.
//!
//! Everything here works on read-only snapshots and has no effect on the
//! search itself.

use crate::error::{Result, SearchError};
use crate::search::config::SearchConfig;
use crate::search::partition::WorkerRange;
use crate::search::result::{MatchKind, SearchOutcome};
use std::fs;
use std::path::Path;

/// Default file the performance report is written to.
pub const DEFAULT_REPORT_PATH: &str = "performance_log.txt";

const RULE: &str = "═══════════════════════════════════════════════════";

fn heading(title: &str) -> String {
    format!("{}\n  {}\n{}\n", RULE, title, RULE)
}

/// Run parameters shown before the search starts, followed by the keyspace
/// size. The caller computes `keyspace_size` from the validated config.
pub fn render_banner(config: &SearchConfig, num_workers: usize, keyspace_size: u64) -> String {
    let mut s = heading("MULTITHREADED KEYSPACE SEARCH");
    s.push_str(&format!("Target: \"{}\"\n", config.target));
    s.push_str(&format!("Target fingerprint: {}\n", config.target_fingerprint()));
    s.push_str(&format!("Number of threads: {}\n", num_workers));
    s.push_str(&format!("Maximum length: {}\n", config.max_length));
    s.push_str(&format!(
        "Character set: {} ({} characters)\n",
        config.charset,
        config.charset.len()
    ));
    s.push_str(RULE);
    s.push_str("\n\n");
    s.push_str(&format!("Keyspace size: {} candidates\n", keyspace_size));
    s.push_str(&format!(
        "  (all candidates from length 1 to {})\n",
        config.max_length
    ));
    s
}

/// One line per worker range.
pub fn render_partition(ranges: &[WorkerRange]) -> String {
    let mut s = String::from("Keyspace partitioning:\n");
    for (i, range) in ranges.iter().enumerate() {
        s.push_str(&format!(
            "  Thread {}: indices {} to {} ({} candidates)\n",
            i,
            range.start,
            range.end,
            range.len()
        ));
    }
    s
}

/// Final result and performance summary for the console.
pub fn render_summary(outcome: &SearchOutcome) -> String {
    let mut s = heading("RESULTS");

    match (outcome.match_kind(), outcome.found.as_deref()) {
        (MatchKind::NotFound, _) | (_, None) => {
            s.push_str("✗ Target NOT FOUND in searched keyspace\n");
            s.push_str(&format!(
                "  (Target may be longer than max length={})\n",
                outcome.max_length
            ));
        }
        (kind, Some(found)) => {
            s.push_str(&format!("✓ Candidate FOUND: \"{}\"\n", found));
            s.push_str(&format!("  Expected: \"{}\"\n", outcome.target));
            if kind == MatchKind::Exact {
                s.push_str("  Status: EXACT MATCH ✓\n");
            } else {
                s.push_str("  Status: Hash collision (different string, same fingerprint)\n");
            }
        }
    }

    s.push_str("\nPerformance summary:\n");
    s.push_str(&format!("  Total attempts: {}\n", outcome.total_attempts));
    s.push_str(&format!(
        "  Total time: {:.3} seconds\n",
        outcome.elapsed.as_secs_f64()
    ));
    if let Some(throughput) = outcome.throughput() {
        s.push_str(&format!("  Throughput: {:.2} attempts/sec\n", throughput));
    }
    s
}

/// Contents of the persisted performance report.
pub fn render_report(outcome: &SearchOutcome) -> String {
    let mut s = heading("KEYSPACE SEARCH PERFORMANCE REPORT");
    s.push('\n');
    s.push_str(&format!(
        "Target: \"{}\" (fingerprint {})\n",
        outcome.target, outcome.target_fingerprint
    ));
    s.push_str(&format!(
        "Keyspace: {} candidates over \"{}\", length 1 to {}\n",
        outcome.keyspace_size, outcome.charset, outcome.max_length
    ));
    s.push_str(&format!("Result: {}\n\n", outcome.match_kind()));
    s.push_str(&format!(
        "Total search duration: {:.3} seconds\n\n",
        outcome.elapsed.as_secs_f64()
    ));

    s.push_str("Throughput metrics:\n");
    s.push_str(&format!("  Total attempts: {}\n", outcome.total_attempts));
    match outcome.throughput() {
        Some(throughput) => s.push_str(&format!(
            "  Attempts per second: {:.2} attempts/sec\n\n",
            throughput
        )),
        None => s.push_str("  Attempts per second: N/A (duration too short)\n\n"),
    }

    s.push_str("Thread performance:\n");
    for worker in &outcome.workers {
        s.push_str(&format!("  Thread {}:\n", worker.worker_id));
        s.push_str(&format!("    Range: {}\n", worker.range));
        s.push_str(&format!("    Attempts: {}\n", worker.attempts));
        s.push_str(&format!(
            "    Time: {:.2} seconds\n",
            worker.elapsed.as_secs_f64()
        ));
        if let Some(speed) = worker.throughput() {
            s.push_str(&format!("    Speed: {:.2} attempts/sec\n", speed));
        }
        s.push_str(&format!("    State: {}\n", worker.state));
        s.push('\n');
    }

    s.push_str(RULE);
    s.push('\n');
    s
}

/// Write the performance report to `path`, replacing any existing file.
pub fn write_report(outcome: &SearchOutcome, path: &Path) -> Result<()> {
    fs::write(path, render_report(outcome)).map_err(|source| SearchError::Report {
        path: path.to_path_buf(),
        source,
    })
}
