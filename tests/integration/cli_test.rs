use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_hashcrack(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hashcrack"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to execute hashcrack")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr),
            String::from_utf8_lossy(&output.stdout)
        );
    }
}

#[test]
fn test_exact_match_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_hashcrack(&["ab", "1", "2"], dir.path());
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Target: \"ab\""), "Should show the banner");
    assert!(stdout.contains("Keyspace size: 1332 candidates"));
    assert!(stdout.contains("Thread 0: indices 0 to 1332"));
    assert!(stdout.contains("Candidate FOUND: \"ab\""));
    assert!(stdout.contains("EXACT MATCH"));
    assert!(stdout.contains("Total attempts: 408"));

    let report = fs::read_to_string(dir.path().join("performance_log.txt"))
        .expect("Report should be written to the working directory");
    assert!(report.contains("Total attempts: 408"));
    assert!(report.contains("Thread 0:"));
}

#[test]
fn test_not_found_and_custom_report_path() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("custom.txt");
    let output = run_hashcrack(
        &["hello", "3", "2", "--report", report_path.to_str().unwrap()],
        dir.path(),
    );
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NOT FOUND"));
    assert!(stdout.contains("Total attempts: 1332"));
    assert!(report_path.exists());
    assert!(!dir.path().join("performance_log.txt").exists());
}

#[test]
fn test_max_length_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_hashcrack(&["0", "2", "0", "--no-report"], dir.path());
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Maximum length: 1"));
    assert!(stdout.contains("EXACT MATCH"));
    assert!(stderr.contains("clamping"), "Should warn about clamping");
    assert!(!dir.path().join("performance_log.txt").exists());
}

#[test]
fn test_negative_threads_raised_to_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_hashcrack(&["ab", "-3", "2", "--no-report"], dir.path());
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Number of threads: 1"));
    assert!(stdout.contains("Thread 0: indices 0 to 1332"));
    assert!(stdout.contains("EXACT MATCH"));
    assert!(stderr.contains("thread count must be at least 1"));
}

#[test]
fn test_negative_max_length_clamped_to_one() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_hashcrack(&["ab", "1", "-1", "--no-report"], dir.path());
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Maximum length: 1"));
    assert!(stdout.contains("Keyspace size: 36 candidates"));
    assert!(stdout.contains("NOT FOUND"));
    assert!(stderr.contains("clamping"), "Should warn about clamping");
}

#[test]
fn test_non_numeric_threads_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_hashcrack(&["ab", "many", "2"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).is_empty());
}

#[test]
fn test_invalid_charset_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_hashcrack(&["ab", "1", "2", "--charset", "aab"], dir.path());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid --charset"));
}
