//! Integration tests that drive the compiled binary the way a user would.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn result_json(entries: u64, median_ops: f64) -> String {
    format!(
        r#"{{
            "config": {{"entries": {entries}, "iters": 1000, "runs": 5, "interval_ns": 50000}},
            "summary": {{
                "median_ops_per_sec": {median_ops},
                "min_ops_per_sec": {},
                "max_ops_per_sec": {},
                "stddev_ops_per_sec": 25.0,
                "median_p50_ns": 1500.0,
                "median_p95_ns": 2400.0,
                "median_p99_ns": 3100.0,
                "median_p999_ns": 4800.0
            }},
            "environment": {{"sysname": "Linux", "release": "6.8.0-45-generic", "machine": "x86_64"}}
        }}"#,
        median_ops - 50.0,
        median_ops + 50.0,
    )
}

fn run_tool(work_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gatebench-compare"))
        .args(args)
        .arg("--color")
        .arg("never")
        .arg("--output-dir")
        .arg(work_dir.to_str().unwrap())
        .output()
        .expect("failed to run gatebench-compare")
}

#[test]
fn test_two_valid_inputs_produce_table_csv_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let small = dir.path().join("run_10.json");
    let large = dir.path().join("run_100.json");
    fs::write(&small, result_json(10, 500.0)).unwrap();
    fs::write(&large, result_json(100, 700.0)).unwrap();

    let output = run_tool(dir.path(), &[small.to_str().unwrap(), large.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("GATEBENCH COMPARISON RESULTS"));
    assert!(stdout.contains("Best throughput: 100 entries (700 ops/sec)"));
    assert!(stdout.contains("Worst throughput: 10 entries (500 ops/sec)"));

    let csv_path = dir.path().join("gatebench_comparison.csv");
    let csv_text = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv_text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("entries,iters,runs,"));
    assert!(lines[1].starts_with("10,"));
    assert!(lines[2].starts_with("100,"));
}

#[test]
fn test_malformed_input_is_reported_and_batch_continues() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    let valid = dir.path().join("run_10.json");
    fs::write(&broken, "{not valid json").unwrap();
    fs::write(&valid, result_json(10, 500.0)).unwrap();

    let output = run_tool(dir.path(), &[broken.to_str().unwrap(), valid.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading"));
    assert!(stderr.contains("broken.json"));

    // A single surviving row still gets a table and CSV, but no summary.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("GATEBENCH COMPARISON RESULTS"));
    assert!(!stdout.contains("SUMMARY"));

    let csv_text = fs::read_to_string(dir.path().join("gatebench_comparison.csv")).unwrap();
    assert_eq!(csv_text.lines().count(), 2);
}

#[test]
fn test_zero_valid_inputs_exits_with_failure_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.json");

    let output = run_tool(dir.path(), &[missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does_not_exist.json"));

    assert!(!dir.path().join("gatebench_comparison.csv").exists());
    assert!(!dir.path().join("gatebench_comparison.png").exists());
}

#[test]
fn test_explicit_csv_path_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("run_10.json");
    let report = dir.path().join("custom_report.csv");
    fs::write(&input, result_json(10, 500.0)).unwrap();

    let output = run_tool(dir.path(), &[input.to_str().unwrap(), "--csv", report.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(report.exists());
    assert!(!dir.path().join("gatebench_comparison.csv").exists());
}
