//! E2E CLI tests for `selsort sort`, `selsort select`, and `selsort check`.
//!
//! Each test runs the `selsort` binary as a subprocess. Tests cover text,
//! pretty, and `--format json` output plus exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the `selsort` binary with text output.
fn selsort_cmd() -> Command {
    let mut cmd = Command::cargo_bin("selsort").expect("selsort binary must exist");
    // Suppress tracing output that goes to stderr.
    cmd.env("SELSORT_LOG", "error");
    cmd.env("SELSORT_FORMAT", "text");
    cmd
}

/// Run a command with `--format json` and parse stdout.
fn run_json(args: &[&str]) -> Value {
    let output = selsort_cmd()
        .args(args)
        .args(["--format", "json"])
        .output()
        .expect("command should not crash");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("--format json should produce valid JSON")
}

fn as_u64_vec(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|v| v.as_u64().expect("natural"))
        .collect()
}

// ---------------------------------------------------------------------------
// sort
// ---------------------------------------------------------------------------

#[test]
fn sort_known_example_text() {
    selsort_cmd()
        .args(["sort", "3,1,4,1,5,9,2,6,5,3,5"])
        .assert()
        .success()
        .stdout("output=[1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9] strategy=measured dropped=0\n");
}

#[test]
fn sort_empty_sequence() {
    selsort_cmd()
        .args(["sort", "[]"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("output=[] "));
}

#[test]
fn sort_json_reports_oracles() {
    let json = run_json(&["sort", "3 1 4 1 5"]);
    assert_eq!(as_u64_vec(&json["output"]), vec![1, 1, 3, 4, 5]);
    assert_eq!(json["strategy"], "measured");
    assert_eq!(json["fuel"], Value::Null);
    assert_eq!(json["sorted"], true);
    assert_eq!(json["permutation"], true);
}

#[test]
fn sort_exact_fuel_matches_measured() {
    let measured = run_json(&["sort", "8,0,8,3,7,7,1"]);
    let fueled = run_json(&["sort", "8,0,8,3,7,7,1", "--strategy", "exact-fuel"]);
    assert_eq!(measured["output"], fueled["output"]);
    assert_eq!(fueled["fuel"], 7);
}

#[test]
fn sort_under_fuelled_drops_elements() {
    let json = run_json(&["sort", "3,1,4,1,5", "--strategy", "fuel:3"]);
    assert_eq!(as_u64_vec(&json["output"]), vec![1, 1, 3]);
    assert_eq!(json["dropped"], 2);
    assert_eq!(json["sorted"], true);
    assert_eq!(json["permutation"], false);
}

#[test]
fn sort_under_fuelled_still_exits_zero() {
    selsort_cmd()
        .args(["sort", "3,1,4,1,5", "--strategy", "fuel:3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dropped=2"));
}

#[test]
fn sort_surplus_fuel_is_harmless() {
    let json = run_json(&["sort", "3,1,4,1,5,9,2,6,5,3,5", "--strategy", "fuel:50"]);
    assert_eq!(
        as_u64_vec(&json["output"]),
        vec![1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9]
    );
    assert_eq!(json["dropped"], 0);
}

#[test]
fn sort_pretty_output_has_sections() {
    selsort_cmd()
        .args(["sort", "2,1", "--format", "pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection Sort"))
        .stdout(predicate::str::contains("Output:      [1, 2]"));
}

#[test]
fn verbose_flag_accepted_after_subcommand() {
    selsort_cmd()
        .args(["sort", "3,1", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("output=[1, 3] "));
}

#[test]
fn verbose_flag_accepted_before_subcommand() {
    selsort_cmd()
        .args(["--verbose", "check", "1,2"])
        .assert()
        .success()
        .stdout("sorted=true\n");
}

#[test]
fn sort_rejects_bad_sequence() {
    selsort_cmd()
        .args(["sort", "1,two,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a natural number"));
}

#[test]
fn sort_rejects_bad_strategy() {
    selsort_cmd()
        .args(["sort", "1,2", "--strategy", "bogo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid strategy"));
}

// ---------------------------------------------------------------------------
// select
// ---------------------------------------------------------------------------

#[test]
fn select_text() {
    selsort_cmd()
        .args(["select", "3", "1,4,1,5"])
        .assert()
        .success()
        .stdout("minimum=1 remainder=[3, 4, 1, 5]\n");
}

#[test]
fn select_without_sequence_returns_candidate() {
    let json = run_json(&["select", "7"]);
    assert_eq!(json["minimum"], 7);
    assert!(json["remainder"].as_array().expect("array").is_empty());
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_sorted_passes() {
    selsort_cmd()
        .args(["check", "1,1,3,4,5"])
        .assert()
        .success()
        .stdout("sorted=true\n");
}

#[test]
fn check_unsorted_exits_one() {
    selsort_cmd()
        .args(["check", "1,3,2"])
        .assert()
        .code(1)
        .stdout("sorted=false first_descent=1\n");
}

#[test]
fn check_against_detects_short_output() {
    selsort_cmd()
        .args(["check", "1,1,3", "--against", "3,1,4,1,5"])
        .assert()
        .code(1)
        .stdout("sorted=true permutation=false missing=[4, 5] extra=[]\n");
}

#[test]
fn check_against_accepts_full_sort() {
    let json = run_json(&["check", "1,1,3,4,5", "--against", "3,1,4,1,5"]);
    assert_eq!(json["sorted"], true);
    assert_eq!(json["permutation"], true);
}

// ---------------------------------------------------------------------------
// completions
// ---------------------------------------------------------------------------

#[test]
fn completions_bash() {
    selsort_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("selsort"));
}
