//! E2E CLI tests for `selsort campaign run` and `selsort campaign replay`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn selsort_cmd() -> Command {
    let mut cmd = Command::cargo_bin("selsort").expect("selsort binary must exist");
    cmd.env("SELSORT_LOG", "error");
    cmd.env("SELSORT_FORMAT", "text");
    cmd
}

#[test]
fn measured_campaign_passes() {
    let output = selsort_cmd()
        .args(["campaign", "run", "--seeds", "40", "--format", "json"])
        .output()
        .expect("campaign should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["seeds_run"], 40);
    assert_eq!(json["seeds_passed"], 40);
    assert_eq!(json["all_passed"], true);
    assert_eq!(json["elements_dropped"], 0);
}

#[test]
fn exact_fuel_campaign_passes_text() {
    selsort_cmd()
        .args(["campaign", "run", "--seeds", "20", "--strategy", "exact-fuel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all_passed=true"));
}

#[test]
fn under_fuelled_campaign_fails_with_replay_hint() {
    selsort_cmd()
        .args([
            "campaign",
            "run",
            "--seeds",
            "30",
            "--max-len",
            "20",
            "--strategy",
            "fuel:2",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("all_passed=false"))
        .stdout(predicate::str::contains("hint replay_seed="));
}

#[test]
fn replay_measured_seed() {
    let output = selsort_cmd()
        .args(["campaign", "replay", "--seed", "42", "--format", "json"])
        .output()
        .expect("replay should not crash");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["seed"], 42);
    assert_eq!(json["oracle_passed"], true);
    assert_eq!(
        json["input"].as_array().expect("array").len(),
        json["output"].as_array().expect("array").len()
    );
}

#[test]
fn replay_zero_fuel_reports_permutation_violation() {
    // Generated lengths may be zero, so both outcomes are checked.
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("campaign.toml");
    fs::write(&path, "max_len = 6\nvalue_bound = 4\nstrategy = \"fuel:0\"\n").expect("write");

    let output = selsort_cmd()
        .args(["campaign", "replay", "--seed", "1", "--config"])
        .arg(&path)
        .output()
        .expect("replay should not crash");
    let stdout = String::from_utf8_lossy(&output.stdout);

    if stdout.contains("input=[] ") {
        // Empty input: zero fuel is harmless.
        assert!(output.status.success());
    } else {
        assert_eq!(output.status.code(), Some(1));
        assert!(stdout.contains("violation=Permutation"));
        assert!(stdout.contains("output=[]"));
    }
}

#[test]
fn config_file_settings_apply() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("campaign.toml");
    fs::write(&path, "seeds = 12\nseed_start = 100\n").expect("write");

    let output = selsort_cmd()
        .args(["campaign", "run", "--format", "json", "--config"])
        .arg(&path)
        .output()
        .expect("campaign should not crash");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["seeds_run"], 12);
}

#[test]
fn invalid_config_is_reported() {
    selsort_cmd()
        .args(["campaign", "run", "--value-bound", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("value_bound must be > 0"));
}
