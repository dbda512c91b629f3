//! Integration tests for the `coreflow` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn coreflow(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("coreflow").unwrap();
    cmd.env("COREFLOW_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_plan() {
    let dir = TempDir::new().unwrap();
    coreflow(&dir)
        .args(["plan", "--income", "20000", "--lifestyle", "student", "--mood", "balanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Student / Balanced / ₹20,000.00 per month"))
        .stdout(predicate::str::contains("You're on a balanced path."))
        .stdout(predicate::str::contains("Financial Fitness Scorecard"));
}

#[test]
fn test_plan_unknown_lifestyle() {
    let dir = TempDir::new().unwrap();
    coreflow(&dir)
        .args(["plan", "--income", "20000", "--lifestyle", "retiree", "--mood", "balanced"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown lifestyle: 'retiree'"));
}

#[test]
fn test_plan_zero_income() {
    let dir = TempDir::new().unwrap();
    coreflow(&dir)
        .args(["plan", "--income", "0", "--lifestyle", "student", "--mood", "balanced"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid income"));
}

#[test]
fn test_rules() {
    let dir = TempDir::new().unwrap();
    coreflow(&dir)
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Working Professional"))
        .stdout(predicate::str::contains("Homemaker"));
}

#[test]
fn test_project_without_growth() {
    let dir = TempDir::new().unwrap();
    coreflow(&dir)
        .args(["project", "--savings", "1000", "--months", "3", "--return", "0", "--inflation", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹3,000"))
        .stdout(predicate::str::contains("Growth earned"));
}

#[test]
fn test_scenario_splurge() {
    let dir = TempDir::new().unwrap();
    coreflow(&dir)
        .args(["scenario", "splurge", "--amount", "200", "--years", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹14,318.58"));
}

#[test]
fn test_scenario_mood() {
    let dir = TempDir::new().unwrap();
    coreflow(&dir)
        .args([
            "scenario", "mood", "--income", "50000", "--lifestyle", "freelancer", "--mood",
            "balanced", "--to", "disciplined",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(gain)"));
}

#[test]
fn test_export_json_and_csv() {
    let dir = TempDir::new().unwrap();
    let json_path = dir.path().join("plan.json");
    let csv_path = dir.path().join("plan.csv");
    let profile = ["--income", "50000", "--lifestyle", "homemaker", "--mood", "disciplined"];

    coreflow(&dir)
        .arg("export")
        .arg(&json_path)
        .args(profile)
        .args(["--format", "json", "--pretty"])
        .assert()
        .success();
    let json = std::fs::read_to_string(&json_path).unwrap();
    assert!(json.contains("\"schema_version\""));
    assert!(json.contains("\"lifestyle\": \"homemaker\""));

    coreflow(&dir)
        .arg("export")
        .arg(&csv_path)
        .args(profile)
        .args(["--format", "csv"])
        .assert()
        .success();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("Month,Nominal,Real\n"));
    assert_eq!(csv.lines().count(), 13);
}

#[test]
fn test_config_set_and_show() {
    let dir = TempDir::new().unwrap();

    coreflow(&dir)
        .args(["config", "set", "return", "0.08"])
        .assert()
        .success();
    coreflow(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8.0%"));

    coreflow(&dir)
        .args(["config", "set", "return", "2.5"])
        .assert()
        .failure();
    coreflow(&dir)
        .args(["config", "reset"])
        .assert()
        .success();
    coreflow(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7.0%"));
}

#[test]
fn test_config_reset_recovers_broken_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    coreflow(&dir)
        .args(["plan", "--income", "20000", "--lifestyle", "student", "--mood", "balanced"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));

    coreflow(&dir)
        .args(["config", "reset"])
        .assert()
        .success();
    coreflow(&dir)
        .args(["plan", "--income", "20000", "--lifestyle", "student", "--mood", "balanced"])
        .assert()
        .success();
}

#[test]
fn test_bad_rate_override_does_not_block_config() {
    let dir = TempDir::new().unwrap();

    coreflow(&dir)
        .args(["--return", "5", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("7.0%"));
    coreflow(&dir)
        .args(["--return", "5", "project", "--savings", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid return rate"));
}

#[test]
fn test_amount_with_trailing_symbol_is_rejected() {
    let dir = TempDir::new().unwrap();
    coreflow(&dir)
        .args(["plan", "--income", "1.5€", "--lifestyle", "student", "--mood", "balanced"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid money format"));
}
