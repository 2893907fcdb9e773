//! End-to-end tests for the fundlab binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fundlab() -> Command {
    Command::cargo_bin("fundlab").unwrap()
}

/// Writes the built-in sample portfolio to a temp file and returns it.
fn sample_portfolio() -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    fundlab()
        .arg("sample")
        .arg("--output")
        .arg(file.path())
        .assert()
        .success();
    file
}

#[test]
fn test_sample_emits_valid_json() {
    let output = fundlab().arg("sample").output().unwrap();
    assert!(output.status.success());

    let fund: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(fund["name"], "Balanced Growth 60/40");
    assert!(fund["holdings"].as_array().unwrap().len() >= 3);
}

#[test]
fn test_metrics_table() {
    let portfolio = sample_portfolio();

    fundlab()
        .arg("metrics")
        .arg("--portfolio")
        .arg(portfolio.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Projected Return"))
        .stdout(predicate::str::contains("Sharpe Ratio"));
}

#[test]
fn test_metrics_json() {
    let portfolio = sample_portfolio();

    let output = fundlab()
        .arg("metrics")
        .arg("--portfolio")
        .arg(portfolio.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let metrics: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(metrics["projected_return"].is_number());
    assert!(metrics["sharpe_ratio"].is_number());
}

#[test]
fn test_backtest_has_61_rows() {
    let portfolio = sample_portfolio();

    let output = fundlab()
        .arg("backtest")
        .arg("--portfolio")
        .arg(portfolio.path())
        .arg("--as-of")
        .arg("2026-08-25")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 61);
}

#[test]
fn test_backtest_without_anchors_reports_unavailable() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let portfolio = serde_json::json!({
        "name": "No Anchors",
        "holdings": [
            { "ticker": "AAA", "weight": 100.0,
              "returns": { "one_year": 10.0 } }
        ]
    });
    std::fs::write(file.path(), portfolio.to_string()).unwrap();

    fundlab()
        .arg("backtest")
        .arg("--portfolio")
        .arg(file.path())
        .arg("--as-of")
        .arg("2026-08-25")
        .assert()
        .success()
        .stdout(predicate::str::contains("No backtest available"));
}

#[test]
fn test_allocation_lists_sectors() {
    let portfolio = sample_portfolio();

    fundlab()
        .arg("allocation")
        .arg("--portfolio")
        .arg(portfolio.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("US Equity"))
        .stdout(predicate::str::contains("Fixed Income"));
}

#[test]
fn test_invalid_portfolio_is_rejected() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let portfolio = serde_json::json!({
        "name": "Broken",
        "holdings": [ { "ticker": "AAA", "weight": 150.0 } ]
    });
    std::fs::write(file.path(), portfolio.to_string()).unwrap();

    fundlab()
        .arg("metrics")
        .arg("--portfolio")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid weight"));
}

#[test]
fn test_missing_file_is_a_clean_error() {
    fundlab()
        .arg("metrics")
        .arg("--portfolio")
        .arg("/nonexistent/portfolio.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read portfolio file"));
}

#[test]
fn test_bad_date_is_rejected() {
    let portfolio = sample_portfolio();

    fundlab()
        .arg("backtest")
        .arg("--portfolio")
        .arg(portfolio.path())
        .arg("--as-of")
        .arg("25-08-2026")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}
