use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("ecoinsight").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ecoinsight"));
}

#[test]
fn render_writes_page_fragments() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("ecoinsight").unwrap();
    cmd.args([
        "render",
        "--page",
        "dashboard",
        "--out",
        dir.path().to_str().unwrap(),
        "--width",
        "640",
    ]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("dashboard"));

    let svg = std::fs::read_to_string(dir.path().join("dashboard-bar-chart.svg")).unwrap();
    assert!(svg.contains("<svg"));
    assert!(dir.path().join("dashboard-donut-chart.html").exists());
}

#[test]
fn render_refresh_accepts_a_date() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("ecoinsight").unwrap();
    cmd.args([
        "render",
        "--page",
        "dashboard",
        "--out",
        dir.path().to_str().unwrap(),
        "--date",
        "2025-05-17",
    ]);
    cmd.assert().success();

    let mut cmd = Command::cargo_bin("ecoinsight").unwrap();
    cmd.args(["render", "--date", "yesterday"]);
    cmd.assert().failure();
}

#[test]
fn export_writes_activity_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");
    let mut cmd = Command::cargo_bin("ecoinsight").unwrap();
    cmd.args(["export", "--out", out.to_str().unwrap()]);
    cmd.assert().success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Timestamp,Category,Description"));
    assert!(text.contains("2025-05-15,Energy"));
}

#[test]
fn summary_prints_cards_and_json() {
    let mut cmd = Command::cargo_bin("ecoinsight").unwrap();
    cmd.arg("summary");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Resource Efficiency"));

    let mut cmd = Command::cargo_bin("ecoinsight").unwrap();
    cmd.args(["summary", "--json"]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert!(v.get("dashboard").and_then(|d| d.as_array()).is_some());
}

#[test]
fn add_waste_rerenders_analytics() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("ecoinsight").unwrap();
    cmd.args([
        "add-waste",
        "--process",
        "Finishing",
        "--waste-type",
        "Solvent",
        "--amount",
        "42",
        "--method",
        "Distillation",
        "--recyclable",
        "no",
        "--out",
        dir.path().to_str().unwrap(),
    ]);
    cmd.assert().success();

    let table = std::fs::read_to_string(dir.path().join("waste-sources-table.html")).unwrap();
    assert!(table.contains("Finishing"));
    assert!(table.contains("42kg"));
}
