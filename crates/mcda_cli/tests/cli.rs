use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PHONES: &str = r#"{
    "columns": ["Model", "Price", "Storage", "Weight"],
    "rows": [["P1", 250, 16, 12], ["P2", 200, 20, 8], ["P3", 300, 12, 10]],
    "impacts": ["-", "+", "-"]
}"#;

fn write_problem(dir: &TempDir, body: &str) -> PathBuf {
    let p = dir.path().join("problem.json");
    fs::write(&p, body).unwrap();
    p
}

fn mcda() -> Command {
    let mut cmd = Command::cargo_bin("mcda").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn topsis_run_prints_ranked_json() {
    let dir = TempDir::new().unwrap();
    let input = write_problem(&dir, PHONES);
    let out = mcda().arg("--input").arg(&input).output().unwrap();
    assert!(out.status.success());

    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["rank"], serde_json::json!([2, 1, 3]));
    assert_eq!(v["detail"]["method"], "topsis");
    assert_eq!(v["table"]["alternatives"][1], "P2");
}

#[test]
fn vikor_run_reports_compromise_status() {
    let dir = TempDir::new().unwrap();
    let input = write_problem(&dir, PHONES);
    let out = mcda()
        .args(["--method", "vikor", "--v", "0.5", "--weighting", "entropy", "--input"])
        .arg(&input)
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["detail"]["method"], "vikor");
    assert!(v["detail"]["status"]["narrative"].is_string());
    assert_eq!(v["detail"]["is_compromise"].as_array().map(Vec::len), Some(3));
}

#[test]
fn compare_writes_to_out_file() {
    let dir = TempDir::new().unwrap();
    let input = write_problem(&dir, PHONES);
    let out_path = dir.path().join("cmp.json");
    mcda()
        .args(["--compare", "--quiet", "--input"])
        .arg(&input)
        .arg("--out")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let v: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(v["rank_difference"].as_array().map(Vec::len), Some(3));
    assert_eq!(v["topsis"]["weights"], v["vikor"]["weights"]);
}

#[test]
fn impacts_flag_overrides_file() {
    let dir = TempDir::new().unwrap();
    let input = write_problem(&dir, PHONES);
    let out = mcda().args(["--impacts", "+,-,+", "--input"]).arg(&input).output().unwrap();
    assert!(out.status.success());
    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["impacts"], serde_json::json!(["benefit", "cost", "benefit"]));
    assert_eq!(v["rank"], serde_json::json!([2, 3, 1]));
}

#[test]
fn ahp_without_pairwise_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let input = write_problem(&dir, PHONES);
    mcda()
        .args(["--weighting", "ahp", "--input"])
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing_pairwise_matrix"));
}

#[test]
fn ahp_with_fraction_literals() {
    let dir = TempDir::new().unwrap();
    let body = PHONES.replace(
        r#""impacts": ["-", "+", "-"]"#,
        r#""impacts": ["-", "+", "-"], "pairwise": [[1, 2, 4], ["1/2", 1, 2], ["1/4", "1/2", 1]]"#,
    );
    let input = write_problem(&dir, &body);
    let out = mcda().args(["--weighting", "ahp", "--input"]).arg(&input).output().unwrap();
    assert!(out.status.success());
    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["consistency"]["acceptable"], true);
    let w0 = v["weights"][0].as_f64().unwrap();
    assert!((w0 - 4.0 / 7.0).abs() < 1e-9);
}

#[test]
fn bad_impact_symbol_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let input = write_problem(&dir, PHONES);
    mcda()
        .args(["--impacts", "-,x,-", "--input"])
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid_impact_symbol"));
}

#[test]
fn blank_impact_item_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    let input = write_problem(&dir, PHONES);
    mcda()
        .args(["--impacts", "+,,-", "--input"])
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid_impact_symbol"));
}

#[test]
fn missing_input_file_is_io() {
    let dir = TempDir::new().unwrap();
    mcda().arg("--input").arg(dir.path().join("nope.json")).assert().code(4);
}

#[test]
fn malformed_json_is_validation() {
    let dir = TempDir::new().unwrap();
    let input = write_problem(&dir, "{ not json");
    mcda().arg("--input").arg(&input).assert().code(2);
}

#[test]
fn unknown_method_is_usage() {
    mcda().args(["--input", "x.json", "--method", "electre"]).assert().code(64);
}
