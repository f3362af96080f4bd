use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.html"), r#"<a href="b.html">b</a>"#).unwrap();
    fs::write(dir.path().join("b.html"), r#"<a href="a.html">a</a>"#).unwrap();
    dir
}

#[test]
fn test_usage_error_without_corpus() {
    Command::cargo_bin("linkrank")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_usage_error_with_extra_argument() {
    let dir = corpus();
    Command::cargo_bin("linkrank")
        .unwrap()
        .arg(dir.path())
        .arg("extra")
        .assert()
        .failure();
}

#[test]
fn test_text_report() {
    let dir = corpus();
    Command::cargo_bin("linkrank")
        .unwrap()
        .arg(dir.path())
        .args(["--samples", "100", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PageRank Results from Sampling (n = 100)"))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::contains("  a.html: 0.5000"))
        .stdout(predicate::str::contains("  b.html: 0.5000"));
}

#[test]
fn test_json_report() {
    let dir = corpus();
    let output = Command::cargo_bin("linkrank")
        .unwrap()
        .arg(dir.path())
        .args(["--format", "json", "--samples", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["samples"], 10);
    assert!(value["iteration"]["a.html"].as_f64().is_some());
}

#[test]
fn test_invalid_damping_fails() {
    let dir = corpus();
    Command::cargo_bin("linkrank")
        .unwrap()
        .arg(dir.path())
        .args(["--damping", "1.5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Damping factor"));
}

#[test]
fn test_empty_corpus_fails() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("linkrank")
        .unwrap()
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Corpus contains no pages"));
}
