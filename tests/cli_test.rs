mod common;

use common::{contains, qmsim};
use tempfile::TempDir;

#[test]
fn report_prints_mobile_analysis() {
    let home = TempDir::new().unwrap();
    let output = qmsim(home.path())
        .args(["report", "--scenario", "mobile", "--plain"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(contains(&output.stdout, "80.3 / 100"));
    assert!(contains(&output.stdout, "Very Good"));
    assert!(contains(&output.stdout, "Portability"));
    assert!(!contains(&output.stdout, "\x1b["));
}

#[test]
fn report_json_is_machine_readable() {
    let home = TempDir::new().unwrap();
    let output = qmsim(home.path())
        .args(["report", "--scenario", "health", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["characteristics"].as_array().unwrap().len(), 4);
    assert!(value["overall_score"].is_number());
}

#[test]
fn report_writes_markdown_file_from_extension() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("out").join("report.md");
    qmsim(home.path())
        .args(["report", "--scenario", "iot", "--output"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# ISO 15939 Measurement Report"));
}

#[test]
fn report_without_selection_fails_at_define_gate() {
    let home = TempDir::new().unwrap();
    let output = qmsim(home.path()).arg("report").output().unwrap();

    assert!(!output.status.success());
    assert!(contains(
        &output.stderr,
        "Please select at least one quality characteristic."
    ));
}

#[test]
fn report_rejects_non_numeric_weight() {
    let home = TempDir::new().unwrap();
    let output = qmsim(home.path())
        .args(["report", "--scenario", "iot", "--weight", "perf=abc"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(contains(&output.stderr, "perf=abc"));
}

#[test]
fn report_reports_weight_total() {
    let home = TempDir::new().unwrap();
    let output = qmsim(home.path())
        .args([
            "report", "--toggle", "sec", "--toggle", "rel", "--weight", "sec=70",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(contains(&output.stderr, "Currently: 120%"));
}

#[test]
fn report_with_huge_weights_fails_without_crashing() {
    let home = TempDir::new().unwrap();
    let output = qmsim(home.path())
        .args([
            "report",
            "--toggle",
            "perf",
            "--toggle",
            "comp",
            "--weight",
            "perf=9223372036854775807",
            "--weight",
            "comp=9223372036854775807",
        ])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(contains(&output.stderr, "Total weight must be 100%"));
    assert!(!contains(&output.stderr, "PANIC"));
}

#[test]
fn unknown_characteristic_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    let output = qmsim(home.path())
        .args(["report", "--toggle", "speed"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(contains(&output.stderr, "unknown characteristic 'speed'"));
}

#[test]
fn catalog_lists_scenarios_and_metrics() {
    let home = TempDir::new().unwrap();
    let output = qmsim(home.path())
        .args(["catalog", "--plain"])
        .output()
        .unwrap();

    assert!(output.status.success());
    for needle in [
        "IoT System",
        "Safety Critical (Health)",
        "m_perf_1",
        "Adaptability",
    ] {
        assert!(contains(&output.stdout, needle), "missing {needle}");
    }
}

#[test]
fn init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    qmsim(home.path()).arg("init").assert().success();
    assert!(home.path().join(".qmsim.toml").exists());

    let output = qmsim(home.path()).arg("init").output().unwrap();
    assert!(!output.status.success());
    assert!(contains(&output.stderr, "--force"));

    qmsim(home.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
