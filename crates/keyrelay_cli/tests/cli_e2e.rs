//! End-to-end tests for the `keyrelay` binary.

use assert_cmd::Command;
use predicates::prelude::*;

const OPENAI_KEY: &str = "sk-a1B2c3D4e5F6g7H8i9J0k1L2m3N4o5P6q7R8s9T0u1V2w3X4";

fn keyrelay() -> Command {
    Command::new(env!("CARGO_BIN_EXE_keyrelay"))
}

#[test]
fn detect_exits_zero_on_clean_text() {
    keyrelay()
        .args(["detect", "fn main() {}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no secrets detected"));
}

#[test]
fn detect_exits_one_when_secrets_found() {
    keyrelay()
        .args(["detect", &format!("OPENAI_API_KEY={OPENAI_KEY}")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("openai"));
}

#[test]
fn detect_exit_zero_flag_overrides_findings() {
    keyrelay()
        .args(["detect", "--exit-zero", &format!("OPENAI_API_KEY={OPENAI_KEY}")])
        .assert()
        .success();
}

#[test]
fn detect_masks_values_by_default() {
    keyrelay()
        .args(["detect", "--exit-zero", &format!("OPENAI_API_KEY={OPENAI_KEY}")])
        .assert()
        .success()
        .stdout(predicate::str::contains(OPENAI_KEY).not())
        .stdout(predicate::str::contains("••"));
}

#[test]
fn detect_show_values_prints_raw_secret() {
    keyrelay()
        .args(["detect", "--exit-zero", "--show-values", &format!("OPENAI_API_KEY={OPENAI_KEY}")])
        .assert()
        .success()
        .stdout(predicate::str::contains(OPENAI_KEY));
}

#[test]
fn detect_reads_stdin_when_no_text_given() {
    keyrelay()
        .args(["detect", "--exit-zero"])
        .write_stdin(format!("OPENAI_API_KEY={OPENAI_KEY}\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("openai"));
}

#[test]
fn detect_json_output_carries_detection_fields() {
    let output = keyrelay()
        .args(["detect", "--exit-zero", "--format", "json", &format!("OPENAI_API_KEY={OPENAI_KEY}")])
        .output()
        .unwrap();

    let detections: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let first = &detections[0];
    assert_eq!(first["provider"], "openai");
    assert_eq!(first["envVarName"], "OPENAI_API_KEY");
    assert_ne!(first["value"], OPENAI_KEY, "value must be masked without --show-values");
}

#[test]
fn detect_json_show_values_keeps_raw_value() {
    let output = keyrelay()
        .args([
            "detect",
            "--exit-zero",
            "--show-values",
            "--format",
            "json",
            &format!("OPENAI_API_KEY={OPENAI_KEY}"),
        ])
        .output()
        .unwrap();

    let detections: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(detections[0]["value"], OPENAI_KEY);
}

#[test]
fn patterns_lists_catalog() {
    keyrelay()
        .arg("patterns")
        .assert()
        .success()
        .stdout(predicate::str::contains("patterns"))
        .stdout(predicate::str::contains("openai"))
        .stdout(predicate::str::contains("anthropic"));
}

#[test]
fn patterns_filters_by_group() {
    keyrelay()
        .args(["patterns", "--group", "ai"])
        .assert()
        .success()
        .stdout(predicate::str::contains("openai"))
        .stdout(predicate::str::contains("stripe").not());
}

#[test]
fn patterns_reports_unmatched_group_filter() {
    keyrelay()
        .args(["patterns", "--group", "bogus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no patterns match"));
}

#[test]
fn completions_generate_for_bash() {
    keyrelay()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keyrelay"));
}

#[test]
fn check_fails_cleanly_when_host_is_missing() {
    keyrelay()
        .args(["check", "--host", "/nonexistent/keyrelay-host"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to connect"));
}
