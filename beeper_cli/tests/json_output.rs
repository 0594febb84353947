use assert_cmd::prelude::*;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_valid_config(dir: &tempfile::TempDir) -> PathBuf {
    let toml = r#"
[device]
frequency_hz = 440
duration_ms = 1000

[bus]
address = 0x2D
"#;
    let path = dir.path().join("cfg.toml");
    fs::write(&path, toml).unwrap();
    path
}

fn json_stdout_line(cmd: &mut Command, must_succeed: bool, key: &str) -> serde_json::Value {
    let assert = cmd.assert();
    let assert = if must_succeed { assert.success() } else { assert.failure() };
    let out = assert.get_output().stdout.clone();
    let stdout = String::from_utf8_lossy(&out);
    let line = stdout
        .lines()
        .find(|l| l.contains(&format!("\"{key}\"")))
        .unwrap_or("")
        .to_string();
    assert!(
        !line.is_empty(),
        "no JSON line with {key} found; stdout was: {stdout}"
    );
    serde_json::from_str(&line).expect("valid JSON")
}

/// Validate the JSON schema for a successful beep run.
#[rstest]
fn json_beep_success_schema() {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--json")
        .arg("--log-level")
        .arg("error")
        .arg("--config")
        .arg(&cfg)
        .arg("beep")
        .arg("880 250");

    let v = json_stdout_line(&mut cmd, true, "healthy");

    assert_eq!(v.get("healthy").and_then(|x| x.as_bool()), Some(true));
    assert_eq!(v.get("beeps").and_then(|x| x.as_u64()), Some(1));
    assert_eq!(v.get("frequency_hz").and_then(|x| x.as_u64()), Some(880));
    assert_eq!(v.get("duration_ms").and_then(|x| x.as_u64()), Some(250));
    assert_eq!(v.get("muted").and_then(|x| x.as_bool()), Some(false));
    assert_eq!(
        v.get("consecutive_failures").and_then(|x| x.as_u64()),
        Some(0)
    );
}

/// `get` and `set` echo attribute values as JSON objects.
#[rstest]
fn json_attribute_echo_schema() {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--json")
        .arg("--config")
        .arg(&cfg)
        .arg("get")
        .arg("frequency-hz");
    let v = json_stdout_line(&mut cmd, true, "attr");
    assert_eq!(v.get("attr").and_then(|x| x.as_str()), Some("frequency-hz"));
    assert_eq!(v.get("value").and_then(|x| x.as_u64()), Some(440));

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--json")
        .arg("--config")
        .arg(&cfg)
        .arg("set")
        .arg("muted")
        .arg("0x1");
    let v = json_stdout_line(&mut cmd, true, "attr");
    assert_eq!(v.get("attr").and_then(|x| x.as_str()), Some("muted"));
    assert_eq!(v.get("value").and_then(|x| x.as_u64()), Some(1));
}

/// Errors come back as one structured JSON line with a stable reason.
#[rstest]
fn json_error_schema_carries_a_reason() {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--json")
        .arg("--config")
        .arg(&cfg)
        .arg("set")
        .arg("frequency-hz")
        .arg("9000");

    let v = json_stdout_line(&mut cmd, false, "reason");
    assert_eq!(
        v.get("reason").and_then(|x| x.as_str()),
        Some("InvalidFrequency")
    );
    let msg = v.get("message").and_then(|x| x.as_str()).unwrap_or("");
    assert!(msg.contains("9000"), "message should name the value: {msg}");
}
