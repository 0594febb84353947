use assert_cmd::prelude::*;
use predicates::prelude::*;
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

// Build a minimal valid TOML config for the simulated bus
fn write_valid_config(dir: &tempfile::TempDir) -> PathBuf {
    let toml = r#"
[device]
frequency_hz = 440
duration_ms = 1000
muted = false

[bus]
address = 0x2D
suppressed = false
"#;
    let path = dir.path().join("cfg.toml");
    fs::write(&path, toml).unwrap();
    path
}

#[rstest]
#[case(&["--help"], 0, "Usage:", "stdout")]
#[case(&["get", "frequency-hz"], 0, "440", "stdout")]
#[case(&["get", "duration-ms"], 0, "1000", "stdout")]
#[case(&["get", "muted"], 0, "0", "stdout")]
#[case(&["set", "frequency-hz", "0x100"], 0, "256", "stdout")]
#[case(&["set", "duration-ms", "0100"], 0, "64", "stdout")]
#[case(&["set", "frequency-hz", "9000"], 2, "out of range", "stderr")]
#[case(&["set", "duration-ms", "12a"], 2, "not an unsigned integer", "stderr")]
#[case(&["set", "frequency-hz"], 2, "required", "stderr")]
#[case(&["get", "volume"], 2, "invalid value", "stderr")]
#[case(&["beep"], 0, "beep ok", "stdout")]
#[case(&["beep", "880 250"], 0, "880 Hz", "stdout")]
fn cli_table_cases(
    #[case] args: &[&str],
    #[case] exit_code: i32,
    #[case] needle: &str,
    #[case] stream: &str,
) {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();

    // Always include a valid config to avoid relying on default path
    cmd.arg("--config").arg(&cfg);

    for a in args {
        cmd.arg(a);
    }

    let assert = cmd.assert().code(exit_code);

    match stream {
        "stdout" => {
            assert.stdout(predicate::str::contains(needle));
        }
        "stderr" => {
            assert.stderr(predicate::str::contains(needle));
        }
        other => panic!("unknown stream: {other}"),
    }
}

#[rstest]
fn repeated_beeps_hit_the_simulated_bus_each_time() {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--config")
        .arg(&cfg)
        .arg("beep")
        .arg("--repeat")
        .arg("3")
        .arg("--interval-ms")
        .arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("beep ok: 3 x 440 Hz"))
        .stderr(predicate::str::contains("Bus write (simulated)").count(3));
}

#[rstest]
fn suppress_bus_flag_keeps_the_bus_silent() {
    let dir = tempdir().unwrap();
    let cfg = write_valid_config(&dir);

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--config").arg(&cfg).arg("--suppress-bus").arg("beep");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("beep ok"))
        .stderr(predicate::str::contains("Bus write (simulated)").not());
}

#[rstest]
fn missing_config_file_is_a_readable_error() {
    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--config")
        .arg("/nonexistent/beeper.toml")
        .arg("get")
        .arg("muted");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[rstest]
fn out_of_range_config_is_rejected_before_running() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(
        &path,
        "[device]\nfrequency_hz = 0\n\n[bus]\naddress = 0x2D\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--config").arg(&path).arg("get").arg("muted");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("frequency_hz"));
}

#[rstest]
fn muted_device_beeps_without_bus_traffic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cfg.toml");
    fs::write(
        &path,
        "[device]\nmuted = true\n\n[bus]\naddress = 0x2D\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--config").arg(&path).arg("beep");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("beep ok"))
        .stderr(predicate::str::contains("Bus write (simulated)").not());
}

#[rstest]
fn config_file_logging_writes_json_lines() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("beeper.log");
    let cfg_path = dir.path().join("cfg.toml");
    fs::write(
        &cfg_path,
        format!(
            "[bus]\naddress = 0x2D\n\n[logging]\nfile = {:?}\nlevel = \"debug\"\n",
            log_path.display()
        ),
    )
    .unwrap();

    // Two beeps with a generous gap: the gap gives the non-blocking log
    // worker time to land the first beep's line before the process exits.
    let mut cmd = Command::cargo_bin("beeper_cli").unwrap();
    cmd.arg("--config")
        .arg(&cfg_path)
        .arg("beep")
        .arg("--repeat")
        .arg("2")
        .arg("--interval-ms")
        .arg("200");
    cmd.assert().success();

    let logged = fs::read_to_string(&log_path).unwrap();
    let line = logged
        .lines()
        .find(|l| l.contains("\"beep\""))
        .expect("expected a beep log line");
    let v: serde_json::Value = serde_json::from_str(line).expect("file log lines are JSON");
    assert_eq!(v["fields"]["frequency_hz"], 440);
    assert_eq!(v["fields"]["duration_ms"], 1000);
}
