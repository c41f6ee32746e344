//! End to end runs of the `ink` binary.

use std::process::Command;

fn ink() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ink"));
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_text_record_on_stdout() {
    let output = ink()
        .args([
            "--name",
            "httpserver",
            "detected system health",
            "name=ink",
            "uptime_days=9",
            "temperature_celsius=-25",
            "load_factor=0.275",
            "is_active=true",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "INFO detected system health logger=httpserver name=ink uptime_days=9 temperature_celsius=-25 load_factor=0.275 is_active=true\n"
    );
}

#[test]
fn test_json_record_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("ink.toml");
    std::fs::write(
        &config,
        "format = \"json\"\nname = \"app\"\n\n[fields]\nregion = \"eu\"\n",
    )
    .unwrap();

    let output = ink()
        .arg("--config")
        .arg(&config)
        .args(["--at", "error", "boom", "code=7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let line = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
    assert_eq!(parsed["level"], "error");
    assert_eq!(parsed["msg"], "boom");
    assert_eq!(parsed["logger"], "app");
    assert_eq!(parsed["region"], "eu");
    assert_eq!(parsed["code"], 7);
}

#[test]
fn test_below_minimum_level_writes_nothing() {
    let output = ink()
        .args(["--level", "error", "--at", "debug", "quiet"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_field_fails() {
    let output = ink().args(["msg", "novalue"]).output().unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_failure_reported_once() {
    let output = ink()
        .env("RUST_LOG", "ink=error")
        .args(["msg", "novalue"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("invalid field").count(), 1, "stderr: {}", stderr);
    assert!(!stderr.contains("Error: "), "stderr: {}", stderr);
}
