//! Tests that run the `yule` binary itself.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_workspace(dir: &Path) -> std::path::PathBuf {
    fs::write(
        dir.join("people.json"),
        r#"[
            {"name": "Alice", "familyId": "F1", "isKid": false},
            {"name": "Bob", "familyId": "F2", "isKid": false},
            {"name": "Carol", "familyId": "F3", "isKid": false}
        ]"#,
    )
    .unwrap();

    let data_dir = toml::Value::String(dir.to_string_lossy().into_owned());
    let config = dir.join("config.toml");
    fs::write(&config, format!("[data]\ndir = {}\n", data_dir)).unwrap();
    config
}

fn yule(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_yule"))
        .arg("--config")
        .arg(config)
        .arg("--no-color")
        .args(args)
        .env_remove("YULE_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_json_draw_prints_only_json_on_stdout() {
    let dir = TempDir::new().unwrap();
    let config = write_workspace(dir.path());

    let output = yule(&config, &["--format", "json", "draw", "--no-edit", "--dry-run"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let pairings: Vec<serde_json::Value> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(pairings.len(), 3);
    assert_eq!(pairings[0]["giver"]["name"], "Alice");
    assert_eq!(pairings[0]["recipient"]["name"], "Bob");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Loaded 3 participants."));
    assert!(stderr.contains("Pairings size: 3"));
    assert!(!dir.path().join("assignments.json").exists());
}

#[test]
fn test_quiet_draw_saves_assignment() {
    let dir = TempDir::new().unwrap();
    let config = write_workspace(dir.path());

    let output = yule(&config, &["--format", "quiet", "draw", "--no-edit"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Alice -> Bob\nBob -> Carol\nCarol -> Alice"));
    assert!(dir.path().join("assignments.json").exists());
}
