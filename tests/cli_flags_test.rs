//! CLI flag contract tests
//!
//! Verifies that global flags (--data-dir, --log-level), the config file
//! and the WORKSIGHT_* environment variables resolve in the documented
//! order: flag > environment > config file > default.

use std::path::Path;
use std::process::{Command, Stdio};

fn worksight_bin() -> &'static str {
    env!("CARGO_BIN_EXE_worksight")
}

/// Command with an isolated config file and no inherited overrides
fn base_command(home: &Path) -> Command {
    let mut cmd = Command::new(worksight_bin());
    cmd.env("WORKSIGHT_CONFIG", home.join("config.toml"))
        .env_remove("WORKSIGHT_DATA_DIR")
        .env_remove("WORKSIGHT_FORMAT")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null());
    cmd
}

fn run(mut cmd: Command, args: &[&str]) -> (i32, String, String) {
    let output = cmd.args(args).output().expect("Failed to run worksight");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let home = tempfile::tempdir().unwrap();
    let flag_dir = home.path().join("flag");
    let env_dir = home.path().join("env");

    let mut cmd = base_command(home.path());
    cmd.env("WORKSIGHT_DATA_DIR", &env_dir);
    let (code, _, stderr) = run(
        cmd,
        &["mood", "set", "3", "--data-dir", flag_dir.to_str().unwrap()],
    );
    assert_eq!(code, 0, "{}", stderr);
    assert!(flag_dir.join("state.json").exists());
    assert!(!env_dir.exists());
}

#[test]
fn test_data_dir_from_config_file() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join("from-config");
    std::fs::write(
        home.path().join("config.toml"),
        format!("[storage]\ndata_dir = {:?}\n", config_dir.to_str().unwrap()),
    )
    .unwrap();

    let (code, _, stderr) = run(base_command(home.path()), &["mood", "set", "5"]);
    assert_eq!(code, 0, "{}", stderr);
    assert!(config_dir.join("state.json").exists());
}

#[test]
fn test_format_env_and_flag() {
    let home = tempfile::tempdir().unwrap();
    let data = home.path().join("data");

    let mut cmd = base_command(home.path());
    cmd.env("WORKSIGHT_DATA_DIR", &data).env("WORKSIGHT_FORMAT", "json");
    let (code, stdout, _) = run(cmd, &["history"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("JSON from env format");
    assert!(parsed.as_array().unwrap().is_empty());

    let mut cmd = base_command(home.path());
    cmd.env("WORKSIGHT_DATA_DIR", &data).env("WORKSIGHT_FORMAT", "json");
    let (_, stdout, _) = run(cmd, &["history", "--format", "markdown"]);
    assert!(stdout.starts_with("## Assessment History"));
}

#[test]
fn test_config_set_changes_default_format() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, stderr) = run(base_command(home.path()), &["config", "set", "output.format", "json"]);
    assert_eq!(code, 0, "{}", stderr);
    assert!(stdout.contains("Set output.format"));

    let content = std::fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(content.contains("format = \"json\""));

    let mut cmd = base_command(home.path());
    cmd.env("WORKSIGHT_DATA_DIR", home.path().join("data"));
    let (_, stdout, _) = run(cmd, &["history"]);
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());

    let (code, _, stderr) = run(base_command(home.path()), &["config", "set", "output.colour", "x"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Unknown config key"));
}

#[test]
fn test_config_init_and_show() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(base_command(home.path()), &["config", "init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Config initialized"));
    assert!(home.path().join("config.toml").exists());

    let (code, stdout, _) = run(base_command(home.path()), &["config", "show"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Output format:  text"));
}

#[test]
fn test_logs_go_to_stderr() {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = base_command(home.path());
    cmd.env("WORKSIGHT_DATA_DIR", home.path().join("data"));
    let (code, stdout, stderr) = run(cmd, &["--log-level", "debug", "stats", "--json"]);
    assert_eq!(code, 0);
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
    assert!(stderr.contains("DEBUG"), "expected debug logs on stderr: {}", stderr);
}

#[test]
fn test_invalid_log_level_rejected() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, _) = run(base_command(home.path()), &["--log-level", "loud", "version"]);
    assert_ne!(code, 0);
}

#[test]
fn test_version() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run(base_command(home.path()), &["version"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("worksight "));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
