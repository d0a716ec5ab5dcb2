//! CLI integration tests

use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn presser_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_auto-key-presser"))
}

/// Binary pointed at an isolated config file
fn presser_with_config(config: &Path) -> Command {
    let mut cmd = presser_bin();
    cmd.arg("--config").arg(config).env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_output() {
    let output = presser_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--key"));
    assert!(stdout.contains("--for"));
    assert!(stdout.contains("--dry-run"));
    assert!(stdout.contains("--injector"));
    assert!(stdout.contains("keys"));
    assert!(stdout.contains("config"));
}

#[test]
fn version_output() {
    let output = presser_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("auto-key-presser"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn keys_help() {
    presser_bin()
        .args(["keys", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("remove"))
                .and(predicate::str::contains("edit"))
                .and(predicate::str::contains("check")),
        );
}

#[test]
fn config_path_uses_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("presser.toml");

    presser_with_config(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("presser.toml"));
}

#[test]
fn config_path_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("from-env.toml");

    presser_bin()
        .env("AUTO_KEY_PRESSER_CONFIG", &config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("from-env.toml"));
}

#[test]
fn keys_list_shows_default_row() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    presser_with_config(&config)
        .args(["keys", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0  A - 1000 ms - enabled"));
}

#[test]
fn keys_add_edit_remove_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    presser_with_config(&config)
        .args(["keys", "add", "F5", "--interval", "250"])
        .assert()
        .success();
    presser_with_config(&config)
        .args(["keys", "disable", "0"])
        .assert()
        .success();
    presser_with_config(&config)
        .args(["keys", "edit", "1", "--key", "SPACE"])
        .assert()
        .success();

    presser_with_config(&config)
        .args(["keys", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("A - 1000 ms - disabled")
                .and(predicate::str::contains("SPACE - 250 ms - enabled")),
        );

    presser_with_config(&config)
        .args(["keys", "remove", "0"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(&config).unwrap();
    assert!(saved.contains("SPACE"));
    assert!(!saved.contains("\"A\""));
}

#[test]
fn keys_check_prints_targets() {
    presser_bin()
        .args(["keys", "check", "F1", "a", "--platform", "windows"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("F1 -> code 0x70")
                .and(predicate::str::contains("a -> unicode U+0061")),
        );
}

#[test]
fn config_set_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    presser_with_config(&config)
        .args(["config", "set", "log_level", "DEBUG"])
        .assert()
        .success();
    presser_with_config(&config)
        .args(["config", "get", "log_level"])
        .assert()
        .success()
        .stdout(predicate::str::contains("debug"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    presser_with_config(&config)
        .args(["config", "init"])
        .assert()
        .success();
    presser_with_config(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn dry_run_stops_after_time_limit() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    presser_with_config(&config)
        .args(["--dry-run", "--for", "300ms", "-k", "A:50", "-k", "enter:100"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Status: idle"));
}
