//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the caller's environment, HOME and `.env`
fn msgboard(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("msgboard").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .env_remove("MSGBOARD_BIND")
        .env_remove("MSGBOARD_MAX_CONNECTIONS")
        .env_remove("RUST_LOG");
    cmd
}

// === Help ===

#[test]
fn test_top_level_help() {
    let home = TempDir::new().unwrap();
    msgboard(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_serve_help() {
    let home = TempDir::new().unwrap();
    msgboard(&home)
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--in-memory"));
}

// === Serve ===

#[test]
fn test_serve_without_database_url_fails() {
    let home = TempDir::new().unwrap();
    msgboard(&home)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_serve_rejects_invalid_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[server\n").unwrap();

    msgboard(&home)
        .args(["serve", "--in-memory", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid TOML"));
}

// === Config ===

#[test]
fn test_config_path_defaults_to_home() {
    let home = TempDir::new().unwrap();
    msgboard(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".msgboard"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    let home = TempDir::new().unwrap();
    msgboard(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:3030"))
        .stdout(predicate::str::contains("max_connections = 5"));
}

#[test]
fn test_config_show_layers_file_and_flags() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    std::fs::write(
        &path,
        "[server]\nbind = \"0.0.0.0:8080\"\n\n[database]\nurl = \"postgres://app:hunter2@db/msgboard\"\nmax_connections = 9\n",
    )
    .unwrap();

    msgboard(&home)
        .args(["config", "--config"])
        .arg(&path)
        .args(["show", "--max-connections", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0.0.0:8080"))
        .stdout(predicate::str::contains("max_connections = 2"))
        .stdout(predicate::str::contains("postgres://app:***@db/msgboard"))
        .stdout(predicate::str::contains("hunter2").not());
}

#[test]
fn test_config_show_reads_environment() {
    let home = TempDir::new().unwrap();
    msgboard(&home)
        .args(["config", "show"])
        .env("MSGBOARD_BIND", "127.0.0.1:4040")
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:4040"));
}

// === Completions ===

#[test]
fn test_completions_bash() {
    let home = TempDir::new().unwrap();
    msgboard(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("msgboard"));
}
