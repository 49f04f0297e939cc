#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for calculator-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and basic command functionality.

use std::collections::HashMap;
use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::timeout;

/// Helper to run the calculator-server binary with given arguments
fn run_calculator_server(args: &[&str]) -> std::process::Output {
    run_calculator_server_with_env(args, &[])
}

fn run_calculator_server_with_env(args: &[&str], env: &[(&str, &str)]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(args)
        .envs(env.iter().copied())
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calculator-server")
}

fn write_config(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write config file");
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_calculator_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("calculator-server"),
        "Should contain binary name"
    );
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--port"), "Should mention port option");
}

#[test]
fn test_cli_version_command() {
    let output = run_calculator_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("calculator-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Should contain package version"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_calculator_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error"),
        "Should contain error message about invalid command"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_calculator_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "invalid.yaml", "server: [unclosed");

    let output = run_calculator_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to load configuration"),
        "Should mention configuration loading: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_unknown_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "unknown.yaml",
        "server:\n  bind_addr: \"127.0.0.1:8080\"\n  workers: 4\n",
    );

    let output = run_calculator_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should reject unknown keys");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("workers"), "Should name the key: {stderr}");
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "valid.yaml",
        r#"
server:
  bind_addr: "127.0.0.1:18080"
  enable_docs: false

logging:
  level: "warn"
  format: json

calculator:
  max_fibonacci_index: 50
"#,
    );

    let output = run_calculator_server(&["--config", &config_path, "check"]);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        eprintln!("STDERR: {stderr}");
    }

    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration is valid"),
        "Should indicate successful validation: {stdout}"
    );
    assert!(stdout.contains("127.0.0.1:18080"), "Should echo bind address");
}

#[test]
fn test_cli_check_rejects_invalid_bind_addr() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(
        &temp_dir,
        "bad_addr.yaml",
        "server:\n  bind_addr: \"localhost-without-port\"\n",
    );

    let output = run_calculator_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should fail with invalid bind address");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid bind address"),
        "Should explain the bind address problem: {stderr}"
    );
}

#[test]
fn test_cli_print_config_is_yaml() {
    let output = run_calculator_server(&["--print-config", "--port", "9191"]);

    assert!(output.status.success(), "Print config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: HashMap<String, serde_json::Value> =
        serde_saphyr::from_str(&stdout).expect("Output should be valid YAML");

    assert_eq!(parsed["server"]["bind_addr"], "127.0.0.1:9191");
    assert_eq!(parsed["calculator"]["max_fibonacci_index"], 92);
    assert_eq!(parsed["logging"]["level"], "info");
}

#[test]
fn test_cli_env_overrides_config() {
    let output = run_calculator_server_with_env(
        &["--print-config", "-vv"],
        &[
            ("APP__SERVER__BIND_ADDR", "0.0.0.0:7070"),
            ("APP__CALCULATOR__MAX_FIBONACCI_INDEX", "30"),
        ],
    );

    assert!(output.status.success(), "Print config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: HashMap<String, serde_json::Value> =
        serde_saphyr::from_str(&stdout).expect("Output should be valid YAML");

    assert_eq!(parsed["server"]["bind_addr"], "0.0.0.0:7070");
    assert_eq!(parsed["calculator"]["max_fibonacci_index"], 30);
    assert_eq!(parsed["logging"]["level"], "debug");
}

/// Spawn `calculator-server run` on an ephemeral port and wait until it has
/// bound its listener.
async fn spawn_running_server() -> tokio::process::Child {
    let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(["--port", "0", "run"])
        .env_remove("RUST_LOG")
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true) // Ensure process is killed if dropped
        .spawn()
        .expect("Failed to spawn calculator-server");

    let stderr = child.stderr.take().expect("stderr is piped");
    let mut lines = BufReader::new(stderr).lines();
    let bound = timeout(Duration::from_secs(10), async {
        while let Some(line) = lines.next_line().await.expect("Failed to read stderr") {
            if line.contains("HTTP server bound") {
                return true;
            }
        }
        false
    })
    .await
    .expect("Server did not bind within 10s");
    assert!(bound, "Server exited before binding");

    // Keep draining so the server never writes into a closed pipe.
    tokio::spawn(async move { while let Ok(Some(_)) = lines.next_line().await {} });

    child
}

#[tokio::test]
async fn test_cli_run_keeps_serving_until_stopped() {
    let mut child = spawn_running_server().await;

    // A healthy server never exits on its own.
    let result = timeout(Duration::from_secs(2), child.wait()).await;
    assert!(result.is_err(), "Server exited early: {result:?}");
}

#[cfg(unix)]
#[tokio::test]
async fn test_cli_run_exits_cleanly_on_sigterm() {
    let mut child = spawn_running_server().await;

    // Give the serve loop time to install its signal handlers.
    tokio::time::sleep(Duration::from_secs(1)).await;

    let pid = child.id().expect("Server should still be running").to_string();
    let kill = Command::new("kill")
        .args(["-TERM", &pid])
        .status()
        .expect("Failed to run kill");
    assert!(kill.success(), "kill -TERM should succeed");

    let status = timeout(Duration::from_secs(10), child.wait())
        .await
        .expect("Server did not shut down within 10s")
        .expect("Failed to wait for server");
    assert!(status.success(), "Graceful shutdown should exit 0: {status:?}");
}
