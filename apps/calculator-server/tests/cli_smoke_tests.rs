#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for calculator-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output and serving HTTP.

use std::process::{Command, Stdio};
use std::time::Duration;

use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Helper to run the calculator-server binary with given arguments
fn run_calculator_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute calculator-server")
}

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("calculator.yaml");
    std::fs::write(&path, contents).expect("Failed to write config");
    path.to_string_lossy().into_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_calculator_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    for needle in ["run", "check", "openapi", "--config", "--port", "--print-config"] {
        assert!(stdout.contains(needle), "Help should mention {needle}");
    }
}

#[test]
fn test_cli_version_command() {
    let output = run_calculator_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("calculator-server"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_calculator_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "Should report the invalid command: {stderr}");
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_calculator_server(&["--config", "/nonexistent/calculator.yaml", "check"]);

    assert!(
        !output.status.success(),
        "Should fail when config file doesn't exist"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config file does not exist: /nonexistent/calculator.yaml"),
        "Should name the missing file: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_unknown_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir, "server:\n  prot: 9000\n");

    let output = run_calculator_server(&["--config", &config, "check"]);

    assert!(!output.status.success(), "Unknown keys should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load configuration"), "{stderr}");
}

#[test]
fn test_cli_check_prints_effective_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir, "server:\n  port: 9100\nlogging:\n  level: warn\n");

    let output = run_calculator_server(&["--config", &config, "--port", "9200", "check"]);

    assert!(output.status.success(), "Check should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let (status_line, json) = stdout.split_once('\n').unwrap();
    assert_eq!(status_line, "Configuration is valid");

    let effective: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(effective["server"]["port"], 9200);
    assert_eq!(effective["server"]["host"], "127.0.0.1");
    assert_eq!(effective["logging"]["level"], "warn");
}

#[test]
fn test_cli_bundled_sample_config_is_valid() {
    let sample = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/calculator.yaml");
    let output = run_calculator_server(&["--config", sample, "check"]);

    assert!(
        output.status.success(),
        "sample config should validate: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn test_cli_print_config_applies_env_and_verbosity() {
    let output = Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(["--print-config", "-vv"])
        .env("CALCULATOR__SERVER__PORT", "9300")
        .output()
        .expect("Failed to execute calculator-server");

    assert!(output.status.success());
    let effective: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(effective["server"]["port"], 9300);
    assert_eq!(effective["logging"]["level"], "debug");
    assert_eq!(effective["api_gateway"]["openapi"]["title"], "Calculator API");
}

#[test]
fn test_cli_openapi_lists_both_endpoints() {
    let output = run_calculator_server(&["openapi"]);

    assert!(output.status.success(), "openapi should succeed");
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["info"]["title"], "Calculator API");
    assert_eq!(doc["info"]["version"], "1.0.0");
    assert!(doc.pointer("/paths/~1health/get").is_some());
    assert!(doc.pointer("/paths/~1calculate/post").is_some());
}

#[tokio::test]
async fn test_cli_run_serves_http() {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let mut child = tokio::process::Command::new(env!("CARGO_BIN_EXE_calculator-server"))
        .args(["--port", &port.to_string(), "run"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn calculator-server");

    let addr = format!("127.0.0.1:{port}");
    let mut stream = None;
    for _ in 0..100 {
        if let Ok(s) = TcpStream::connect(&addr).await {
            stream = Some(s);
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    let mut stream = stream.expect("server did not start listening");

    let body = r#"{"operation":"multiply","a":6,"b":7}"#;
    let request = format!(
        "POST /calculate HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut raw = String::new();
    stream.read_to_string(&mut raw).await.unwrap();

    assert!(raw.starts_with("HTTP/1.1 200"), "unexpected response: {raw}");
    assert!(raw.contains(r#""result":42.0"#), "unexpected response: {raw}");
    assert!(raw.to_ascii_lowercase().contains("x-request-id:"));

    child.kill().await.unwrap();
}
