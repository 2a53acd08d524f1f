//! Integration tests for the `modboard` CLI binary.
//!
//! Argument parsing, help output, completions, demo-mode output, and
//! exit codes against a mock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `modboard` binary with env isolation.
///
/// Clears all `MODBOARD_*` env vars and points the config file at a
/// nonexistent path so tests never touch the user's real configuration.
fn modboard_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("modboard");
    cmd.env("HOME", "/tmp/modboard-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/modboard-cli-test-nonexistent")
        .env(
            "MODBOARD_CONFIG",
            "/tmp/modboard-cli-test-nonexistent/config.toml",
        )
        .env("NO_COLOR", "1")
        .env_remove("MODBOARD_PROFILE")
        .env_remove("MODBOARD_SERVER")
        .env_remove("MODBOARD_SESSION")
        .env_remove("MODBOARD_OUTPUT")
        .env_remove("MODBOARD_INSECURE")
        .env_remove("MODBOARD_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

async fn mock_backend(is_admin: bool) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/_user"))
        .and(header("cookie", "SID=test-session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1", "username": "moderator", "isAdmin": is_admin,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": 7, "posts": 8, "comments": 9,
        })))
        .mount(&server)
        .await;
    server
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = modboard_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    modboard_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("stats")
            .and(predicate::str::contains("recent"))
            .and(predicate::str::contains("whoami")),
    );
}

#[test]
fn test_version_flag() {
    modboard_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modboard"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_zsh() {
    modboard_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_bash() {
    modboard_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Demo mode ───────────────────────────────────────────────────────

#[test]
fn test_demo_stats_json() {
    let output = modboard_cmd()
        .args(["--demo", "stats", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, json!({ "users": 100, "posts": 200, "comments": 300 }));
}

#[test]
fn test_demo_stats_table() {
    modboard_cmd()
        .args(["--demo", "stats"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total Users")
                .and(predicate::str::contains("Total Comments"))
                .and(predicate::str::contains("300")),
        );
}

#[test]
fn test_demo_recent_single_kind_plain() {
    modboard_cmd()
        .args(["--demo", "recent", "--kind", "posts", "-o", "plain"])
        .assert()
        .success()
        .stdout("1\tPost One\n2\tPost Two\n");
}

#[test]
fn test_demo_recent_json_keeps_order() {
    let output = modboard_cmd()
        .args(["--demo", "recent", "-o", "json-compact"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["users"][0]["name"], "User One");
    assert_eq!(value["comments"][1]["content"], "Comment Two");
}

#[test]
fn test_quiet_suppresses_output() {
    modboard_cmd()
        .args(["--demo", "-q", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = modboard_cmd().arg("foobar").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_stats_without_server_fails() {
    let output = modboard_cmd().arg("stats").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(text.contains("No server configured"), "{text}");
}

#[test]
fn test_stats_without_session_is_auth_error() {
    let output = modboard_cmd()
        .args(["--server", "http://127.0.0.1:9", "stats"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_unreachable_server_is_connection_error() {
    let output = modboard_cmd()
        .args([
            "--server",
            "http://127.0.0.1:9",
            "--session",
            "abc",
            "stats",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7), "{}", combined_output(&output));
}

#[test]
fn test_invalid_server_url_is_usage_error() {
    let output = modboard_cmd()
        .args(["--server", "not a url", "--session", "abc", "stats"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Against a mock server ───────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_admin_stats_from_server() {
    let server = mock_backend(true).await;
    let output = modboard_cmd()
        .args([
            "--server",
            &server.uri(),
            "--session",
            "test-session",
            "stats",
            "-o",
            "plain",
        ])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "users\t7\nposts\t8\ncomments\t9\n"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_non_admin_is_permission_error() {
    let server = mock_backend(false).await;
    let output = modboard_cmd()
        .args([
            "--server",
            &server.uri(),
            "--session",
            "test-session",
            "stats",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(5));
    assert!(combined_output(&output).contains("not an admin"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_works_for_non_admin() {
    let server = mock_backend(false).await;
    modboard_cmd()
        .args([
            "--server",
            &server.uri(),
            "--session",
            "test-session",
            "whoami",
            "-o",
            "plain",
        ])
        .assert()
        .success()
        .stdout("moderator\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_expired_session_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/_user"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let output = modboard_cmd()
        .args(["--server", &server.uri(), "--session", "stale", "whoami"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_profiles_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "default_profile = \"prod\"\n\n[profiles.prod]\nserver = \"https://forum.test\"\nsession = \"secret\"\n\n[profiles.staging]\nserver = \"https://staging.forum.test\"\n",
    )
    .unwrap();

    modboard_cmd()
        .env("MODBOARD_CONFIG", &path)
        .args(["config", "profiles"])
        .assert()
        .success()
        .stdout("prod *\nstaging\n");

    modboard_cmd()
        .env("MODBOARD_CONFIG", &path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("****").and(predicate::str::contains("secret").not()));
}

#[test]
fn test_config_use_unknown_profile() {
    let output = modboard_cmd()
        .args(["config", "use", "missing"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("missing"));
}

#[test]
fn test_malformed_config_is_reported_and_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let contents = "[defaults]\ntimeout = \"soon\"\n\n[profiles.default]\nserver = \"https://forum.test\"\nsession = \"secret\"\n";
    std::fs::write(&path, contents).unwrap();

    let output = modboard_cmd()
        .env("MODBOARD_CONFIG", &path)
        .arg("stats")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(
        text.contains("Could not read configuration"),
        "Expected a config parse diagnostic:\n{text}"
    );
    assert!(text.contains("soon"), "Expected the bad value:\n{text}");
    assert!(!text.contains("No server configured"), "{text}");

    for args in [&["config", "init"][..], &["config", "use", "default"][..]] {
        let output = modboard_cmd()
            .env("MODBOARD_CONFIG", &path)
            .args(args)
            .output()
            .unwrap();
        assert!(!output.status.success(), "{args:?} should fail");
        assert!(combined_output(&output).contains("Could not read configuration"));
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);
}
