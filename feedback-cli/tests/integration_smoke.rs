//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn feedback() -> Command {
    let mut cmd = Command::cargo_bin("feedback").unwrap();
    cmd.env_remove("DATABASE_URL");
    cmd
}

#[test]
fn test_help_lists_commands() {
    feedback()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check-db"));
}

#[test]
fn test_serve_help() {
    feedback()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--init-schema"));
}

#[test]
fn test_serve_without_database_url_fails() {
    feedback()
        .arg("serve")
        .arg("--port")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL is not set"));
}

#[test]
fn test_check_db_without_database_url_fails() {
    feedback()
        .arg("check-db")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL is not set"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    feedback()
        .args(["serve", "--bind", "not-an-ip", "--database-url", "postgres://localhost/feedback"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bind address"));
}

#[test]
fn test_serve_rejects_zero_timeout() {
    feedback()
        .args(["serve", "--timeout", "0", "--database-url", "postgres://localhost/feedback"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("request timeout must be at least 1 second"));
}
