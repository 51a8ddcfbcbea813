//! Integration tests for the superlists binary
//!
//! Each test runs the compiled CLI against a database in a temporary
//! directory, with HOME pointed there as well so no real config is read.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

// =============================================================================
// Test Helpers
// =============================================================================

/// Builds a command that uses a private HOME and database.
fn superlists(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("superlists").expect("Binary should be built");
    cmd.env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .arg("--db")
        .arg(dir.path().join("test.db"));
    cmd
}

// =============================================================================
// Add / Show Tests
// =============================================================================

mod add_show_tests {
    use super::*;

    #[test]
    fn test_add_starts_new_list() {
        let dir = tempdir().unwrap();

        superlists(&dir)
            .args(["add", "Buy peacock feathers"])
            .assert()
            .success()
            .stdout(predicate::str::contains("list #1"))
            .stdout(predicate::str::contains("Buy peacock feathers"));
    }

    #[test]
    fn test_add_to_existing_list_then_show() {
        let dir = tempdir().unwrap();

        superlists(&dir).args(["add", "Buy peacock feathers"]).assert().success();
        superlists(&dir)
            .args(["add", "Use peacock feathers to make a fly", "--list", "1"])
            .assert()
            .success();

        superlists(&dir)
            .args(["show", "1"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1: Buy peacock feathers"))
            .stdout(predicate::str::contains("2: Use peacock feathers to make a fly"));
    }

    #[test]
    fn test_add_to_missing_list_fails() {
        let dir = tempdir().unwrap();

        superlists(&dir)
            .args(["add", "lost", "--list", "42"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("List 42 not found"));
    }

    #[test]
    fn test_show_missing_list_fails() {
        let dir = tempdir().unwrap();

        superlists(&dir)
            .args(["show", "7"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("List 7 not found"));
    }

    #[test]
    fn test_show_json() {
        let dir = tempdir().unwrap();
        superlists(&dir).args(["add", "json item"]).assert().success();

        let output = superlists(&dir)
            .args(["show", "1", "--format", "json"])
            .output()
            .expect("Failed to run show");
        assert!(output.status.success());

        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("Output should be JSON");
        assert_eq!(value["list"]["id"], 1);
        assert_eq!(value["items"][0]["text"], "json item");
        assert_eq!(value["items"][0]["list_id"], 1);
    }
}

// =============================================================================
// Status / Config Tests
// =============================================================================

mod status_tests {
    use super::*;

    #[test]
    fn test_status_empty_database() {
        let dir = tempdir().unwrap();

        superlists(&dir)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Lists:  0"))
            .stdout(predicate::str::contains("Items:  0"));
    }

    #[test]
    fn test_status_counts() {
        let dir = tempdir().unwrap();
        superlists(&dir).args(["add", "a"]).assert().success();
        superlists(&dir).args(["add", "b", "--list", "1"]).assert().success();
        superlists(&dir).args(["add", "c"]).assert().success();

        superlists(&dir)
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Lists:  2"))
            .stdout(predicate::str::contains("Items:  3"))
            .stdout(predicate::str::contains("Recent lists:"));
    }

    #[test]
    fn test_config_shows_database_override() {
        let dir = tempdir().unwrap();

        superlists(&dir)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("test.db"))
            .stdout(predicate::str::contains("127.0.0.1:8000"));
    }

    #[test]
    fn test_completions_bash() {
        let dir = tempdir().unwrap();

        superlists(&dir)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("superlists"));
    }
}
