//! End-to-end tests for the spm-helper CLI
//!
//! These tests verify (without touching the network):
//! - `generate` prints the exact manifest line
//! - Invalid commit hashes produce the fixed message and exit code 2
//! - JSON output schema
//! - Configuration and input errors are reported before any request

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn spm_helper() -> Command {
    Command::cargo_bin("spm-helper").expect("binary should be built")
}

mod generate_tests {
    use super::*;

    #[test]
    fn test_generate_exact() {
        spm_helper()
            .args([
                "generate",
                "https://github.com/a/b.git",
                "--kind",
                "exact",
                "--version",
                "1.2.3",
            ])
            .assert()
            .success()
            .stdout(".package(url: \"https://github.com/a/b.git\", .exact(\"1.2.3\")),\n");
    }

    #[test]
    fn test_generate_default_kind() {
        spm_helper()
            .args(["generate", "https://github.com/a/b.git", "--version", "2.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains(".upToNextMajor(from: \"2.0.0\")"));
    }

    #[test]
    fn test_generate_open_range() {
        spm_helper()
            .args([
                "generate",
                "https://github.com/a/b.git",
                "-k",
                "open-range",
                "--lower",
                "1.0.0",
                "--upper",
                "2.0.0",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"1.0.0\"..<\"2.0.0\"),"));
    }

    #[test]
    fn test_generate_sanitizes_input() {
        spm_helper()
            .args([
                "generate",
                "https://github.com/a/b.git",
                "--kind",
                "branch",
                "--branch",
                "  \"feature\"\n",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(".branch(\"feature\")),"));
    }

    #[test]
    fn test_generate_valid_revision() {
        spm_helper()
            .args([
                "generate",
                "https://github.com/a/b.git",
                "--kind",
                "revision",
                "--revision",
                "deadbeef",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(".revision(\"deadbeef\")),"));
    }

    #[test]
    fn test_generate_invalid_revision() {
        spm_helper()
            .args([
                "generate",
                "https://github.com/a/b.git",
                "--kind",
                "revision",
                "--revision",
                "abc123 def456",
            ])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Invalid commit hash!"));
    }

    #[test]
    fn test_generate_json() {
        let output = spm_helper()
            .args([
                "generate",
                "https://github.com/a/b.git",
                "--kind",
                "closed-range",
                "--lower",
                "1.0.0",
                "--upper",
                "1.9.9",
                "--json",
            ])
            .output()
            .expect("Failed to execute command");

        assert!(output.status.success());
        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
        assert_eq!(json["url"], "https://github.com/a/b.git");
        assert_eq!(json["constraint"]["kind"], "closed-range");
        assert_eq!(json["constraint"]["lower"], "1.0.0");
        assert_eq!(
            json["entry"],
            ".package(url: \"https://github.com/a/b.git\", \"1.0.0\"...\"1.9.9\"),"
        );
    }

    #[test]
    fn test_generate_unknown_kind() {
        spm_helper()
            .args(["generate", "https://github.com/a/b.git", "--kind", "caret"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value 'caret'"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_invalid_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spm-helper.toml");
        fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();

        spm_helper()
            .args(["--config", path.to_str().unwrap()])
            .args(["generate", "u", "--version", "1.0.0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to parse TOML"));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        spm_helper()
            .args(["--config", path.to_str().unwrap(), "tags", "a/b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read config file"));
    }

    #[test]
    fn test_invalid_api_url_override() {
        spm_helper()
            .args(["--api-url", "ftp://example.com", "search", "vapor"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value for 'api_url'"));
    }

    #[test]
    fn test_valid_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spm-helper.toml");
        fs::write(&path, "language = \"swift\"\ntimeout_secs = 10\n").unwrap();

        spm_helper()
            .args(["--config", path.to_str().unwrap()])
            .args(["generate", "https://github.com/a/b.git", "-k", "from", "--version", "1.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("from: \"1.0.0\"),"));
    }
}

mod offline_errors {
    use super::*;

    #[test]
    fn test_blank_search_query() {
        spm_helper()
            .args(["search", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not be searched for"));
    }

    #[test]
    fn test_tags_for_bad_repository() {
        spm_helper()
            .args(["tags", "not-a-repository"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not be used to find any releases"));
    }

    #[test]
    fn test_help_lists_subcommands() {
        spm_helper()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("search"))
            .stdout(predicate::str::contains("tags"))
            .stdout(predicate::str::contains("generate"))
            .stdout(predicate::str::contains("add"));
    }
}
