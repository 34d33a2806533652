//! Golden tests for privscan
//!
//! These tests run the binary over `tests/fixtures/sample_tree` and compare the
//! exact stderr/stdout against expected output, so the warning format and the
//! traversal order stay stable across versions.

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the sample tree
fn sample_tree() -> PathBuf {
    fixtures_dir().join("sample_tree")
}

/// Create a command for running the privscan binary
fn privscan_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("privscan"))
}

const EXPECTED_WARNINGS: &str = "./a.cpp should not be here\n\
./include/detail/impl.h should not be here\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_default_run_from_tree() {
        let output = privscan_cmd()
            .current_dir(sample_tree())
            .output()
            .expect("failed to execute");

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stderr), EXPECTED_WARNINGS);
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn golden_explicit_dot_root_matches_default() {
        let output = privscan_cmd()
            .current_dir(sample_tree())
            .arg(".")
            .output()
            .expect("failed to execute");

        assert_eq!(String::from_utf8_lossy(&output.stderr), EXPECTED_WARNINGS);
    }

    #[test]
    fn golden_paths_are_prefixed_with_given_root() {
        let output = privscan_cmd()
            .current_dir(fixtures_dir())
            .arg("sample_tree")
            .output()
            .expect("failed to execute");

        assert_eq!(
            String::from_utf8_lossy(&output.stderr),
            "sample_tree/a.cpp should not be here\n\
sample_tree/include/detail/impl.h should not be here\n"
        );
    }

    #[test]
    fn golden_json_report() {
        let output = privscan_cmd()
            .current_dir(sample_tree())
            .arg("--format")
            .arg("json")
            .arg("--quiet")
            .output()
            .expect("failed to execute");

        assert!(output.status.success());
        assert!(output.stderr.is_empty());

        let report: Value =
            serde_json::from_slice(&output.stdout).expect("stdout is a json document");
        assert_eq!(report["root"], ".");
        assert_eq!(report["entries_visited"], 15);
        assert_eq!(report["files_checked"], 7);
        assert!(report.get("skipped").is_none());

        let findings: Vec<(&str, &str)> = report["findings"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| (f["path"].as_str().unwrap(), f["line"].as_str().unwrap()))
            .collect();
        assert_eq!(
            findings,
            vec![
                ("./a.cpp", "// PRIVATE section"),
                ("./include/detail/impl.h", "int hidden(); // PRIVATE helpers"),
            ]
        );
    }

    #[test]
    fn golden_output_is_idempotent() {
        let run = || {
            privscan_cmd()
                .current_dir(sample_tree())
                .arg("--format")
                .arg("jsonl")
                .output()
                .expect("failed to execute")
        };

        let first = run();
        let second = run();
        assert_eq!(first.stdout, second.stdout);
        assert_eq!(first.stderr, second.stderr);
    }
}
