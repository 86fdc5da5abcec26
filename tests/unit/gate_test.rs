//! Integration tests for the gate's exit-code contract
//!
//! These cover the observable properties of a gate run: normalization of
//! linter failures, halting before the linter on setup errors, idempotence,
//! and the JSON report shape.

use assert_cmd::cargo;
use predicates::prelude::*;
use serial_test::serial;

use crate::common::{LINTER_MARKER, ProjectBuilder};

fn lintgate() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("lintgate"))
}

#[test]
#[cfg(unix)]
#[serial]
fn test_linter_pass_exits_zero() {
    let temp = ProjectBuilder::new().linter_exit(0).build();

    lintgate()
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("PASS"));

    assert!(temp.path().join(LINTER_MARKER).exists());
}

#[test]
#[cfg(unix)]
#[serial]
fn test_linter_failure_exits_one() {
    let temp = ProjectBuilder::new().linter_exit(1).build();

    lintgate()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
#[cfg(unix)]
#[serial]
fn test_any_linter_status_normalizes_to_one() {
    for code in [2, 42, 127] {
        let temp = ProjectBuilder::new().linter_exit(code).build();

        lintgate().current_dir(temp.path()).assert().code(1);
    }
}

#[test]
#[cfg(unix)]
#[serial]
fn test_explicit_run_subcommand() {
    let temp = ProjectBuilder::new().linter_exit(0).build();

    lintgate().arg("run").current_dir(temp.path()).assert().code(0);
}

#[test]
#[serial]
fn test_missing_project_dir_halts_before_linter() {
    let temp = ProjectBuilder::new()
        .config("[project]\ndir = \"gone\"\n")
        .build();

    lintgate()
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("project directory not found"));

    // The configured directory never existed, so the linter cannot have run
    assert!(!temp.path().join(LINTER_MARKER).exists());
}

#[test]
#[serial]
fn test_missing_venv_halts_before_linter() {
    let temp = ProjectBuilder::new().no_venv().build();

    lintgate()
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("virtual environment not found"));

    assert!(!temp.path().join(LINTER_MARKER).exists());
}

#[test]
#[cfg(unix)]
#[serial]
fn test_corrupt_venv_halts_before_linter() {
    let temp = ProjectBuilder::new().corrupt_venv().build();

    lintgate()
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("corrupt"));

    assert!(!temp.path().join(LINTER_MARKER).exists());
}

#[test]
#[cfg(unix)]
#[serial]
fn test_gate_is_idempotent() {
    let temp = ProjectBuilder::new().linter_exit(1).build();

    lintgate().current_dir(temp.path()).assert().code(1);
    lintgate().current_dir(temp.path()).assert().code(1);
}

#[test]
#[cfg(unix)]
#[serial]
fn test_json_report_on_pass() {
    let temp = ProjectBuilder::new().linter_exit(0).build();

    let output = lintgate().arg("--json").current_dir(temp.path()).assert().code(0);
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["passed"], true);
    assert_eq!(json["raw_status"], 0);
    assert!(json["finished_at"].is_string());
}

#[test]
#[cfg(unix)]
#[serial]
fn test_json_report_on_failure_keeps_raw_status() {
    let temp = ProjectBuilder::new().linter_exit(127).build();

    let output = lintgate().arg("--json").current_dir(temp.path()).assert().code(1);
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["passed"], false);
    assert_eq!(json["raw_status"], 127);
}

#[test]
#[serial]
fn test_json_setup_error() {
    let temp = ProjectBuilder::new().no_venv().build();

    let output = lintgate().arg("--json").current_dir(temp.path()).assert().code(2);
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["success"], false);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains("virtual environment not found")
    );
}

#[test]
#[cfg(unix)]
#[serial]
fn test_configured_linter_program_is_used() {
    let temp = ProjectBuilder::new()
        .linter_exit(0)
        .config("[linter]\nprogram = \"flake8\"\nargs = [\".\"]\n")
        .build();

    lintgate().current_dir(temp.path()).assert().code(0);
    assert!(temp.path().join(LINTER_MARKER).exists());
}
