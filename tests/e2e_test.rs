//! End-to-end tests for the CLI
//!
//! Network-free: every resolution runs against an on-disk snapshot fixture
//! through `--snapshot`.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// demo -> {left, right}, left -> {leaf}, right -> {leaf}, leaf -> {}
fn write_diamond_snapshot(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{
  "demo@1.0": ["left", "right"],
  "leaf@1.0": [],
  "left@1.0": ["leaf"],
  "right@1.0": ["leaf"]
}"#,
    )
    .unwrap();
    path
}

fn crate_viz() -> Command {
    Command::cargo_bin("crate-viz").unwrap()
}

mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        crate_viz().arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        crate_viz().arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        crate_viz().arg("--invalid-option").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        crate_viz().args(["demo", "-f", "svg"]).assert().code(2);
    }

    /// Exit code 3: No package given anywhere
    #[test]
    fn test_exit_code_no_package() {
        let dir = TempDir::new().unwrap();
        crate_viz()
            .current_dir(dir.path())
            .assert()
            .code(3)
            .stderr(predicate::str::contains("No package specified"));
    }

    /// Exit code 3: Malformed package spec
    #[test]
    fn test_exit_code_bad_spec() {
        let dir = TempDir::new().unwrap();
        crate_viz()
            .current_dir(dir.path())
            .arg("demo@1.0@2.0")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid package spec"));
    }

    /// Exit code 3: Snapshot file missing
    #[test]
    fn test_exit_code_missing_snapshot() {
        let dir = TempDir::new().unwrap();
        crate_viz()
            .current_dir(dir.path())
            .args(["demo@1.0", "--snapshot", "/nonexistent/graph.json"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Snapshot file not found"));
    }
}

#[test]
fn test_e2e_dot_output_from_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("digraph dependencies {"))
        .stdout(predicate::str::contains(
            "\"demo@1.0\" [label=\"demo\\n1.0\", fillcolor=lightgreen];",
        ))
        .stdout(predicate::str::contains("\"demo@1.0\" -> \"left@1.0\";"))
        .stdout(predicate::str::contains("\"right@1.0\" -> \"leaf@1.0\";"));
}

#[test]
fn test_e2e_mermaid_output_from_snapshot() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "-f", "mermaid", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("graph TD"))
        .stdout(predicate::str::contains("demo@1.0"));
}

#[test]
fn test_e2e_depth_limit_excludes_deep_nodes() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "-d", "1", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("left@1.0"))
        .stdout(predicate::str::contains("leaf@1.0").not());
}

#[test]
fn test_e2e_filter_keeps_but_does_not_expand() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "-x", "LEAF", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(0)
        // Node still present, matched case-insensitively...
        .stdout(predicate::str::contains("\"leaf@1.0\""))
        // ...and the pruning is reported.
        .stderr(predicate::str::contains("matches exclusion filter"));
}

#[test]
fn test_e2e_load_order_reported_on_stderr() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Load order"))
        .stderr(predicate::str::contains("Discovered 4 package(s)"));
}

#[test]
fn test_e2e_dependents_of() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "--dependents-of", "leaf", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Packages depending on 'leaf'"))
        .stderr(predicate::str::contains("left@1.0"))
        .stderr(predicate::str::contains("right@1.0"));
}

#[test]
fn test_e2e_output_file() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);
    let output = dir.path().join("graph.dot");

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "--snapshot"])
        .arg(&snapshot)
        .arg("-o")
        .arg(&output)
        .assert()
        .code(0);

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("digraph dependencies {"));
}

#[test]
fn test_e2e_save_snapshot_round_trip() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);
    let saved = dir.path().join("saved.json");

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "--snapshot"])
        .arg(&snapshot)
        .arg("--save-snapshot")
        .arg(&saved)
        .assert()
        .code(0);

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&saved).unwrap()).unwrap();
    let object = raw.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(
        object["demo@1.0"],
        serde_json::json!(["left", "right"])
    );
}

#[test]
fn test_e2e_quiet_suppresses_node_chatter() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    crate_viz()
        .current_dir(dir.path())
        .args(["demo@1.0", "-q", "--snapshot"])
        .arg(&snapshot)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("📦").not())
        .stdout(predicate::str::contains("digraph dependencies {"));
}

#[test]
fn test_e2e_config_file_discovery() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    fs::write(
        dir.path().join("crate-viz.config.json"),
        format!(
            r#"{{
  "package": "demo",
  "version": "1.0",
  "format": "mermaid",
  "snapshot": "{}"
}}"#,
            snapshot.display()
        ),
    )
    .unwrap();

    crate_viz()
        .current_dir(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("graph TD"));
}

#[test]
fn test_e2e_cli_overrides_config_format() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);

    fs::write(
        dir.path().join("crate-viz.config.json"),
        format!(
            r#"{{"package": "demo", "version": "1.0", "format": "mermaid", "snapshot": "{}"}}"#,
            snapshot.display()
        ),
    )
    .unwrap();

    crate_viz()
        .current_dir(dir.path())
        .args(["-f", "dot"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("digraph dependencies {"));
}

#[test]
fn test_e2e_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let snapshot = write_diamond_snapshot(&dir);
    let config = dir.path().join("elsewhere.json");

    fs::write(
        &config,
        format!(
            r#"{{"package": "demo", "version": "1.0", "snapshot": "{}"}}"#,
            snapshot.display()
        ),
    )
    .unwrap();

    crate_viz()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("digraph dependencies {"));
}
