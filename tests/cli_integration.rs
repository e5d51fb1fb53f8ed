//! Integration tests for the `tk` CLI.
//!
//! Each test points `tk` at a temp store directory with `-C`, runs it as a
//! subprocess, and verifies stdout and/or the prefs file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Get the path to the built `tk` binary.
fn tk_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tk");
    path
}

/// Run `tk` against the given store dir, returning (stdout, stderr, success).
fn run_tk(store_dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(tk_bin())
        .arg("-C")
        .arg(store_dir)
        .args(args)
        .output()
        .expect("failed to run tk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn list_on_a_fresh_store_prints_no_tasks() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_tk(dir.path(), &["list"]);
    assert!(ok);
    assert_eq!(stdout, "no tasks\n");
}

#[test]
fn add_then_list() {
    let dir = TempDir::new().unwrap();

    let (stdout, _, ok) = run_tk(dir.path(), &["add", "Buy milk"]);
    assert!(ok);
    assert_eq!(stdout, "[ ] 0 Buy milk\n");

    let (stdout, _, ok) = run_tk(dir.path(), &["add", "Read book"]);
    assert!(ok);
    assert_eq!(stdout, "[ ] 1 Read book\n");

    let (stdout, _, ok) = run_tk(dir.path(), &["list"]);
    assert!(ok);
    assert_eq!(stdout, "[ ] 0 Buy milk\n[ ] 1 Read book\n");
}

#[test]
fn add_empty_title_is_a_silent_no_op() {
    let dir = TempDir::new().unwrap();

    let (stdout, stderr, ok) = run_tk(dir.path(), &["add", ""]);
    assert!(ok);
    assert!(stdout.is_empty());
    assert!(stderr.is_empty());

    let (stdout, _, _) = run_tk(dir.path(), &["list"]);
    assert_eq!(stdout, "no tasks\n");
}

#[test]
fn toggle_flips_and_flips_back() {
    let dir = TempDir::new().unwrap();
    run_tk(dir.path(), &["add", "Wash dishes"]);

    let (stdout, _, ok) = run_tk(dir.path(), &["toggle", "0"]);
    assert!(ok);
    assert_eq!(stdout, "[x] 0 Wash dishes\n");

    let (stdout, _, ok) = run_tk(dir.path(), &["toggle", "0"]);
    assert!(ok);
    assert_eq!(stdout, "[ ] 0 Wash dishes\n");
}

#[test]
fn rm_shifts_later_tasks_down() {
    let dir = TempDir::new().unwrap();
    run_tk(dir.path(), &["add", "A"]);
    run_tk(dir.path(), &["add", "B"]);
    run_tk(dir.path(), &["add", "C"]);

    let (stdout, _, ok) = run_tk(dir.path(), &["rm", "1"]);
    assert!(ok);
    assert_eq!(stdout, "removed 1: B\n");

    let (stdout, _, _) = run_tk(dir.path(), &["list"]);
    assert_eq!(stdout, "[ ] 0 A\n[ ] 1 C\n");
}

#[test]
fn mv_moves_first_to_last() {
    let dir = TempDir::new().unwrap();
    run_tk(dir.path(), &["add", "A"]);
    run_tk(dir.path(), &["add", "B"]);
    run_tk(dir.path(), &["add", "C"]);

    let (stdout, _, ok) = run_tk(dir.path(), &["mv", "0", "2"]);
    assert!(ok);
    assert_eq!(stdout, "[ ] 0 B\n[ ] 1 C\n[ ] 2 A\n");
}

#[test]
fn out_of_range_index_fails_with_an_error() {
    let dir = TempDir::new().unwrap();
    run_tk(dir.path(), &["add", "Only"]);

    let (_, stderr, ok) = run_tk(dir.path(), &["toggle", "5"]);
    assert!(!ok);
    assert!(stderr.contains("index out of range"));

    let (_, stderr, ok) = run_tk(dir.path(), &["rm", "1"]);
    assert!(!ok);
    assert!(stderr.contains("index out of range"));

    // Nothing was mutated
    let (stdout, _, _) = run_tk(dir.path(), &["list"]);
    assert_eq!(stdout, "[ ] 0 Only\n");
}

#[test]
fn json_list_output() {
    let dir = TempDir::new().unwrap();
    run_tk(dir.path(), &["add", "Buy milk"]);
    run_tk(dir.path(), &["toggle", "0"]);

    let (stdout, _, ok) = run_tk(dir.path(), &["list", "--json"]);
    assert!(ok);
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["tasks"][0]["index"], 0);
    assert_eq!(doc["tasks"][0]["title"], "Buy milk");
    assert_eq!(doc["tasks"][0]["done"], true);
}

#[test]
fn json_add_prints_the_resulting_list() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_tk(dir.path(), &["add", "A", "--json"]);
    assert!(ok);
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["tasks"].as_array().unwrap().len(), 1);
}

#[test]
fn path_prints_the_store_dir() {
    let dir = TempDir::new().unwrap();
    let (stdout, _, ok) = run_tk(dir.path(), &["path"]);
    assert!(ok);
    assert_eq!(stdout.trim_end(), dir.path().display().to_string());
}

#[test]
fn malformed_persisted_records_are_skipped() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("prefs.json"),
        r#"{"tasks": [
            {"title": "Kept", "done": false},
            {"title": "no flag"},
            {"done": true}
        ]}"#,
    )
    .unwrap();

    let (stdout, _, ok) = run_tk(dir.path(), &["list"]);
    assert!(ok);
    assert_eq!(stdout, "[ ] 0 Kept\n");
}

#[test]
fn store_survives_across_invocations() {
    let dir = TempDir::new().unwrap();
    run_tk(dir.path(), &["add", "Persisted"]);
    run_tk(dir.path(), &["toggle", "0"]);

    // A brand new process restores exactly what was written
    let (stdout, _, _) = run_tk(dir.path(), &["list"]);
    assert_eq!(stdout, "[x] 0 Persisted\n");
}
