//! Integration tests for the graphwalk CLI
//!
//! These tests run the graphwalk binary against edge-list files.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{graphwalk, write_edges, DIAMOND, LOPSIDED};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    let dir = tempdir().unwrap();
    graphwalk(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphwalk"))
        .stdout(predicate::str::contains("reach"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("component"));
}

#[test]
fn test_version_flag() {
    let dir = tempdir().unwrap();
    graphwalk(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("graphwalk"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    graphwalk(&dir)
        .args(["--format", "yaml", "nodes"])
        .arg(&file)
        .assert()
        .code(2);
}

#[test]
fn test_unknown_mode_json_usage_error() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    graphwalk(&dir)
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["A", "C", "--mode", "astar"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_file_exit_code_3() {
    let dir = tempdir().unwrap();
    graphwalk(&dir)
        .args(["nodes", "does-not-exist.txt"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_malformed_line_exit_code_3() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", "A B\nB C D\n");
    graphwalk(&dir)
        .arg("nodes")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed edge record 2"));
}

#[test]
fn test_unknown_node_json_error() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    graphwalk(&dir)
        .args(["--format", "json", "reach"])
        .arg(&file)
        .args(["A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"node_not_found\""));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_nodes_lists_all_names() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", "X Y\n");
    graphwalk(&dir)
        .args(["--quiet", "nodes"])
        .arg(&file)
        .assert()
        .success()
        .stdout("X\nY\n");
}

#[test]
fn test_nodes_json() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    let output = graphwalk(&dir)
        .args(["--format", "json", "nodes"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 4);
    assert_eq!(json["nodes"], serde_json::json!(["A", "B", "C", "D"]));
}

#[test]
fn test_show_adjacency() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    graphwalk(&dir)
        .arg("show")
        .arg(&file)
        .assert()
        .success()
        .stdout("A: B D\nB: A C\nC: B D\nD: A C\n");
}

#[test]
fn test_neighbors() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    graphwalk(&dir)
        .arg("neighbors")
        .arg(&file)
        .arg("C")
        .assert()
        .success()
        .stdout("B\nD\n");
}

#[test]
fn test_reach_connected_and_disconnected() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", "A B\nC D\n");
    graphwalk(&dir)
        .arg("reach")
        .arg(&file)
        .args(["A", "B"])
        .assert()
        .success()
        .stdout("A can reach B\n");

    graphwalk(&dir)
        .arg("reach")
        .arg(&file)
        .args(["A", "D", "--mode", "bfs"])
        .assert()
        .success()
        .stdout("A cannot reach D\n");
}

#[test]
fn test_path_bfs_is_shortest() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", LOPSIDED);
    graphwalk(&dir)
        .args(["--quiet", "path"])
        .arg(&file)
        .args(["A", "F", "--mode", "bfs"])
        .assert()
        .success()
        .stdout("A -> C -> F\n");
}

#[test]
fn test_path_dfs() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", LOPSIDED);
    graphwalk(&dir)
        .arg("path")
        .arg(&file)
        .args(["A", "F", "--mode", "dfs"])
        .assert()
        .success()
        .stdout("A -> B -> D -> E -> F\n(4 hops, dfs)\n");
}

#[test]
fn test_path_not_found_is_success() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", "A B\nC D\n");
    graphwalk(&dir)
        .arg("path")
        .arg(&file)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from A to D"));
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    let output = graphwalk(&dir)
        .args(["--format", "json", "path"])
        .arg(&file)
        .args(["A", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["mode"], "bfs");
    assert_eq!(json["path_length"], 2);
    assert_eq!(json["nodes"], serde_json::json!(["A", "B", "C"]));
}

#[test]
fn test_path_records() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    graphwalk(&dir)
        .args(["--format", "records", "path"])
        .arg(&file)
        .args(["A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphwalk=1 records=1 mode=path from=A to=C search=bfs found=true length=2\n",
        ))
        .stdout(predicate::str::contains("E \"B\" \"C\""));
}

#[test]
fn test_component() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", "A B\nB C\nX Y\n");
    graphwalk(&dir)
        .args(["--quiet", "component"])
        .arg(&file)
        .arg("B")
        .assert()
        .success()
        .stdout("B\nA (hop 1 via B)\nC (hop 1 via B)\n");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_sets_default_mode() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[search]\nmode = \"dfs\"\n").unwrap();
    let file = write_edges(&dir, "g.txt", LOPSIDED);
    graphwalk(&dir)
        .args(["--quiet", "path"])
        .arg(&file)
        .args(["A", "F"])
        .assert()
        .success()
        .stdout("A -> B -> D -> E -> F\n");
}

#[test]
fn test_explicit_config_comment_prefix() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("walk.toml");
    fs::write(&config, "[input]\ncomment_prefix = \"#\"\n").unwrap();
    let file = write_edges(&dir, "g.txt", "# prerequisites\nA B\n");
    graphwalk(&dir)
        .args(["--quiet", "--config"])
        .arg(&config)
        .arg("nodes")
        .arg(&file)
        .assert()
        .success()
        .stdout("A\nB\n");
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();
    let file = write_edges(&dir, "g.txt", DIAMOND);
    graphwalk(&dir)
        .args(["--config", "absent.toml", "nodes"])
        .arg(&file)
        .assert()
        .code(3);
}
