use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get a Command for graphwalk with an isolated config directory
pub fn graphwalk(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("graphwalk");
    cmd.env("GRAPHWALK_CONFIG_DIR", config_dir.path());
    cmd.env_remove("GRAPHWALK_LOG_LEVEL");
    cmd
}

/// Write an edge list into `dir` and return its path
pub fn write_edges(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// A-B, B-C, A-D, D-C
#[allow(dead_code)]
pub const DIAMOND: &str = "A B\nB C\nA D\nD C\n";

/// Short route A-C-F and a long one A-B-D-E-F that DFS explores first
#[allow(dead_code)]
pub const LOPSIDED: &str = "A C\nA B\nB D\nD E\nE F\nC F\n";
