// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Run logsift with the given arguments and no color
pub fn run_logsift(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_logsift"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute logsift");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Run logsift over a directory
pub fn run_logsift_on(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let mut full_args = args.to_vec();
    let dir = dir.to_str().expect("temp path is UTF-8");
    full_args.push(dir);
    run_logsift(&full_args)
}

/// Create a temp directory holding the given `(name, content)` files
pub fn log_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (name, content) in files {
        write_file(dir.path(), name, content.as_bytes());
    }
    dir
}

pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Generate `count` well-formed lines cycling through the levels
pub fn generated_lines(prefix: &str, count: usize) -> String {
    const LEVELS: [&str; 4] = ["DEBUG", "INFO", "WARN", "ERROR"];
    let mut out = String::new();
    for i in 0..count {
        out.push_str(&format!(
            "[2025-08-12T10:{:02}:{:02}] [{}] - {} event {}\n",
            (i / 60) % 60,
            i % 60,
            LEVELS[i % LEVELS.len()],
            prefix,
            i
        ));
    }
    out
}
