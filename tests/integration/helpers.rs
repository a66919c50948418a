//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Output of one CLI run.
pub struct Run {
    pub stdout: String,
    pub stderr: String,
    pub code: i32,
}

/// A `colorized` command isolated from the user's environment: no config
/// file, no NO_COLOR, no log filter.
pub fn colorized_command(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_colorized"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("COLORIZED_LOG");
    cmd
}

/// Run colorized with `args` and capture its output.
pub fn run_colorized(args: &[&str]) -> Run {
    run_colorized_with_env(args, &[])
}

pub fn run_colorized_with_env(args: &[&str], envs: &[(&str, &str)]) -> Run {
    let home = TempDir::new().expect("Failed to create temp home");
    let output = colorized_command(&home)
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to execute colorized");

    Run {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    }
}

/// Write `content` to a config file in a fresh temp directory.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

/// Make escape sequences visible for snapshots.
pub fn visible(s: &str) -> String {
    s.replace('\x1b', "\\e")
}
