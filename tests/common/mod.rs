//! Shared helpers for CLI integration tests

use assert_cmd::Command;
use tempfile::TempDir;

/// Command for the `assistant` binary with its data kept in `dir`
pub fn assistant(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("assistant").unwrap();
    cmd.env("ASSISTANT_DATA_DIR", dir.path());
    cmd
}

/// Run a command that is expected to succeed
pub fn run(dir: &TempDir, args: &[&str]) {
    assistant(dir).args(args).assert().success();
}
