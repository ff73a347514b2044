//! # Greeter Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/greeter
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` to pull these in.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

/// Creates a `Command` for the compiled `greeter` binary.
///
/// The command runs inside `sandbox` with `XDG_CONFIG_HOME` pointed into it and
/// `GREETER_CONFIG`/`RUST_LOG` cleared, so user configuration on the machine
/// running the tests cannot leak in.
///
/// ## Panics
/// Panics if the `greeter` binary cannot be found via `Command::cargo_bin`.
pub fn greeter_cmd(sandbox: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("greeter").expect("Failed to find greeter binary for testing");
    cmd.current_dir(sandbox.path())
        .env("XDG_CONFIG_HOME", sandbox.path().join("xdg"))
        .env("HOME", sandbox.path())
        .env_remove("GREETER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates an isolated working directory that stops project config discovery
/// at its own root.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}
