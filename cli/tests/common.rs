//! # dsinit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every test runs
//! the compiled `dsinit` binary inside a `Sandbox`: a temporary working
//! directory plus a temporary home, so neither the developer's files nor their
//! `~/.config/dsinit/config.toml` leak into the run.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The fallback `.gitignore` dsinit embeds.
pub const GITIGNORE_FALLBACK: &str = include_str!("../templates/gitignore");

/// Subdirectories every scaffolded project must contain.
pub const PROJECT_DIRS: [&str; 5] = [
    "data/raw",
    "data/processed",
    "data/submissions",
    "notebooks",
    "src",
];

/// # Get dsinit Command (`dsinit_cmd`)
///
/// An `assert_cmd::Command` for the `dsinit` binary built for this test run.
///
/// ## Panics
/// Panics if the `dsinit` binary cannot be found via `Command::cargo_bin`.
pub fn dsinit_cmd() -> Command {
    Command::cargo_bin("dsinit").expect("Failed to find dsinit binary for testing")
}

/// An isolated working directory and home for one test.
pub struct Sandbox {
    pub cwd: TempDir,
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            cwd: tempfile::tempdir().expect("Failed to create temp working dir"),
            home: tempfile::tempdir().expect("Failed to create temp home dir"),
        }
    }

    /// `dsinit` running in the sandbox's working directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = dsinit_cmd();
        cmd.current_dir(self.cwd.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }

    /// A path inside the working directory.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.cwd.path().join(relative)
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        let path = self.path(relative);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }
}
