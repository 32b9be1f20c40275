//! Test helpers for behavioral specifications.
//!
//! Every command runs with a throwaway HOME and without untty's
//! environment variables, so the built-in patterns apply unless a test
//! says otherwise.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::Path;
use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the untty binary in a clean environment.
pub fn untty_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("untty"));
    cmd.env_remove("UNTTY_ESCAPE_EXPRS")
        .env_remove("UNTTY_DEBUG")
        .env_remove("UNTTY_LOG")
        .env("HOME", "/nonexistent/untty-home");
    cmd
}

/// Temporary home directory with an optional user pattern file.
pub struct Home {
    dir: TempDir,
}

impl Home {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// Home with `~/.config/untty/escape_exprs` holding `patterns`.
    pub fn with_patterns(patterns: &str) -> Self {
        let home = Self::empty();
        home.file(".config/untty/escape_exprs", patterns);
        home
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the home directory, creating parents.
    pub fn file(&self, rel: &str, content: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }
}
