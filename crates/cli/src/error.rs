// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! Exit codes:
//! - 0: stream filtered (trailing unmatched escapes are only a warning)
//! - 1: setup failed before any output was produced
//! - 2: reading input or writing output failed mid-stream
//! - 3: a pattern failed to execute

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::pattern::PatternError;

/// Process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Setup = 1,
    Read = 2,
    Match = 3,
}

impl ExitCode {
    /// Pick the exit code for an error bubbled up through `anyhow`.
    ///
    /// Unrecognised errors are treated as setup failures.
    pub fn for_error(err: &anyhow::Error) -> Self {
        if let Some(e) = err.downcast_ref::<Error>() {
            e.exit_code()
        } else if let Some(e) = err.downcast_ref::<EngineError>() {
            e.exit_code()
        } else if let Some(e) = err.downcast_ref::<PatternError>() {
            e.exit_code()
        } else {
            ExitCode::Setup
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Top-level error for a filter run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("could not open \"{}\": {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Config(_) | Error::Input { .. } => ExitCode::Setup,
            Error::Pattern(e) => e.exit_code(),
            Error::Engine(e) => e.exit_code(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
