// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern file loading.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::defaults::{DEFAULT_PATTERNS, USER_PATTERNS_PATH};

/// Errors resolving or reading the pattern file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("could not read \"{}\": {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the pattern text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for PatternSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternSource::File(path) => write!(f, "{}", path.display()),
            PatternSource::Defaults => f.write_str("(built-in defaults)"),
        }
    }
}

/// Pattern file text plus its origin.
#[derive(Debug, Clone)]
pub struct PatternFile {
    pub source: PatternSource,
    pub text: Cow<'static, str>,
}

impl PatternFile {
    pub fn defaults() -> Self {
        Self { source: PatternSource::Defaults, text: Cow::Borrowed(DEFAULT_PATTERNS) }
    }
}

/// `~/.config/untty/escape_exprs` for the current user.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDir`] if no home directory can be found.
pub fn user_patterns_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().map(|home| home.join(USER_PATTERNS_PATH)).ok_or(ConfigError::NoHomeDir)
}

/// Load pattern text from `explicit`, or from the per-user path.
///
/// A missing file falls back to the built-in defaults; any other read
/// failure is an error.
///
/// # Errors
///
/// Returns [`ConfigError`] if the home directory cannot be resolved or the
/// file exists but cannot be read.
pub fn load(explicit: Option<&Path>) -> Result<PatternFile, ConfigError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => user_patterns_path()?,
    };

    match std::fs::read_to_string(&path) {
        Ok(text) => {
            tracing::debug!("loaded patterns from {}", path.display());
            Ok(PatternFile { source: PatternSource::File(path), text: Cow::Owned(text) })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} not found, using built-in patterns", path.display());
            Ok(PatternFile::defaults())
        }
        Err(source) => Err(ConfigError::Read { path, source }),
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
