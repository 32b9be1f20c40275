// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-sequence patterns.
//!
//! Patterns are regular expressions matched against the bytes that follow
//! the trigger byte. They are compiled with Unicode mode off: `.`, classes
//! and `\xHH` escapes match single bytes, never UTF-8 code points. The engine only sees them through the [`Matcher`]
//! trait, so the selection policy and the regex backend stay swappable.

pub mod matcher;

pub use matcher::{MatchHit, MatchPolicy, Matcher, PatternSet, Selection, TieBreak};

use regex::bytes::{Regex, RegexBuilder};
use thiserror::Error;

use crate::error::ExitCode;

/// Errors from compiling or executing patterns.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("could not compile regexp \"{pattern}\" (line {line}): {source}")]
    Compile {
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("could not execute regexp \"{pattern}\": {message}")]
    Execute { pattern: String, message: String },
}

impl PatternError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PatternError::Compile { .. } => ExitCode::Setup,
            PatternError::Execute { .. } => ExitCode::Match,
        }
    }
}

/// A compiled pattern and the text it was compiled from.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile one pattern. `line` is only used for error reporting.
    pub fn compile(source: &str, line: usize) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(source)
            .unicode(false)
            .build()
            .map_err(|e| PatternError::Compile { line, pattern: source.to_string(), source: e })?;
        Ok(Self { source: source.to_string(), regex })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// All non-overlapping match spans, left to right, as `(start, end)`.
    pub fn find_all<'a>(&'a self, haystack: &'a [u8]) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.regex.find_iter(haystack).map(|m| (m.start(), m.end()))
    }
}

/// Split pattern file text into `(line_number, pattern)` pairs.
///
/// Line numbers are 1-based. Blank lines and `#` comments are skipped and a
/// trailing `\r` is stripped.
pub fn pattern_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut ends = memchr::memchr_iter(b'\n', bytes).chain(std::iter::once(bytes.len()));
    std::iter::from_fn(move || {
        let end = ends.next()?;
        let line = &text[start..end];
        start = (end + 1).min(bytes.len());
        Some(line)
    })
    .enumerate()
    .filter_map(|(i, line)| pattern_line(line).map(|src| (i + 1, src)))
}

/// The pattern on one line, or `None` for blank lines and `#` comments.
pub(crate) fn pattern_line(line: &str) -> Option<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    (!line.is_empty() && !line.starts_with('#')).then_some(line)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
