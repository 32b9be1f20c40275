// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern set and match selection.
//!
//! Several patterns may match the same candidate. The selection policy
//! picks one: by default the match that ends earliest, with ties going to
//! the pattern defined first.

use clap::ValueEnum;

use super::{Pattern, PatternError, pattern_line, pattern_lines};

/// The pattern and end offset chosen for a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchHit {
    /// Index of the winning pattern in definition order.
    pub index: usize,
    /// End offset of the match within the haystack (exclusive).
    pub end: usize,
}

/// Which end offset wins when several matches are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Selection {
    /// Earliest-ending match.
    #[default]
    Shortest,
    /// Latest-ending match.
    Longest,
}

/// Which pattern wins when matches end at the same offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TieBreak {
    /// Lowest pattern index.
    #[default]
    #[value(name = "first")]
    FirstDefined,
    /// Highest pattern index.
    #[value(name = "last")]
    LastDefined,
}

/// Match selection policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchPolicy {
    pub selection: Selection,
    pub tie_break: TieBreak,
}

impl MatchPolicy {
    pub fn new(selection: Selection, tie_break: TieBreak) -> Self {
        Self { selection, tie_break }
    }

    /// Whether a match ending at `end` from pattern `index` beats `best`.
    ///
    /// Candidates are offered in increasing pattern index order.
    fn prefers(&self, best: Option<MatchHit>, index: usize, end: usize) -> bool {
        let Some(best) = best else {
            return true;
        };
        if end == best.end {
            return self.tie_break == TieBreak::LastDefined && index > best.index;
        }
        match self.selection {
            Selection::Shortest => end < best.end,
            Selection::Longest => end > best.end,
        }
    }
}

/// Matching capability used by the filter engine.
pub trait Matcher {
    /// Select a match in `haystack`, or `None` if nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Execute`] when the backend fails to run a
    /// pattern (as opposed to finding no match).
    fn find_match(&self, haystack: &[u8]) -> Result<Option<MatchHit>, PatternError>;

    /// Source text of the pattern at `index`, for diagnostics.
    fn describe(&self, _index: usize) -> Option<&str> {
        None
    }
}

/// Ordered, immutable collection of patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    policy: MatchPolicy,
}

impl PatternSet {
    /// Compile every pattern in `sources`. Lines are filtered like
    /// [`from_text`](Self::from_text): blanks and `#` comments are skipped and
    /// a trailing `\r` is stripped.
    ///
    /// # Errors
    ///
    /// Fails on the first pattern that does not compile.
    pub fn compile_all<'a, I>(sources: I, policy: MatchPolicy) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let patterns = sources
            .into_iter()
            .enumerate()
            .filter_map(|(i, line)| pattern_line(line).map(|src| (i + 1, src)))
            .map(|(line, src)| Pattern::compile(src, line))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns, policy })
    }

    /// Compile the contents of a pattern file.
    ///
    /// # Errors
    ///
    /// Fails on the first pattern that does not compile; the error carries
    /// the file line number.
    pub fn from_text(text: &str, policy: MatchPolicy) -> Result<Self, PatternError> {
        let patterns = pattern_lines(text)
            .map(|(line, src)| Pattern::compile(src, line))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns, policy })
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }
}

impl Matcher for PatternSet {
    fn find_match(&self, haystack: &[u8]) -> Result<Option<MatchHit>, PatternError> {
        let mut best: Option<MatchHit> = None;
        for (index, pattern) in self.patterns.iter().enumerate() {
            for (_, end) in pattern.find_all(haystack) {
                if self.policy.prefers(best, index, end) {
                    best = Some(MatchHit { index, end });
                }
            }
        }
        Ok(best)
    }

    fn describe(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(Pattern::as_str)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
