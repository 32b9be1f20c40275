// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! untty: strip terminal escape sequences from captured console output.
//!
//! The filter is a byte-oriented state machine. It holds a bounded
//! look-ahead window starting at a trigger byte (ESC by default), matches
//! that window against a set of regular expressions, and either drops the
//! matched sequence or flushes the unmatched bytes with visible escaping.

pub mod buffer;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod render;
pub mod trace;


pub use buffer::SequenceBuffer;
pub use engine::{EngineConfig, EngineError, FilterEngine, GarbagePrefixPolicy, State, Summary};
pub use error::{Error, ExitCode};
pub use pattern::{MatchHit, MatchPolicy, Matcher, Pattern, PatternError, PatternSet};
pub use trace::Tracer;
