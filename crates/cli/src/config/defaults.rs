// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values.

/// Escape byte (ESC), the default trigger.
pub const ESC: u8 = 0x1b;

/// Alternate trigger selected by `--space-as-escape`.
pub const SPACE: u8 = 0x20;

/// Capacity of the candidate sequence buffer.
pub const BUFFER_CAPACITY: usize = 80;

/// Candidate length at which an unmatched sequence is given up and flushed.
pub const OVERFLOW_THRESHOLD: usize = 16;

/// Pattern file location relative to the home directory.
pub const USER_PATTERNS_PATH: &str = ".config/untty/escape_exprs";

/// Built-in pattern file, used when no user pattern file exists.
pub const DEFAULT_PATTERNS: &str = include_str!("escape_exprs");
