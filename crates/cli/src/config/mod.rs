// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern file configuration.
//!
//! Resolution order:
//! 1. An explicit path (`--patterns` or `UNTTY_ESCAPE_EXPRS`)
//! 2. `~/.config/untty/escape_exprs`
//! 3. The built-in defaults, when the chosen file does not exist

pub mod defaults;
mod loader;

pub use loader::{ConfigError, PatternFile, PatternSource, load, user_patterns_path};
