// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::config::defaults::{ESC, SPACE};
use crate::engine::{EngineConfig, GarbagePrefixPolicy};
use crate::pattern::{MatchPolicy, Selection, TieBreak};

/// Strip terminal escape sequences from captured console output
#[derive(Parser, Debug)]
#[command(name = "untty")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Treat space as the escape byte instead of ESC
    #[arg(short = 's', long)]
    pub space_as_escape: bool,

    /// Trace buffers and state transitions to stderr
    #[arg(short, long, env = "UNTTY_DEBUG")]
    pub debug: bool,

    /// Print the built-in escape expressions and exit
    #[arg(long)]
    pub show_defaults: bool,

    /// Pattern file (default: ~/.config/untty/escape_exprs)
    #[arg(long, value_name = "FILE", env = "UNTTY_ESCAPE_EXPRS")]
    pub patterns: Option<PathBuf>,

    /// Which match wins when several patterns match
    #[arg(long, value_name = "POLICY", default_value = "shortest")]
    pub match_policy: Selection,

    /// Which pattern wins when matches end at the same offset
    #[arg(long, value_name = "WHICH", default_value = "first")]
    pub tie_break: TieBreak,

    /// Flush `ESC [` prefixes of overlong sequences instead of dropping them
    #[arg(long)]
    pub keep_garbage_prefix: bool,
}

impl Cli {
    pub fn trigger(&self) -> u8 {
        if self.space_as_escape { SPACE } else { ESC }
    }

    pub fn match_policy(&self) -> MatchPolicy {
        MatchPolicy::new(self.match_policy, self.tie_break)
    }

    pub fn engine_config(&self) -> EngineConfig {
        let garbage_prefix = if self.keep_garbage_prefix {
            GarbagePrefixPolicy::Keep
        } else {
            GarbagePrefixPolicy::DropEscBracket
        };
        EngineConfig { trigger: self.trigger(), garbage_prefix }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
