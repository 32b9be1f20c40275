// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic tracer for the filter engine.
//!
//! Writes buffer contents, pattern hits, and state transitions to stderr.
//! Enabled with `--debug` or `UNTTY_DEBUG=1`; the flag is read once at
//! startup and the tracer is handed to the engine.

use std::cell::RefCell;

use crate::engine::State;
use crate::render::render_trace;

enum Sink {
    Off,
    Stderr,
    Capture(RefCell<Vec<String>>),
}

/// Engine tracer. All output is conditional on tracing being enabled.
pub struct Tracer {
    sink: Sink,
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer").field("enabled", &self.is_enabled()).finish()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Tracer {
    pub fn new(enabled: bool) -> Self {
        Self { sink: if enabled { Sink::Stderr } else { Sink::Off } }
    }

    /// A tracer that keeps lines in memory instead of printing them.
    pub fn capturing() -> Self {
        Self { sink: Sink::Capture(RefCell::new(Vec::new())) }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.sink, Sink::Off)
    }

    /// Lines recorded by a capturing tracer.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Capture(lines) => lines.borrow().clone(),
            _ => Vec::new(),
        }
    }

    /// Emit one trace line.
    pub fn log(&self, msg: &str) {
        match &self.sink {
            Sink::Off => {}
            Sink::Stderr => eprintln!("untty: {}", msg),
            Sink::Capture(lines) => lines.borrow_mut().push(msg.to_string()),
        }
    }

    pub fn read(&self, state: State, byte: u8) {
        if self.is_enabled() {
            self.log(&format!("{state} read '{}'", render_trace(&[byte])));
        }
    }

    pub fn buffer(&self, label: &str, bytes: &[u8]) {
        if self.is_enabled() {
            self.log(&format!("{label}:\"{}\" pos:{}", render_trace(bytes), bytes.len()));
        }
    }

    pub fn transition(&self, from: State, to: State, reason: &str) {
        if self.is_enabled() {
            self.log(&format!("{from}->{to}: {reason}"));
        }
    }

    pub fn pattern(&self, index: usize, source: &str) {
        if self.is_enabled() {
            self.log(&format!("expr[{index}]:{}", render_trace(source.as_bytes())));
        }
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
