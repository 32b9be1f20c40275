// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escape-sequence filter engine.
//!
//! Pulls one byte at a time from the input, drives the state machine in
//! [`state`], and writes whatever each step emits before reading the next
//! byte.

mod state;

pub use state::{Rules, State, transition};

use std::io::{self, BufReader, Read, Write};

use thiserror::Error;

use crate::buffer::SequenceBuffer;
use crate::config::defaults::{ESC, SPACE};
use crate::error::ExitCode;
use crate::pattern::{Matcher, PatternError};
use crate::trace::Tracer;

use state::LF;

/// Errors that stop a running filter.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("could not read input: {0}")]
    Read(#[source] io::Error),

    #[error("could not write output: {0}")]
    Write(#[source] io::Error),

    #[error(transparent)]
    Match(#[from] PatternError),
}

impl EngineError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            EngineError::Read(_) | EngineError::Write(_) => ExitCode::Read,
            EngineError::Match(e) => e.exit_code(),
        }
    }

    /// True when the output side went away (e.g. `untty log | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, EngineError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Handling of the `ESC [` prefix on overflow flushes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GarbagePrefixPolicy {
    /// Drop a leading `ESC [` before flushing (ESC trigger only).
    #[default]
    DropEscBracket,
    /// Flush the buffer unchanged.
    Keep,
}

/// Engine settings fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Byte that starts a candidate sequence.
    pub trigger: u8,
    pub garbage_prefix: GarbagePrefixPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { trigger: ESC, garbage_prefix: GarbagePrefixPolicy::default() }
    }
}

impl EngineConfig {
    /// Use space instead of ESC as the trigger byte.
    pub fn space_as_escape() -> Self {
        Self { trigger: SPACE, ..Self::default() }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub bytes_read: u64,
    /// Bytes still buffered at end of stream (flushed literally).
    pub pending: usize,
    /// The stream ended inside an unmatched escape sequence.
    pub unmatched_escape: bool,
}

/// The filter engine.
pub struct FilterEngine<'a, M: ?Sized> {
    matcher: &'a M,
    config: EngineConfig,
    tracer: Tracer,
    state: State,
    buffer: SequenceBuffer,
    bytes_read: u64,
}

impl<'a, M: Matcher + ?Sized> FilterEngine<'a, M> {
    pub fn new(matcher: &'a M, config: EngineConfig, tracer: Tracer) -> Self {
        Self {
            matcher,
            config,
            tracer,
            state: State::NeedEscape,
            buffer: SequenceBuffer::new(),
            bytes_read: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn buffer(&self) -> &SequenceBuffer {
        &self.buffer
    }

    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Consume one byte, appending emitted output to `out`.
    ///
    /// # Errors
    ///
    /// Fails if a pattern cannot be executed.
    pub fn feed(&mut self, byte: u8, out: &mut Vec<u8>) -> Result<(), EngineError> {
        self.bytes_read += 1;
        self.tracer.read(self.state, byte);
        let rules = Rules { matcher: self.matcher, config: self.config, tracer: &self.tracer };
        self.state = transition(&rules, self.state, &mut self.buffer, byte, out)?;
        Ok(())
    }

    /// Handle end of stream: flush anything still buffered and stop.
    pub fn finish(&mut self, out: &mut Vec<u8>) -> Summary {
        self.tracer.transition(self.state, State::Done, "read() == 0");
        if self.state == State::NeedEscapeHaveCr {
            out.push(LF);
        }

        let pending = self.buffer.len();
        let unmatched_escape = self.config.trigger == ESC && self.buffer.first() == Some(ESC);
        if pending > 0 {
            state::flush(&self.tracer, &mut self.buffer, out);
        }
        self.state = State::Done;

        if unmatched_escape {
            tracing::warn!("unmatched escape at end of input ({pending} bytes)");
        }
        Summary { bytes_read: self.bytes_read, pending, unmatched_escape }
    }

    /// Filter a complete in-memory input.
    ///
    /// # Errors
    ///
    /// Fails if a pattern cannot be executed.
    pub fn filter(&mut self, input: &[u8]) -> Result<Vec<u8>, EngineError> {
        let mut out = Vec::with_capacity(input.len());
        for &byte in input {
            self.feed(byte, &mut out)?;
        }
        self.finish(&mut out);
        Ok(out)
    }

    /// Filter `input` into `output` until end of stream.
    ///
    /// Interrupted and would-block reads are retried. Output for each byte is
    /// written before the next byte is read, and flushed at every line end.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Read`] or [`EngineError::Write`] on I/O
    /// failure, and [`EngineError::Match`] if a pattern cannot be executed.
    /// Output written before the failure is kept.
    pub fn run<R: Read, W: Write>(
        &mut self,
        input: R,
        mut output: W,
    ) -> Result<Summary, EngineError> {
        let mut reader = BufReader::new(input);
        let mut byte = [0u8; 1];
        let mut out = Vec::with_capacity(SequenceBuffer::CAPACITY * 4);

        loop {
            match reader.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    self.feed(byte[0], &mut out)?;
                    emit(&mut output, &mut out)?;
                    // Nothing left in hand: the next read may block.
                    if reader.buffer().is_empty() {
                        output.flush().map_err(EngineError::Write)?;
                    }
                }
                Err(e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
                    ) =>
                {
                    self.tracer.log(&format!("read() failed ({e}); trying again."));
                }
                Err(e) => {
                    // Keep what was already decided before failing.
                    output.flush().map_err(EngineError::Write)?;
                    return Err(EngineError::Read(e));
                }
            }
        }

        let summary = self.finish(&mut out);
        emit(&mut output, &mut out)?;
        output.flush().map_err(EngineError::Write)?;
        Ok(summary)
    }
}

fn emit<W: Write>(output: &mut W, out: &mut Vec<u8>) -> Result<(), EngineError> {
    if out.is_empty() {
        return Ok(());
    }
    output.write_all(out).map_err(EngineError::Write)?;
    out.clear();
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
