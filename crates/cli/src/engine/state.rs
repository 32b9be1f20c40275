// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter state machine.
//!
//! [`transition`] consumes one byte and returns the next state. It touches
//! nothing but the sequence buffer and the output vector, so every state can
//! be tested without I/O.

use std::fmt;

use super::{EngineConfig, GarbagePrefixPolicy};
use crate::buffer::SequenceBuffer;
use crate::config::defaults::{ESC, OVERFLOW_THRESHOLD};
use crate::pattern::{Matcher, PatternError};
use crate::render::render_literal;
use crate::trace::Tracer;

pub(crate) const CR: u8 = b'\r';
pub(crate) const LF: u8 = b'\n';

/// Filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Passing bytes through, waiting for a trigger byte.
    NeedEscape,
    /// A CR was absorbed; the next byte decides whether it pairs with it.
    NeedEscapeHaveCr,
    /// Accumulating a candidate sequence.
    NeedMatch,
    /// End of stream reached.
    Done,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::NeedEscape => "NEED_ESCAPE",
            State::NeedEscapeHaveCr => "NEED_ESCAPE_HAVE_CR",
            State::NeedMatch => "NEED_MATCH",
            State::Done => "DONE",
        })
    }
}

/// Everything a transition reads but never mutates.
pub struct Rules<'a, M: ?Sized> {
    pub matcher: &'a M,
    pub config: EngineConfig,
    pub tracer: &'a Tracer,
}

/// Consume `byte` in `state`, appending any output to `out`.
///
/// # Errors
///
/// Propagates pattern execution failures from the matcher.
pub fn transition<M: Matcher + ?Sized>(
    rules: &Rules<'_, M>,
    state: State,
    buffer: &mut SequenceBuffer,
    byte: u8,
    out: &mut Vec<u8>,
) -> Result<State, PatternError> {
    match state {
        State::NeedEscape => Ok(need_escape(rules, buffer, byte, out)),
        State::NeedEscapeHaveCr => {
            out.push(LF);
            rules.tracer.transition(state, State::NeedEscape, "found CR/NL");
            if byte == CR || byte == LF {
                return Ok(State::NeedEscape);
            }
            Ok(need_escape(rules, buffer, byte, out))
        }
        State::NeedMatch => need_match(rules, buffer, byte, out),
        State::Done => Ok(State::Done),
    }
}

fn need_escape<M: Matcher + ?Sized>(
    rules: &Rules<'_, M>,
    buffer: &mut SequenceBuffer,
    byte: u8,
    out: &mut Vec<u8>,
) -> State {
    let trigger = rules.config.trigger;
    if byte == trigger {
        // The buffer is always empty here, so this cannot be refused.
        buffer.try_push(byte);
        rules.tracer.transition(
            State::NeedEscape,
            State::NeedMatch,
            &format!("got escape (\\x{trigger:02x})"),
        );
        State::NeedMatch
    } else if byte == CR {
        State::NeedEscapeHaveCr
    } else {
        out.push(byte);
        State::NeedEscape
    }
}

fn need_match<M: Matcher + ?Sized>(
    rules: &Rules<'_, M>,
    buffer: &mut SequenceBuffer,
    byte: u8,
    out: &mut Vec<u8>,
) -> Result<State, PatternError> {
    let trigger = rules.config.trigger;
    let tracer = rules.tracer;

    // The engine flushes at OVERFLOW_THRESHOLD, well below capacity; this
    // only fires for callers driving `transition` with a fuller buffer.
    if !buffer.try_push(byte) {
        tracer.transition(State::NeedMatch, State::NeedEscape, "buffer full");
        flush(tracer, buffer, out);
        // Reprocess the refused byte against an empty buffer.
        return Ok(need_escape(rules, buffer, byte, out));
    }
    tracer.buffer("new buffer", buffer.as_bytes());

    if byte == CR || byte == LF {
        let reason = if byte == CR { "found return" } else { "found newline" };
        tracer.transition(State::NeedMatch, State::NeedEscape, reason);
        flush(tracer, buffer, out);
        return Ok(State::NeedEscape);
    }

    if buffer.len() <= 1 {
        return Ok(State::NeedMatch);
    }

    match rules.matcher.find_match(buffer.candidate())? {
        Some(hit) => {
            let consumed = hit.end + 1;
            if let Some(source) = rules.matcher.describe(hit.index) {
                tracer.log(&format!("using match at {} chars: {}", hit.end, source));
            }
            buffer.shift_left(consumed);
            let reason = format!("matched {consumed} characters");
            if buffer.is_empty() {
                tracer.transition(State::NeedMatch, State::NeedEscape, &reason);
                Ok(State::NeedEscape)
            } else if buffer.first() == Some(trigger) {
                tracer.transition(State::NeedMatch, State::NeedMatch, &reason);
                Ok(State::NeedMatch)
            } else {
                tracer.transition(State::NeedMatch, State::NeedEscape, &reason);
                flush(tracer, buffer, out);
                Ok(State::NeedEscape)
            }
        }
        None if byte == trigger => {
            tracer.transition(State::NeedMatch, State::NeedMatch, "found escape");
            let prefix = buffer.len() - 1;
            render_span(tracer, &buffer.as_bytes()[..prefix], out);
            buffer.reset();
            buffer.try_push(byte);
            tracer.buffer("new buffer", buffer.as_bytes());
            Ok(State::NeedMatch)
        }
        None if buffer.len() >= OVERFLOW_THRESHOLD => {
            tracer.transition(
                State::NeedMatch,
                State::NeedEscape,
                &format!("escape unmatched at {} characters", buffer.len()),
            );
            let span = rules.config.garbage_prefix.strip(trigger, buffer.as_bytes());
            render_span(tracer, span, out);
            buffer.reset();
            Ok(State::NeedEscape)
        }
        None => Ok(State::NeedMatch),
    }
}

/// Render the whole buffer literally and clear it.
pub(crate) fn flush(tracer: &Tracer, buffer: &mut SequenceBuffer, out: &mut Vec<u8>) {
    render_span(tracer, buffer.as_bytes(), out);
    buffer.reset();
}

fn render_span(tracer: &Tracer, span: &[u8], out: &mut Vec<u8>) {
    tracer.buffer("print_buf", span);
    render_literal(span, out);
}

impl GarbagePrefixPolicy {
    /// Apply the policy to a span about to be flushed on overflow.
    ///
    /// Consoles logged through screen(1) sometimes produce `ESC [ [ 5.953653]`;
    /// the leading `ESC [` is garbage and is dropped.
    pub fn strip<'a>(self, trigger: u8, span: &'a [u8]) -> &'a [u8] {
        match self {
            GarbagePrefixPolicy::DropEscBracket if trigger == ESC => {
                span.strip_prefix(&[ESC, b'['][..]).unwrap_or(span)
            }
            _ => span,
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
