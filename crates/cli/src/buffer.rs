// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity buffer for the candidate escape sequence.

use crate::config::defaults::BUFFER_CAPACITY;

/// Bounded byte buffer holding an in-progress candidate sequence.
///
/// Never grows. Capacity checks are the caller's job: [`try_push`]
/// refuses a byte instead of reallocating.
///
/// [`try_push`]: SequenceBuffer::try_push
#[derive(Debug, Clone)]
pub struct SequenceBuffer {
    bytes: [u8; BUFFER_CAPACITY],
    len: usize,
}

impl Default for SequenceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceBuffer {
    pub const CAPACITY: usize = BUFFER_CAPACITY;

    pub fn new() -> Self {
        Self { bytes: [0; BUFFER_CAPACITY], len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == BUFFER_CAPACITY
    }

    /// Append a byte. Returns `false` and leaves the buffer untouched when full.
    pub fn try_push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        true
    }

    pub fn reset(&mut self) {
        self.bytes[..self.len].fill(0);
        self.len = 0;
    }

    /// Drop the first `n` bytes and move the rest to the front.
    pub fn shift_left(&mut self, n: usize) {
        let n = n.min(self.len);
        self.bytes.copy_within(n..self.len, 0);
        let new_len = self.len - n;
        self.bytes[new_len..self.len].fill(0);
        self.len = new_len;
    }

    pub fn first(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Everything after the leading trigger byte; what the matcher sees.
    pub fn candidate(&self) -> &[u8] {
        self.as_bytes().get(1..).unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
