// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Visible rendering of unmatched bytes.
//!
//! Anything the engine gives up on still has to be readable, so
//! non-printable bytes are written as `\xHH`.

use std::fmt::Write as _;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e)
}

fn push_hex(out: &mut Vec<u8>, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.extend_from_slice(&[b'\\', b'x', HEX[usize::from(byte >> 4)], HEX[usize::from(byte & 0xf)]]);
}

/// Append the literal rendering of `span` to `out`.
///
/// Printable ASCII and LF pass through, CR is dropped, and every other byte
/// becomes `\xHH`.
pub fn render_literal(span: &[u8], out: &mut Vec<u8>) {
    for &byte in span {
        match byte {
            CR => {}
            LF => out.push(LF),
            b if is_printable(b) => out.push(b),
            b => push_hex(out, b),
        }
    }
}

/// Render `span` for a single trace line: like [`render_literal`], but CR
/// and LF are escaped too.
pub fn render_trace(span: &[u8]) -> String {
    let mut s = String::with_capacity(span.len());
    for &byte in span {
        if is_printable(byte) {
            s.push(char::from(byte));
        } else {
            let _ = write!(s, "\\x{byte:02x}");
        }
    }
    s
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
