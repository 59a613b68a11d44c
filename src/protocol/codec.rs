//! Line-terminated input codec.
//!
//! Wire format:
//! ```text
//! ┌──────────────────────────────┬────────────┐
//! │ Command bytes (≤ 64 kept)    │ '\n' / '\r'│
//! └──────────────────────────────┴────────────┘
//! ```
//!
//! The buffer accumulates incoming bytes one at a time and yields a
//! complete line on each terminator.  Bytes arriving while the buffer is
//! full are dropped; the line is still finalised on the next terminator
//! but flagged as truncated.  Empty lines (e.g. the `\n` of a `\r\n` pair)
//! yield nothing.

use heapless::Vec;

/// Maximum bytes retained per line.
pub const LINE_CAPACITY: usize = 64;

/// A finalised input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8, LINE_CAPACITY>,
    truncated: bool,
}

impl Line {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// `true` if input was dropped because the buffer was full.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Streaming line accumulator.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: Vec<u8, LINE_CAPACITY>,
    dropped: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte.
    ///
    /// Returns `Some(line)` when `byte` terminates a non-empty line.  The
    /// buffer is cleared on every terminator, whether or not a line was
    /// produced.
    pub fn feed(&mut self, byte: u8) -> Option<Line> {
        if is_terminator(byte) {
            let line = if self.buf.is_empty() {
                None
            } else {
                Some(Line {
                    bytes: self.buf.clone(),
                    truncated: self.dropped > 0,
                })
            };
            self.reset();
            return line;
        }

        if self.buf.push(byte).is_err() {
            self.dropped += 1;
        }
        None
    }

    /// Bytes currently buffered for the unfinished line.
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Bytes discarded from the unfinished line.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Discard any partial line.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.dropped = 0;
    }
}

fn is_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}
