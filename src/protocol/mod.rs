//! Host command protocol.
//!
//! ```text
//! ┌──────────┐ bytes ┌────────────┐ line ┌───────────┐ AppCommand ┌─────────────┐
//! │ SerialPort│─────▶│ LineBuffer │─────▶│ dispatch  │───────────▶│ ControlLoop │
//! └──────────┘       └────────────┘      └───────────┘            └─────────────┘
//!       ▲                                                               │
//!       └───────────────────────── Response lines ──────────────────────┘
//! ```
//!
//! Plain ASCII, one command per line.  Unknown lines produce no reply, and
//! neither does a line that overflowed the buffer: its kept prefix is never
//! dispatched.

pub mod codec;
pub mod command;
pub mod response;

pub use codec::{LINE_CAPACITY, Line, LineBuffer};
pub use command::dispatch;
pub use response::Response;

use crate::app::commands::AppCommand;

/// Result of completing one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound {
    Command(AppCommand),
    /// Line matched nothing and is discarded.
    Ignored { len: usize, truncated: bool },
}

/// Byte-at-a-time front end for the host link.
#[derive(Debug, Default)]
pub struct CommandProtocol {
    buffer: LineBuffer,
}

impl CommandProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one received byte.  Returns an outcome whenever a non-empty line
    /// completes.
    pub fn feed(&mut self, byte: u8) -> Option<Inbound> {
        let line = self.buffer.feed(byte)?;
        let cmd = if line.truncated() {
            None
        } else {
            dispatch(line.as_bytes())
        };
        Some(match cmd {
            Some(cmd) => Inbound::Command(cmd),
            None => Inbound::Ignored {
                len: line.len(),
                truncated: line.truncated(),
            },
        })
    }

    /// Bytes of the partial line still waiting for a terminator.
    pub fn pending(&self) -> usize {
        self.buffer.pending()
    }
}
