//! Fuzz target: `LineBuffer::feed`
//!
//! Streams arbitrary bytes into the line accumulator and checks that it
//! never holds more than its capacity, never yields an empty line, and
//! never yields a line containing a terminator.
//!
//! cargo fuzz run fuzz_line_buffer

#![no_main]

use libfuzzer_sys::fuzz_target;
use plantbot::protocol::{LINE_CAPACITY, LineBuffer};

fuzz_target!(|data: &[u8]| {
    let mut buffer = LineBuffer::new();

    for &byte in data {
        if let Some(line) = buffer.feed(byte) {
            assert!(!line.is_empty(), "empty line yielded");
            assert!(line.len() <= LINE_CAPACITY);
            assert!(!line.as_bytes().iter().any(|b| *b == b'\n' || *b == b'\r'));
            assert_eq!(buffer.pending(), 0, "buffer not cleared after line");
        }
        assert!(buffer.pending() <= LINE_CAPACITY);
    }

    // After a reset the buffer must accept a clean line again.
    buffer.reset();
    for &byte in b"PUMP" {
        assert!(buffer.feed(byte).is_none());
    }
    let line = buffer.feed(b'\n').expect("line after reset");
    assert_eq!(line.as_bytes(), b"PUMP");
});
