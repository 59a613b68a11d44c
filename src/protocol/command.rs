//! Command recognition.
//!
//! A completed line is trimmed of surrounding ASCII whitespace and upper-cased
//! before matching, so `cmd:status`, ` Pump ` and `PUMP` are all accepted.
//! Matching is exact after normalisation; anything else is ignored.

use heapless::String;

use super::codec::LINE_CAPACITY;
use crate::app::commands::AppCommand;

/// Accepted spellings for each command.
const WATER_ALIASES: [&str; 3] = ["PUMP", "PUMP_ON", "CMD:WATER"];
const STATUS_ALIASES: [&str; 2] = ["STATUS", "CMD:STATUS"];

/// Trim ASCII whitespace and ASCII-uppercase a raw line.
///
/// Unicode spacing such as U+00A0 is kept, so it never pads a command.
///
/// Returns `None` for input that is not valid UTF-8 or whose trimmed form
/// exceeds [`LINE_CAPACITY`].
pub fn normalize(line: &[u8]) -> Option<String<LINE_CAPACITY>> {
    let text = core::str::from_utf8(line).ok()?;
    let mut out = String::new();
    for c in text.trim_matches(|c: char| c.is_ascii_whitespace()).chars() {
        out.push(c.to_ascii_uppercase()).ok()?;
    }
    Some(out)
}

/// Map a normalised line to a command.
pub fn parse(normalized: &str) -> Option<AppCommand> {
    if WATER_ALIASES.contains(&normalized) {
        Some(AppCommand::Water)
    } else if STATUS_ALIASES.contains(&normalized) {
        Some(AppCommand::Status)
    } else {
        None
    }
}

/// Normalise and parse a raw line in one step.
pub fn dispatch(line: &[u8]) -> Option<AppCommand> {
    normalize(line).and_then(|n| parse(&n))
}
