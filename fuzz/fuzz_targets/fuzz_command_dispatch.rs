//! Fuzz target: `protocol::dispatch`
//!
//! Any byte slice must parse without panicking, and anything it accepts
//! must normalise to one of the known command spellings.
//!
//! cargo fuzz run fuzz_command_dispatch

#![no_main]

use libfuzzer_sys::fuzz_target;
use plantbot::app::commands::AppCommand;
use plantbot::protocol::command::normalize;
use plantbot::protocol::dispatch;

fuzz_target!(|data: &[u8]| {
    if data.len() > plantbot::protocol::LINE_CAPACITY {
        return;
    }
    let Some(cmd) = dispatch(data) else {
        return;
    };
    let norm = normalize(data).expect("accepted input must normalise");
    match cmd {
        AppCommand::Water => {
            assert!(matches!(norm.as_str(), "PUMP" | "PUMP_ON" | "CMD:WATER"));
        }
        AppCommand::Status => {
            assert!(matches!(norm.as_str(), "STATUS" | "CMD:STATUS"));
        }
    }
});
