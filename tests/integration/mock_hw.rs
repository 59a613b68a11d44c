//! Mock hardware adapters for integration tests.
//!
//! Records every actuator call so tests can assert on the full command
//! history without touching real GPIO or ADC registers.  Sensor readings
//! are raw 10-bit values converted exactly as the real reader does.

use plantbot::app::events::AppEvent;
use plantbot::app::ports::{ActuatorPort, DisplaySink, EventSink, SensorPort, StatusView};
use plantbot::sensors::{SensorChannel, percentage};

pub const RAW_MAX: u16 = 1023;

// ── Actuator call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SetPump(bool),
    SetBuzzer(bool),
    AllOff,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub raw: [i32; SensorChannel::COUNT],
    pub calls: Vec<ActuatorCall>,
    pub samples: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            raw: [0; SensorChannel::COUNT],
            calls: Vec::new(),
            samples: 0,
        }
    }

    pub fn set_all_raw(&mut self, raw: i32) {
        self.raw = [raw; SensorChannel::COUNT];
    }

    pub fn pump_on(&self) -> bool {
        self.last_level(|c| match c {
            ActuatorCall::SetPump(on) => Some(*on),
            ActuatorCall::AllOff => Some(false),
            ActuatorCall::SetBuzzer(_) => None,
        })
    }

    pub fn buzzer_on(&self) -> bool {
        self.last_level(|c| match c {
            ActuatorCall::SetBuzzer(on) => Some(*on),
            ActuatorCall::AllOff => Some(false),
            ActuatorCall::SetPump(_) => None,
        })
    }

    fn last_level(&self, f: impl Fn(&ActuatorCall) -> Option<bool>) -> bool {
        self.calls.iter().rev().find_map(f).unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorPort for MockHardware {
    fn sample(&mut self, channel: SensorChannel) -> u8 {
        self.samples += 1;
        percentage(self.raw[channel.index()], RAW_MAX)
    }
}

impl ActuatorPort for MockHardware {
    fn set_pump(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetPump(on));
    }

    fn set_buzzer(&mut self, on: bool) {
        self.calls.push(ActuatorCall::SetBuzzer(on));
    }

    fn all_off(&mut self) {
        self.calls.push(ActuatorCall::AllOff);
    }
}

// ── RecordingDisplay ─────────────────────────────────────────

#[derive(Default)]
pub struct RecordingDisplay {
    pub views: Vec<StatusView>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn last(&self) -> Option<&StatusView> {
        self.views.last()
    }
}

impl DisplaySink for RecordingDisplay {
    fn present(&mut self, view: &StatusView) {
        self.views.push(*view);
    }
}

// ── LogSink ──────────────────────────────────────────────────

#[derive(Default)]
pub struct LogSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for LogSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
