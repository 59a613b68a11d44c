//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ControlLoop (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, serial link, display, event sinks,
//! clock) implement these traits.  The [`ControlLoop`](super::service::ControlLoop)
//! consumes them via generics, so the domain core never touches hardware
//! directly and runs headless under test.

use crate::scheduler::Millis;
use crate::sensors::{SensorChannel, SensorReadings};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain sensor percentages.
pub trait SensorPort {
    /// Sample one channel and return its 0–100 percentage.
    fn sample(&mut self, channel: SensorChannel) -> u8;

    /// Sample every channel in report order.
    fn sample_all(&mut self) -> SensorReadings {
        let mut readings = SensorReadings::default();
        for channel in SensorChannel::ALL {
            readings.set(channel, self.sample(channel));
        }
        readings
    }
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
///
/// Writes are fire-and-forget; implementations swallow pin errors.
pub trait ActuatorPort {
    /// Energise (`true`) or release (`false`) the pump relay.
    fn set_pump(&mut self, on: bool);

    /// Drive the buzzer / watering indicator.
    fn set_buzzer(&mut self, on: bool);

    /// Release every output.
    fn all_off(&mut self) {
        self.set_pump(false);
        self.set_buzzer(false);
    }
}

// ───────────────────────────────────────────────────────────────
// Serial port (driven adapter: domain ↔ host link)
// ───────────────────────────────────────────────────────────────

/// Line-oriented host link.
pub trait SerialPort {
    /// Next byte already received, or `None` if nothing is pending.
    /// Must never block waiting for input.
    fn read_byte(&mut self) -> Option<u8>;

    /// Send one protocol line.  The adapter appends the terminator.
    fn write_line(&mut self, line: &str);
}

// ───────────────────────────────────────────────────────────────
// Display sink (driven adapter: domain → screen)
// ───────────────────────────────────────────────────────────────

/// Everything the status screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusView {
    pub readings: SensorReadings,
    pub pump_active: bool,
}

/// One-way consumer of the status view.  No feedback into the core.
pub trait DisplaySink {
    fn present(&mut self, view: &StatusView);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Time port (driven adapter: clock → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.
pub trait TimePort {
    fn now_ms(&self) -> Millis;
}
