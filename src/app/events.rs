//! Outbound application events.
//!
//! The [`ControlLoop`](super::service::ControlLoop) emits these through the
//! [`EventSink`](super::ports::EventSink) port for diagnostics.  They are
//! separate from the protocol lines written to the host link.

use serde::Serialize;

use super::commands::AppCommand;
use crate::fsm::Trigger;
use crate::scheduler::Millis;
use crate::sensors::SensorReadings;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The control loop has started and released all outputs.
    Started,

    /// The pump was switched on, or its window restarted.
    PumpStarted { trigger: Trigger, restarted: bool },

    /// A watering cycle finished.
    PumpStopped { ran_ms: Millis },

    /// A recognised command line arrived.
    CommandReceived(AppCommand),

    /// A completed line matched no command.
    LineIgnored { len: usize, truncated: bool },

    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TelemetryData {
    pub uptime_ms: Millis,
    #[serde(flatten)]
    pub readings: SensorReadings,
    pub pump: bool,
}
