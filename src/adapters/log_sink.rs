//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART0 / USB-CDC in production).  The host protocol
//! runs on its own UART, so nothing here reaches the command link.

use log::{debug, info, warn};

use crate::app::events::{AppEvent, TelemetryData};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

/// Compact JSON rendering of a telemetry snapshot.
pub fn telemetry_json(t: &TelemetryData) -> Option<String> {
    match serde_json::to_string(t) {
        Ok(json) => Some(json),
        Err(e) => {
            warn!("telemetry encode failed: {}", e);
            None
        }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | up={}ms | T={}% L={}% S={}% W={}% | pump={}",
                    t.uptime_ms,
                    t.readings.temperature,
                    t.readings.light,
                    t.readings.soil,
                    t.readings.water,
                    if t.pump { "ON" } else { "OFF" },
                );
                if let Some(json) = telemetry_json(t) {
                    debug!("TELEM | {}", json);
                }
            }
            AppEvent::PumpStarted { trigger, restarted } => {
                info!("PUMP | start trigger={:?} restarted={}", trigger, restarted);
            }
            AppEvent::PumpStopped { ran_ms } => {
                info!("PUMP | stop after {} ms", ran_ms);
            }
            AppEvent::CommandReceived(cmd) => {
                info!("CMD | {:?}", cmd);
            }
            AppEvent::LineIgnored { len, truncated } => {
                debug!("CMD | ignored line len={} truncated={}", len, truncated);
            }
            AppEvent::Started => {
                info!("START | outputs released");
            }
        }
    }
}
