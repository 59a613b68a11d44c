//! Control loop — the hexagonal core.
//!
//! [`ControlLoop`] owns the pump state machine, the command protocol front
//! end and the telemetry timer.  All I/O flows through port traits injected
//! at call sites, so the whole loop runs headless with mock adapters and an
//! injected clock.
//!
//! ```text
//!   SerialPort ──▶ ┌──────────────────────────┐ ──▶ SerialPort (replies)
//!   SensorPort ──▶ │        ControlLoop        │ ──▶ DisplaySink
//! ActuatorPort ◀── │ Protocol · Pump · Telem   │ ──▶ EventSink
//!                  └──────────────────────────┘
//! ```

use log::info;

use crate::config::ControllerConfig;
use crate::fsm::{PumpController, PumpEvent, StateId, Trigger};
use crate::protocol::{CommandProtocol, Inbound, Response};
use crate::scheduler::{IntervalTimer, Millis};
use crate::sensors::SensorReadings;

use super::commands::AppCommand;
use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, DisplaySink, EventSink, SensorPort, SerialPort, StatusView};

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

pub struct ControlLoop {
    config: ControllerConfig,
    pump: PumpController,
    protocol: CommandProtocol,
    telemetry: IntervalTimer,
    last_readings: SensorReadings,
    tick_count: u64,
}

impl ControlLoop {
    /// Construct the loop with every timer anchored at `now`.
    ///
    /// Outputs are not touched until [`start`](Self::start).
    pub fn new(config: ControllerConfig, now: Millis) -> Self {
        Self {
            pump: PumpController::new(&config, now),
            telemetry: IntervalTimer::new(config.telemetry_interval_ms, now),
            protocol: CommandProtocol::new(),
            last_readings: SensorReadings::default(),
            tick_count: 0,
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Release all outputs and re-anchor the timers at `now`.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink, now: Millis) {
        hw.all_off();
        self.pump = PumpController::new(&self.config, now);
        self.telemetry.reset(now);
        sink.emit(&AppEvent::Started);
        info!("ControlLoop started at {} ms", now);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one control iteration: drain input → pump timers → telemetry →
    /// display.  The caller yields afterwards.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`ActuatorPort`], which avoids a double mutable borrow while keeping
    /// the port boundary explicit.
    pub fn tick(
        &mut self,
        now: Millis,
        hw: &mut (impl SensorPort + ActuatorPort),
        serial: &mut impl SerialPort,
        display: &mut impl DisplaySink,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Input first, so a command arriving on an auto-trigger boundary
        //    takes effect this tick.
        while let Some(byte) = serial.read_byte() {
            match self.protocol.feed(byte) {
                Some(Inbound::Command(cmd)) => self.handle_command(cmd, now, hw, serial, sink),
                Some(Inbound::Ignored { len, truncated }) => {
                    sink.emit(&AppEvent::LineIgnored { len, truncated });
                }
                None => {}
            }
        }

        // 2. Pump timers.
        if let Some(event) = self.pump.tick(now, hw) {
            self.report_pump_event(event, serial, sink);
        }

        // 3. Periodic telemetry.
        let sampled = if self.telemetry.fire_if_due(now) {
            let readings = hw.sample_all();
            self.send_sensors(readings, serial);
            sink.emit(&AppEvent::Telemetry(TelemetryData {
                uptime_ms: now,
                readings,
                pump: self.pump.is_active(),
            }));
            Some(readings)
        } else {
            None
        };

        // 4. Display, with this tick's pump state.
        self.last_readings = sampled.unwrap_or_else(|| hw.sample_all());
        display.present(&self.status_view());
    }

    // ── Command handling ──────────────────────────────────────

    /// Act on one recognised host command and send its reply.
    pub fn handle_command(
        &mut self,
        cmd: AppCommand,
        now: Millis,
        hw: &mut (impl SensorPort + ActuatorPort),
        serial: &mut impl SerialPort,
        sink: &mut impl EventSink,
    ) {
        sink.emit(&AppEvent::CommandReceived(cmd));
        match cmd {
            AppCommand::Water => {
                let event = self.pump.request_manual_activation(now, hw);
                self.report_pump_event(event, serial, sink);
            }
            AppCommand::Status => {
                let readings = hw.sample_all();
                self.send_sensors(readings, serial);
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_pump_active(&self) -> bool {
        self.pump.is_active()
    }

    pub fn state(&self) -> StateId {
        self.pump.current_state()
    }

    pub fn pump(&self) -> &PumpController {
        &self.pump
    }

    /// What the display was last handed.
    pub fn status_view(&self) -> StatusView {
        StatusView {
            readings: self.last_readings,
            pump_active: self.pump.is_active(),
        }
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ── Internal ──────────────────────────────────────────────

    fn report_pump_event(
        &self,
        event: PumpEvent,
        serial: &mut impl SerialPort,
        sink: &mut impl EventSink,
    ) {
        match event {
            PumpEvent::Activated { trigger, restarted } => {
                let reply = match trigger {
                    Trigger::Manual => Response::Pumping,
                    Trigger::Auto => Response::PumpAuto,
                };
                serial.write_line(&reply.to_line());
                sink.emit(&AppEvent::PumpStarted { trigger, restarted });
            }
            PumpEvent::CycleComplete { ran_ms } => {
                serial.write_line(&Response::PumpDone.to_line());
                sink.emit(&AppEvent::PumpStopped { ran_ms });
            }
        }
    }

    fn send_sensors(&self, readings: SensorReadings, serial: &mut impl SerialPort) {
        let line = Response::Sensors {
            readings,
            pump_active: self.pump.is_active(),
        }
        .to_line();
        serial.write_line(&line);
    }
}
