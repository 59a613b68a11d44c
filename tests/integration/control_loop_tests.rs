//! End-to-end tests for the serial → ControlLoop → actuator pipeline.
//!
//! Time is simulated: the bench advances a virtual clock in 50 ms steps
//! and calls `tick` exactly as the firmware main loop does.

use plantbot::adapters::serial::SimSerial;
use plantbot::app::events::AppEvent;
use plantbot::app::service::ControlLoop;
use plantbot::config::ControllerConfig;
use plantbot::fsm::{StateId, Trigger};
use plantbot::scheduler::Millis;

use crate::mock_hw::{ActuatorCall, LogSink, MockHardware, RecordingDisplay};

const TICK_MS: Millis = 50;

struct Bench {
    ctl: ControlLoop,
    hw: MockHardware,
    serial: SimSerial,
    display: RecordingDisplay,
    sink: LogSink,
    now: Millis,
}

impl Bench {
    fn new() -> Self {
        let mut bench = Self {
            ctl: ControlLoop::new(ControllerConfig::default(), 0),
            hw: MockHardware::new(),
            serial: SimSerial::new(),
            display: RecordingDisplay::default(),
            sink: LogSink::default(),
            now: 0,
        };
        bench.ctl.start(&mut bench.hw, &mut bench.sink, 0);
        bench
    }

    fn tick_at(&mut self, now: Millis) {
        self.now = now;
        self.ctl.tick(
            now,
            &mut self.hw,
            &mut self.serial,
            &mut self.display,
            &mut self.sink,
        );
    }

    fn step(&mut self) {
        self.tick_at(self.now + TICK_MS);
    }

    /// Tick every 50 ms until the clock reaches `until` (inclusive).
    fn run_until(&mut self, until: Millis) {
        while self.now + TICK_MS <= until {
            self.step();
        }
    }

    fn send(&mut self, text: &str) {
        self.serial.inject(text.as_bytes());
    }

    /// Captured lines excluding periodic telemetry.
    fn acks(&mut self) -> Vec<String> {
        self.serial
            .take_output()
            .into_iter()
            .filter(|l| l.starts_with("ACK:"))
            .collect()
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_releases_outputs_before_first_tick() {
    let bench = Bench::new();
    assert_eq!(bench.hw.calls, [ActuatorCall::AllOff]);
    assert!(matches!(bench.sink.events[0], AppEvent::Started));
    assert_eq!(bench.ctl.state(), StateId::Idle);
}

// ── Scenario A: quiet loop ────────────────────────────────────

#[test]
fn idle_loop_emits_only_telemetry() {
    let mut bench = Bench::new();
    bench.hw.set_all_raw(1023);

    bench.run_until(950);
    assert!(bench.serial.lines().is_empty());

    bench.run_until(3_000);
    assert_eq!(
        bench.serial.take_output(),
        vec![
            "SENS% T=100 L=100 S=100 W=100 PUMP=0",
            "SENS% T=100 L=100 S=100 W=100 PUMP=0",
            "SENS% T=100 L=100 S=100 W=100 PUMP=0",
        ]
    );
    assert!(!bench.hw.pump_on());
}

// ── Scenario B: manual cycle ──────────────────────────────────

#[test]
fn manual_pump_runs_for_on_duration() {
    let mut bench = Bench::new();
    bench.send("PUMP\n");
    bench.step();

    assert_eq!(bench.acks(), ["ACK:PUMPING"]);
    assert!(bench.ctl.is_pump_active());
    assert!(bench.hw.pump_on() && bench.hw.buzzer_on());

    bench.run_until(TICK_MS + 2_950);
    assert!(bench.ctl.is_pump_active());
    assert!(bench.acks().is_empty());

    bench.step();
    assert_eq!(bench.acks(), ["ACK:PUMP_DONE"]);
    assert!(!bench.ctl.is_pump_active());
    assert!(!bench.hw.pump_on() && !bench.hw.buzzer_on());
}

#[test]
fn every_water_alias_starts_a_cycle() {
    for alias in ["PUMP\n", "pump_on\r\n", "Cmd:Water\n"] {
        let mut bench = Bench::new();
        bench.send(alias);
        bench.step();
        assert_eq!(bench.acks(), ["ACK:PUMPING"], "alias {:?}", alias);
    }
}

#[test]
fn repeated_manual_command_extends_cycle() {
    let mut bench = Bench::new();
    bench.send("PUMP\n");
    bench.step(); // 50
    bench.run_until(2_000);
    bench.send("PUMP\n");
    bench.step(); // 2050, window restarts
    assert_eq!(bench.acks(), ["ACK:PUMPING", "ACK:PUMPING"]);

    bench.run_until(5_000);
    assert!(bench.ctl.is_pump_active());
    assert!(bench.acks().is_empty());

    bench.step(); // 5050
    assert_eq!(bench.acks(), ["ACK:PUMP_DONE"]);
    assert!(bench.sink.events.iter().any(|e| matches!(
        e,
        AppEvent::PumpStarted {
            trigger: Trigger::Manual,
            restarted: true
        }
    )));
}

// ── Scenario C: auto-trigger ──────────────────────────────────

#[test]
fn auto_cycle_after_period_without_commands() {
    let mut bench = Bench::new();

    bench.run_until(179_950);
    assert!(bench.acks().is_empty());

    bench.step(); // 180 000
    assert_eq!(bench.acks(), ["ACK:PUMP_AUTO"]);
    assert!(bench.ctl.is_pump_active());
    assert_eq!(bench.ctl.pump().last_auto_fire_at(), 180_000);

    bench.run_until(183_000);
    assert_eq!(bench.acks(), ["ACK:PUMP_DONE"]);
    assert!(!bench.ctl.is_pump_active());

    // Nothing more until the next period.
    bench.run_until(359_950);
    assert!(bench.acks().is_empty());
    bench.step();
    assert_eq!(bench.acks(), ["ACK:PUMP_AUTO"]);
}

#[test]
fn manual_command_on_auto_boundary_preempts_auto() {
    let mut bench = Bench::new();
    bench.run_until(179_950);
    bench.serial.take_output();

    // Input is drained before timers advance.
    bench.send("PUMP\n");
    bench.step(); // 180 000
    assert_eq!(bench.acks(), ["ACK:PUMPING"]);
    assert_eq!(bench.ctl.pump().last_auto_fire_at(), 0);

    // The completion tick only completes; the overdue period fires next.
    bench.run_until(183_000);
    assert_eq!(bench.acks(), ["ACK:PUMP_DONE"]);
    bench.step();
    assert_eq!(bench.acks(), ["ACK:PUMP_AUTO"]);
}

#[test]
fn manual_during_auto_cycle_extends_it() {
    let mut bench = Bench::new();
    bench.run_until(180_000);
    assert_eq!(bench.acks(), ["ACK:PUMP_AUTO"]);

    bench.run_until(181_000);
    // Drop the 181 000 telemetry line so only this tick's replies remain.
    bench.serial.take_output();
    bench.send("STATUS\nPUMP\n");
    bench.step(); // 181 050
    let lines = bench.serial.take_output();
    assert_eq!(lines, ["SENS% T=0 L=0 S=0 W=0 PUMP=1", "ACK:PUMPING"]);

    bench.run_until(184_000);
    assert!(bench.acks().is_empty());
    bench.step();
    assert_eq!(bench.acks(), ["ACK:PUMP_DONE"]);
}

// ── Scenario D: status ────────────────────────────────────────

#[test]
fn status_reports_fixed_raw_readings() {
    let mut bench = Bench::new();
    bench.hw.set_all_raw(511);
    bench.send("STATUS\n");
    bench.step();
    assert_eq!(bench.serial.take_output(), ["SENS% T=49 L=49 S=49 W=49 PUMP=0"]);
}

#[test]
fn lowercase_status_with_crlf_is_recognised() {
    let mut bench = Bench::new();
    bench.hw.raw = [0, 255, 767, 1023];
    bench.send("cmd:status\r\n");
    bench.step();
    assert_eq!(bench.serial.take_output(), ["SENS% T=0 L=24 S=74 W=100 PUMP=0"]);
}

#[test]
fn status_and_telemetry_format_identically() {
    let mut bench = Bench::new();
    bench.hw.set_all_raw(511);
    bench.run_until(950);
    bench.send("STATUS\n");
    bench.step(); // 1000: status reply, then telemetry
    let lines = bench.serial.take_output();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], lines[1]);
}

// ── Robustness ────────────────────────────────────────────────

#[test]
fn overlong_line_is_ignored_and_link_recovers() {
    let mut bench = Bench::new();
    let mut junk = "PUMP".to_owned();
    junk.push_str(&"X".repeat(200));
    junk.push('\n');
    bench.send(&junk);
    bench.step();
    assert!(bench.serial.lines().is_empty());
    assert!(!bench.ctl.is_pump_active());
    assert!(bench.sink.events.iter().any(|e| matches!(
        e,
        AppEvent::LineIgnored {
            truncated: true,
            ..
        }
    )));

    bench.send("PUMP\n");
    bench.step();
    assert_eq!(bench.acks(), ["ACK:PUMPING"]);
}

#[test]
fn partial_line_waits_for_terminator() {
    let mut bench = Bench::new();
    bench.send("STA");
    bench.step();
    assert!(bench.serial.lines().is_empty());
    bench.send("TUS\n");
    bench.step();
    assert_eq!(bench.serial.lines().len(), 1);
}

#[test]
fn unknown_commands_get_no_reply() {
    let mut bench = Bench::new();
    bench.send("HELLO\n\n\r\nWATER\n");
    bench.step();
    assert!(bench.serial.lines().is_empty());
    assert_eq!(bench.serial.pending_input(), 0);
}

// ── Display + telemetry reflect this tick ─────────────────────

#[test]
fn display_sees_each_tick_with_current_pump_state() {
    let mut bench = Bench::new();
    bench.hw.set_all_raw(511);
    bench.step();
    bench.send("PUMP\n");
    bench.step();

    assert_eq!(bench.display.views.len(), 2);
    assert!(!bench.display.views[0].pump_active);
    let last = bench.display.last().unwrap();
    assert!(last.pump_active);
    assert_eq!(last.readings.soil, 49);
    assert_eq!(bench.ctl.status_view(), *last);
}

#[test]
fn telemetry_reports_pump_state_after_transition() {
    let mut bench = Bench::new();
    bench.run_until(950);
    bench.send("PUMP\n");
    bench.step(); // 1000
    assert_eq!(
        bench.serial.take_output(),
        ["ACK:PUMPING", "SENS% T=0 L=0 S=0 W=0 PUMP=1"]
    );
    assert!(bench.sink.events.iter().any(|e| matches!(
        e,
        AppEvent::Telemetry(t) if t.pump && t.uptime_ms == 1_000
    )));
}

#[test]
fn water_request_completes_within_host_read_window() {
    let mut bench = Bench::new();
    bench.run_until(10_000);
    bench.serial.take_output();

    // The host sends PUMP and reads everything four seconds later.
    bench.send("PUMP\n");
    bench.run_until(14_000);
    let acks = bench.acks();
    assert_eq!(acks, ["ACK:PUMPING", "ACK:PUMP_DONE"]);
}
