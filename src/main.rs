//! PlantBot Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter   UartSerial   LogDisplay   LogEventSink      │
//! │  (Sensor+Actuator) (SerialPort) (Display)    (EventSink)       │
//! │  SystemClock (TimePort)                                        │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │             ControlLoop (pure logic)                   │    │
//! │  │  CommandProtocol · PumpController · telemetry timer    │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  tick → feed watchdog → yield                                  │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Output, PinDriver};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use plantbot::adapters::display::LogDisplay;
use plantbot::adapters::hardware::HardwareAdapter;
use plantbot::adapters::log_sink::LogEventSink;
use plantbot::adapters::serial::UartSerial;
use plantbot::adapters::time::SystemClock;
use plantbot::app::ports::TimePort;
use plantbot::app::service::ControlLoop;
use plantbot::config::ControllerConfig;
use plantbot::drivers::buzzer::{Buzzer, Polarity};
use plantbot::drivers::hw_init::{self, HwInitError};
use plantbot::drivers::pump::PumpDriver;
use plantbot::drivers::watchdog::Watchdog;
use plantbot::error;
use plantbot::pins;
use plantbot::sensors::SensorReader;

type OutPin = PinDriver<'static, AnyOutputPin, Output>;

/// Everything `main` needs from the board.
struct Board {
    hw: HardwareAdapter<OutPin, OutPin>,
    serial: UartSerial,
}

/// Validate config and bring up every peripheral.
fn bring_up(config: &ControllerConfig) -> error::Result<Board> {
    config.validate()?;
    hw_init::init_peripherals()?;

    let p = Peripherals::take().map_err(|_| HwInitError::PeripheralsTaken)?;

    // Pin numbers here must match `pins`.
    let relay = PinDriver::output(AnyOutputPin::from(p.pins.gpio10))
        .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    let buzzer = PinDriver::output(AnyOutputPin::from(p.pins.gpio11))
        .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    let tx: AnyIOPin = p.pins.gpio17.into();
    let rx: AnyIOPin = p.pins.gpio18.into();
    info!(
        "GPIO: relay={} buzzer={}",
        pins::PUMP_RELAY_GPIO,
        pins::BUZZER_GPIO
    );

    let hw = HardwareAdapter::new(
        SensorReader::new(config.adc_raw_max),
        PumpDriver::new(relay),
        Buzzer::new(buzzer, Polarity::ActiveHigh),
    );

    let serial = UartSerial::open(p.uart1, tx, rx, config.serial_baud)?;

    Ok(Board { hw, serial })
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  PlantBot v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config + peripherals ───────────────────────────────
    let config = ControllerConfig::default();
    let Board { mut hw, mut serial } = bring_up(&config)?;
    let watchdog = Watchdog::new(config.watchdog_timeout_ms);

    // ── 3. Adapters + core ────────────────────────────────────
    let clock = SystemClock::new();
    let mut display = LogDisplay::new();
    let mut sink = LogEventSink::new();

    let tick_yield_ms = config.tick_yield_ms;
    let mut control = ControlLoop::new(config, clock.now_ms());
    control.start(&mut hw, &mut sink, clock.now_ms());

    info!(
        "Control loop running (tick yield {} ms, UART TX={} RX={})",
        tick_yield_ms,
        pins::UART_TX_GPIO,
        pins::UART_RX_GPIO
    );

    // ── 4. Main loop ──────────────────────────────────────────
    loop {
        control.tick(clock.now_ms(), &mut hw, &mut serial, &mut display, &mut sink);
        watchdog.feed();
        FreeRtos::delay_ms(tick_yield_ms);
    }
}
