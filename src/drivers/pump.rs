//! Pump relay driver.
//!
//! A single digital output switches the relay coil; the pump runs at a fixed
//! rate while the relay is closed.
//!
//! ## Safety contract
//!
//! Only the pump state machine decides when the relay closes.  This driver
//! is a dumb actuator and never switches on its own.
//!
//! ## Dual-target design
//!
//! Generic over any `embedded_hal` [`OutputPin`]: a `PinDriver` on ESP-IDF,
//! a recording mock under test.

use embedded_hal::digital::{Error as _, OutputPin};
use log::warn;

pub struct PumpDriver<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> PumpDriver<P> {
    /// Take ownership of the relay pin and drive it low.
    pub fn new(pin: P) -> Self {
        let mut driver = Self { pin, on: true };
        driver.set(false);
        driver
    }

    /// Close (`true`) or open (`false`) the relay.
    ///
    /// Pin errors are logged and otherwise ignored; the recorded level is
    /// what was requested.
    pub fn set(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if let Err(e) = result {
            warn!("Pump relay write failed: {:?}", e.kind());
        }
        self.on = on;
    }

    pub fn is_running(&self) -> bool {
        self.on
    }

    /// Release the relay pin, leaving it at its current level.
    pub fn into_inner(self) -> P {
        self.pin
    }
}
