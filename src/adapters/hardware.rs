//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`SensorReader`] and both actuator drivers, exposing them
//! through [`SensorPort`] and [`ActuatorPort`].  This is the only module in
//! the system that touches the probes, the relay or the buzzer.  On
//! non-espidf targets the ADC reads come from the simulation statics in
//! [`analog`](crate::sensors::analog).

use embedded_hal::digital::OutputPin;

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::pump::PumpDriver;
use crate::sensors::{SensorChannel, SensorReader, SensorReadings};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P, B> {
    sensors: SensorReader,
    pump: PumpDriver<P>,
    buzzer: Buzzer<B>,
}

impl<P: OutputPin, B: OutputPin> HardwareAdapter<P, B> {
    pub fn new(sensors: SensorReader, pump: PumpDriver<P>, buzzer: Buzzer<B>) -> Self {
        Self {
            sensors,
            pump,
            buzzer,
        }
    }

    pub fn is_pump_running(&self) -> bool {
        self.pump.is_running()
    }

    pub fn is_buzzer_sounding(&self) -> bool {
        self.buzzer.is_sounding()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<P: OutputPin, B: OutputPin> SensorPort for HardwareAdapter<P, B> {
    fn sample(&mut self, channel: SensorChannel) -> u8 {
        self.sensors.sample(channel)
    }

    fn sample_all(&mut self) -> SensorReadings {
        self.sensors.sample_all()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P: OutputPin, B: OutputPin> ActuatorPort for HardwareAdapter<P, B> {
    fn set_pump(&mut self, on: bool) {
        self.pump.set(on);
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set(on);
    }
}
