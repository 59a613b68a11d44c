//! Single-ended analog sensor input on ADC1.
//!
//! All four PlantBot probes (temperature, light, soil, water) are passive
//! voltage dividers read through the oneshot ADC.  The ESP32-S3 ADC is
//! 12-bit; readings are shifted down to a 10-bit scale so downstream
//! percentages use the same 0–1023 range as the host protocol expects.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static per-channel AtomicU16 for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

use super::SensorChannel;

#[cfg(not(target_os = "espidf"))]
static SIM_RAW: [AtomicU16; SensorChannel::COUNT] = [
    AtomicU16::new(512),
    AtomicU16::new(512),
    AtomicU16::new(512),
    AtomicU16::new(512),
];

/// Inject a raw 10-bit reading for `channel` (host builds only).
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_raw(channel: SensorChannel, raw: u16) {
    SIM_RAW[channel.index()].store(raw, Ordering::Relaxed);
}

/// Bits dropped to go from the 12-bit ADC to the 10-bit sensor scale.
#[cfg(target_os = "espidf")]
const ADC_SHIFT: u32 = 2;

pub struct AnalogChannel {
    channel: SensorChannel,
    adc_channel: u32,
}

impl AnalogChannel {
    pub fn new(channel: SensorChannel, adc_channel: u32) -> Self {
        Self {
            channel,
            adc_channel,
        }
    }

    pub fn channel(&self) -> SensorChannel {
        self.channel
    }

    /// ADC1 channel number this probe is wired to.
    pub fn adc_channel(&self) -> u32 {
        self.adc_channel
    }

    #[cfg(target_os = "espidf")]
    pub fn read_raw(&self) -> u16 {
        hw_init::adc1_read(self.adc_channel) >> ADC_SHIFT
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read_raw(&self) -> u16 {
        SIM_RAW[self.channel.index()].load(Ordering::Relaxed)
    }
}
