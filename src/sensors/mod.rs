//! Sensor subsystem — the analog channel driver and the aggregating
//! [`SensorReader`].
//!
//! The reader owns one [`AnalogChannel`] per probe and converts raw ADC
//! counts to a 0–100 percentage on every call.  It keeps no state between
//! samples; the periodic telemetry path and the on-demand `STATUS` path both
//! call [`SensorReader::sample_all`] so they format identical readings
//! identically.

pub mod analog;

use serde::Serialize;

use crate::pins;
use analog::AnalogChannel;

/// Identity of one analog probe.  Declaration order is report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SensorChannel {
    Temperature = 0,
    Light = 1,
    Soil = 2,
    Water = 3,
}

impl SensorChannel {
    pub const COUNT: usize = 4;

    /// Every channel, in report order (`T`, `L`, `S`, `W`).
    pub const ALL: [Self; Self::COUNT] = [Self::Temperature, Self::Light, Self::Soil, Self::Water];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter tag used on the wire.
    pub fn tag(self) -> char {
        match self {
            Self::Temperature => 'T',
            Self::Light => 'L',
            Self::Soil => 'S',
            Self::Water => 'W',
        }
    }
}

/// Percentages for all four channels, taken in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SensorReadings {
    #[serde(rename = "t")]
    pub temperature: u8,
    #[serde(rename = "l")]
    pub light: u8,
    #[serde(rename = "s")]
    pub soil: u8,
    #[serde(rename = "w")]
    pub water: u8,
}

impl SensorReadings {
    pub fn get(&self, channel: SensorChannel) -> u8 {
        match channel {
            SensorChannel::Temperature => self.temperature,
            SensorChannel::Light => self.light,
            SensorChannel::Soil => self.soil,
            SensorChannel::Water => self.water,
        }
    }

    pub fn set(&mut self, channel: SensorChannel, percent: u8) {
        match channel {
            SensorChannel::Temperature => self.temperature = percent,
            SensorChannel::Light => self.light = percent,
            SensorChannel::Soil => self.soil = percent,
            SensorChannel::Water => self.water = percent,
        }
    }
}

/// Scale a raw reading to 0–100, truncating toward zero.
///
/// Readings below zero clamp to 0 and readings above `raw_max` clamp to 100.
/// A `raw_max` of zero is treated as 1 so the function stays total.
pub fn percentage(raw: i32, raw_max: u16) -> u8 {
    let max = i64::from(raw_max.max(1));
    let scaled = i64::from(raw) * 100 / max;
    scaled.clamp(0, 100) as u8
}

/// Samples every probe and converts to percentages.
pub struct SensorReader {
    channels: [AnalogChannel; SensorChannel::COUNT],
    raw_max: u16,
}

impl SensorReader {
    /// Reader wired to the board's ADC assignments from [`pins`].
    pub fn new(raw_max: u16) -> Self {
        Self {
            channels: [
                AnalogChannel::new(SensorChannel::Temperature, pins::TEMP_ADC_CHANNEL),
                AnalogChannel::new(SensorChannel::Light, pins::LIGHT_ADC_CHANNEL),
                AnalogChannel::new(SensorChannel::Soil, pins::SOIL_ADC_CHANNEL),
                AnalogChannel::new(SensorChannel::Water, pins::WATER_ADC_CHANNEL),
            ],
            raw_max,
        }
    }

    pub fn channel(&self, channel: SensorChannel) -> &AnalogChannel {
        &self.channels[channel.index()]
    }

    pub fn read_raw(&self, channel: SensorChannel) -> u16 {
        self.channels[channel.index()].read_raw()
    }

    pub fn sample(&self, channel: SensorChannel) -> u8 {
        percentage(i32::from(self.read_raw(channel)), self.raw_max)
    }

    pub fn sample_all(&self) -> SensorReadings {
        let mut readings = SensorReadings::default();
        for channel in SensorChannel::ALL {
            readings.set(channel, self.sample(channel));
        }
        readings
    }
}
