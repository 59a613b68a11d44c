//! Controller configuration parameters
//!
//! All timing and scaling constants for the PlantBot control loop.
//! Values are fixed at build time; there is no runtime update path.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core controller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerConfig {
    // --- Pump ---
    /// How long one watering cycle keeps the pump on (milliseconds)
    pub pump_on_duration_ms: u32,
    /// Period of the automatic watering trigger (milliseconds)
    pub auto_period_ms: u32,

    // --- Sensors ---
    /// Full-scale raw ADC value after normalisation (10-bit)
    pub adc_raw_max: u16,

    // --- Timing ---
    /// Periodic `SENS%` report interval (milliseconds)
    pub telemetry_interval_ms: u32,
    /// Sleep between control ticks (milliseconds)
    pub tick_yield_ms: u32,
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,

    // --- Serial ---
    /// Host link baud rate
    pub serial_baud: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            // Pump
            pump_on_duration_ms: 3_000,
            auto_period_ms: 180_000, // 3 min

            // Sensors
            adc_raw_max: 1023,

            // Timing
            telemetry_interval_ms: 1_000,
            tick_yield_ms: 50,
            watchdog_timeout_ms: 10_000,

            // Serial
            serial_baud: 115_200,
        }
    }
}

impl ControllerConfig {
    /// Reject combinations the control loop cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pump_on_duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("pump_on_duration_ms"));
        }
        if self.auto_period_ms == 0 {
            return Err(ConfigError::ZeroDuration("auto_period_ms"));
        }
        if self.telemetry_interval_ms == 0 {
            return Err(ConfigError::ZeroDuration("telemetry_interval_ms"));
        }
        if self.tick_yield_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick_yield_ms"));
        }
        if self.adc_raw_max == 0 {
            return Err(ConfigError::ZeroRawMax);
        }
        if self.pump_on_duration_ms >= self.auto_period_ms {
            return Err(ConfigError::CycleExceedsPeriod);
        }
        if self.watchdog_timeout_ms <= self.tick_yield_ms {
            return Err(ConfigError::WatchdogTooShort);
        }
        Ok(())
    }
}
