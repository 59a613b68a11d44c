//! GPIO / peripheral pin assignments for the PlantBot controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Actuators
// ---------------------------------------------------------------------------

/// Digital output: pump relay coil (active HIGH).
pub const PUMP_RELAY_GPIO: i32 = 10;
/// Digital output: piezo buzzer / watering indicator (active HIGH).
pub const BUZZER_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// Sensors — Analog (ADC1)
// ---------------------------------------------------------------------------
//
// On the ESP32-S3, ADC1 channel N is wired to GPIO N+1.

/// NTC temperature probe (voltage divider).  GPIO 4.
pub const TEMP_ADC_CHANNEL: u32 = 3;
/// LDR light sensor (voltage divider).  GPIO 5.
pub const LIGHT_ADC_CHANNEL: u32 = 4;
/// Capacitive soil moisture probe.  GPIO 6.
pub const SOIL_ADC_CHANNEL: u32 = 5;
/// Resistive reservoir water-level strip.  GPIO 7.
pub const WATER_ADC_CHANNEL: u32 = 6;

// ---------------------------------------------------------------------------
// UART link to the host (Raspberry Pi bot)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
