//! Unified error types for the PlantBot firmware.
//!
//! The control loop itself is infallible; these types cover the boot path
//! (peripheral bring-up, config validation, serial link setup) where a
//! failure is reported to `main()` and surfaced through `anyhow`.
//! All variants are `Copy` so they can be passed around without allocation.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible boot-time operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// The host serial link could not be opened or written.
    Serial(SerialError),
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Serial(e) => write!(f, "serial: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Serial errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// UART driver install failed.
    DriverInstall(i32),
    /// A write did not complete.
    WriteFailed(i32),
    /// A read returned an error other than "no data".
    ReadFailed(i32),
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DriverInstall(rc) => write!(f, "UART driver install failed (rc={rc})"),
            Self::WriteFailed(rc) => write!(f, "UART write failed (rc={rc})"),
            Self::ReadFailed(rc) => write!(f, "UART read failed (rc={rc})"),
        }
    }
}

impl std::error::Error for SerialError {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A timing field is zero.  Carries the field name.
    ZeroDuration(&'static str),
    /// `adc_raw_max` is zero, so percentages cannot be computed.
    ZeroRawMax,
    /// The pump on-duration is not shorter than the auto-trigger period.
    CycleExceedsPeriod,
    /// The watchdog would fire between two healthy ticks.
    WatchdogTooShort,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDuration(field) => write!(f, "{field} must be non-zero"),
            Self::ZeroRawMax => write!(f, "adc_raw_max must be non-zero"),
            Self::CycleExceedsPeriod => {
                write!(f, "pump on-duration must be shorter than the auto period")
            }
            Self::WatchdogTooShort => {
                write!(f, "watchdog timeout must exceed the tick yield")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_errors_display_with_prefix() {
        let e: Error = ConfigError::ZeroDuration("tick_yield_ms").into();
        assert_eq!(e.to_string(), "config: tick_yield_ms must be non-zero");

        let e: Error = SerialError::WriteFailed(-1).into();
        assert_eq!(e.to_string(), "serial: UART write failed (rc=-1)");
    }

    #[test]
    fn errors_convert_into_anyhow() {
        let r: anyhow::Result<()> = Err(Error::from(HwInitError::AdcUnitFailed(-1)).into());
        assert_eq!(r.unwrap_err().to_string(), "init: ADC1 unit init failed (rc=-1)");
    }
}
