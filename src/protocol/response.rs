//! Outbound protocol lines.
//!
//! | Line                                   | When                          |
//! |----------------------------------------|-------------------------------|
//! | `ACK:PUMPING`                          | water command accepted        |
//! | `ACK:PUMP_DONE`                        | cycle finished                |
//! | `ACK:PUMP_AUTO`                        | auto-trigger started a cycle  |
//! | `SENS% T=<t> L=<l> S=<s> W=<w> PUMP=<p>` | telemetry tick or status reply |
//!
//! Percentages are plain decimal without padding; `PUMP` is `1` while a
//! cycle is active.  The terminator is appended by the serial adapter.

use core::fmt::{self, Write as _};

use heapless::String;

use crate::sensors::{SensorChannel, SensorReadings};

/// Longest line we ever send, with headroom.
pub const RESPONSE_CAPACITY: usize = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Pumping,
    PumpDone,
    PumpAuto,
    Sensors {
        readings: SensorReadings,
        pump_active: bool,
    },
}

impl Response {
    /// Render into a fixed-capacity buffer.
    pub fn to_line(&self) -> String<RESPONSE_CAPACITY> {
        let mut line = String::new();
        // Worst case "SENS% T=100 L=100 S=100 W=100 PUMP=1" is 37 bytes.
        let _ = write!(line, "{self}");
        line
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pumping => f.write_str("ACK:PUMPING"),
            Self::PumpDone => f.write_str("ACK:PUMP_DONE"),
            Self::PumpAuto => f.write_str("ACK:PUMP_AUTO"),
            Self::Sensors {
                readings,
                pump_active,
            } => {
                f.write_str("SENS%")?;
                for channel in SensorChannel::ALL {
                    write!(f, " {}={}", channel.tag(), readings.get(channel))?;
                }
                write!(f, " PUMP={}", u8::from(*pump_active))
            }
        }
    }
}
