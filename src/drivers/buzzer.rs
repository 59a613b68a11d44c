//! Watering indicator buzzer.
//!
//! An active piezo buzzer: it sounds while its line is asserted, no PWM
//! needed.  Boards differ in whether the transistor stage inverts, so the
//! assert level is configurable.

use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::warn;

/// Pin level that makes the buzzer sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    fn level(self, sounding: bool) -> PinState {
        match self {
            Self::ActiveHigh => PinState::from(sounding),
            Self::ActiveLow => PinState::from(!sounding),
        }
    }
}

pub struct Buzzer<P> {
    pin: P,
    polarity: Polarity,
    sounding: bool,
}

impl<P: OutputPin> Buzzer<P> {
    /// Take ownership of the pin, silent.
    pub fn new(pin: P, polarity: Polarity) -> Self {
        let mut buzzer = Self {
            pin,
            polarity,
            sounding: false,
        };
        buzzer.set(false);
        buzzer
    }

    pub fn set(&mut self, sounding: bool) {
        if let Err(e) = self.pin.set_state(self.polarity.level(sounding)) {
            warn!("Buzzer write failed: {:?}", e.kind());
        }
        self.sounding = sounding;
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}
