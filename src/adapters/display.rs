//! Log-backed display sink.
//!
//! The board has no screen fitted; [`LogDisplay`] stands in for one by
//! writing a status line whenever what would be shown changes.  Identical
//! consecutive views are suppressed so the 20 Hz loop does not flood the log.

use log::debug;

use crate::app::ports::{DisplaySink, StatusView};

#[derive(Debug, Default)]
pub struct LogDisplay {
    shown: Option<StatusView>,
    renders: u32,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Views actually rendered (after change suppression).
    pub fn renders(&self) -> u32 {
        self.renders
    }
}

impl DisplaySink for LogDisplay {
    fn present(&mut self, view: &StatusView) {
        if self.shown.as_ref() == Some(view) {
            return;
        }
        let r = &view.readings;
        debug!(
            "DISPLAY | T {:>3}% | L {:>3}% | S {:>3}% | W {:>3}% | {}",
            r.temperature,
            r.light,
            r.soil,
            r.water,
            if view.pump_active { "WATERING" } else { "idle" }
        );
        self.shown = Some(*view);
        self.renders += 1;
    }
}
