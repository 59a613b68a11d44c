//! State owned by the pump controller.
//!
//! [`PumpState`] and [`AutoTimer`] are plain data; only the transition
//! functions in [`PumpController`](super::PumpController) mutate them.

use crate::scheduler::{Deadline, IntervalTimer, Millis};

// ---------------------------------------------------------------------------
// PumpState
// ---------------------------------------------------------------------------

/// The one process-wide pump state.
///
/// The pump is active exactly while its on-window is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PumpState {
    on_window: Deadline,
}

impl PumpState {
    pub fn new(on_duration_ms: u32) -> Self {
        Self {
            on_window: Deadline::new(on_duration_ms),
        }
    }

    pub fn is_active(&self) -> bool {
        self.on_window.is_armed()
    }

    /// When the current cycle started (or was last restarted).
    pub fn activated_at(&self) -> Option<Millis> {
        self.on_window.armed_at()
    }

    pub fn cycle_elapsed(&self, now: Millis) -> bool {
        self.on_window.has_expired(now)
    }

    pub fn remaining_ms(&self, now: Millis) -> Option<Millis> {
        self.on_window.remaining(now)
    }

    pub(super) fn activate(&mut self, now: Millis) {
        self.on_window.arm(now);
    }

    pub(super) fn deactivate(&mut self) {
        self.on_window.disarm();
    }
}

// ---------------------------------------------------------------------------
// AutoTimer
// ---------------------------------------------------------------------------

/// Tracks the most recent period-based trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoTimer {
    period: IntervalTimer,
}

impl AutoTimer {
    /// Anchored at `now`, so the first auto cycle comes one full period later.
    pub fn new(period_ms: u32, now: Millis) -> Self {
        Self {
            period: IntervalTimer::new(period_ms, now),
        }
    }

    pub fn last_fire_at(&self) -> Millis {
        self.period.last_fired()
    }

    pub fn is_due(&self, now: Millis) -> bool {
        self.period.is_due(now)
    }

    pub(super) fn mark_fired(&mut self, now: Millis) {
        self.period.reset(now);
    }
}
