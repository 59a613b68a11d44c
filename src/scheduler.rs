//! Fixed-rate and fixed-duration timers.
//!
//! The control loop needs exactly two kinds of timing:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  IntervalTimer  (fixed-rate)                                 │
//! │    auto-watering period · telemetry cadence                  │
//! │                                                              │
//! │  Deadline       (fixed-duration, re-armable)                 │
//! │    pump on-window                                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both are driven by an injected millisecond timestamp rather than by
//! sleeping, so tests can jump the clock forward freely.  Elapsed time is
//! computed with saturating subtraction: a timestamp earlier than the
//! anchor reads as zero elapsed rather than wrapping.

/// Monotonic timestamp in milliseconds since boot.
pub type Millis = u64;

// ═══════════════════════════════════════════════════════════════
//  IntervalTimer
// ═══════════════════════════════════════════════════════════════

/// Fires once every `period_ms`, measured from the last time it was reset.
///
/// The timer does not reset itself: the owner decides whether a due
/// period is consumed (e.g. the auto-trigger skips while the pump runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    period_ms: Millis,
    last_ms: Millis,
}

impl IntervalTimer {
    /// A timer anchored at `now`.
    pub fn new(period_ms: u32, now: Millis) -> Self {
        Self {
            period_ms: Millis::from(period_ms),
            last_ms: now,
        }
    }

    pub fn period_ms(&self) -> Millis {
        self.period_ms
    }

    /// Timestamp of the last reset.
    pub fn last_fired(&self) -> Millis {
        self.last_ms
    }

    pub fn elapsed(&self, now: Millis) -> Millis {
        now.saturating_sub(self.last_ms)
    }

    /// `true` once at least one full period has elapsed since the last reset.
    pub fn is_due(&self, now: Millis) -> bool {
        self.elapsed(now) >= self.period_ms
    }

    /// Re-anchor the period at `now`.
    pub fn reset(&mut self, now: Millis) {
        self.last_ms = now;
    }

    /// Check and consume in one step.  Returns `true` if the period had
    /// elapsed, in which case the timer is re-anchored at `now`.
    pub fn fire_if_due(&mut self, now: Millis) -> bool {
        if self.is_due(now) {
            self.reset(now);
            true
        } else {
            false
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  Deadline
// ═══════════════════════════════════════════════════════════════

/// A fixed-duration window that can be (re)armed at any time.
///
/// Arming an already-armed deadline restarts the window from the new
/// timestamp; windows never stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    duration_ms: Millis,
    armed_at: Option<Millis>,
}

impl Deadline {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: Millis::from(duration_ms),
            armed_at: None,
        }
    }

    pub fn arm(&mut self, now: Millis) {
        self.armed_at = Some(now);
    }

    pub fn disarm(&mut self) {
        self.armed_at = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn armed_at(&self) -> Option<Millis> {
        self.armed_at
    }

    /// `true` if armed and the full duration has passed.
    pub fn has_expired(&self, now: Millis) -> bool {
        self.armed_at
            .is_some_and(|t| now.saturating_sub(t) >= self.duration_ms)
    }

    /// Milliseconds left in the window, or `None` if not armed.
    pub fn remaining(&self, now: Millis) -> Option<Millis> {
        self.armed_at
            .map(|t| self.duration_ms.saturating_sub(now.saturating_sub(t)))
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
