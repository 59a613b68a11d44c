//! Timer-driven pump state machine.
//!
//! ```text
//!            manual request / auto period elapsed
//!        ┌──────────────────────────────────────────┐
//!        │                                          ▼
//!   ┌─────────┐                                ┌──────────┐
//!   │  Idle   │◀───── on-duration elapsed ─────│  Active  │──┐
//!   └─────────┘                                └──────────┘  │ manual request
//!                                                   ▲        │ (restart window)
//!                                                   └────────┘
//! ```
//!
//! The controller is the single writer of the pump relay and buzzer.
//! Other components only *request* a transition through
//! [`PumpController::request_manual_activation`]; the timers advance in
//! [`PumpController::tick`].  There is no terminal state and no way to
//! abort a cycle early.

pub mod context;

use log::{debug, info};

use crate::app::ports::ActuatorPort;
use crate::config::ControllerConfig;
use crate::scheduler::Millis;
use context::{AutoTimer, PumpState};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Idle = 0,
    Active = 1,
}

/// What started a watering cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Host command.
    Manual,
    /// Auto-trigger period elapsed.
    Auto,
}

/// Observable outcome of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpEvent {
    /// Idle → Active, or the on-window was restarted while Active.
    Activated { trigger: Trigger, restarted: bool },
    /// Active → Idle after the on-window elapsed.
    CycleComplete { ran_ms: Millis },
}

// ---------------------------------------------------------------------------
// PumpController
// ---------------------------------------------------------------------------

pub struct PumpController {
    state: PumpState,
    auto: AutoTimer,
}

impl PumpController {
    /// Controller in `Idle`, with the auto-trigger period anchored at `now`.
    pub fn new(config: &ControllerConfig, now: Millis) -> Self {
        Self {
            state: PumpState::new(config.pump_on_duration_ms),
            auto: AutoTimer::new(config.auto_period_ms, now),
        }
    }

    /// Start a cycle regardless of the current state.
    ///
    /// While already `Active` this restarts the on-window from `now`; the
    /// cycle is extended, never stacked.
    pub fn request_manual_activation(
        &mut self,
        now: Millis,
        hw: &mut impl ActuatorPort,
    ) -> PumpEvent {
        self.start_pump(now, Trigger::Manual, hw)
    }

    /// Advance both timers.  Call once per control tick.
    ///
    /// At most one transition happens per call: a cycle that completes this
    /// tick does not also auto-start a new one.
    pub fn tick(&mut self, now: Millis, hw: &mut impl ActuatorPort) -> Option<PumpEvent> {
        if self.state.is_active() {
            if self.state.cycle_elapsed(now) {
                return Some(self.stop_pump(now, hw));
            }
        } else if self.auto.is_due(now) {
            self.auto.mark_fired(now);
            return Some(self.start_pump(now, Trigger::Auto, hw));
        }
        None
    }

    pub fn current_state(&self) -> StateId {
        if self.state.is_active() {
            StateId::Active
        } else {
            StateId::Idle
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn state(&self) -> &PumpState {
        &self.state
    }

    pub fn last_auto_fire_at(&self) -> Millis {
        self.auto.last_fire_at()
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    fn start_pump(&mut self, now: Millis, trigger: Trigger, hw: &mut impl ActuatorPort) -> PumpEvent {
        let restarted = self.state.is_active();
        self.state.activate(now);
        hw.set_pump(true);
        hw.set_buzzer(true);

        if restarted {
            debug!("Pump window restarted at {} ms ({:?})", now, trigger);
        } else {
            info!(
                "FSM transition: {:?} -> {:?} ({:?})",
                StateId::Idle,
                StateId::Active,
                trigger
            );
        }
        PumpEvent::Activated { trigger, restarted }
    }

    fn stop_pump(&mut self, now: Millis, hw: &mut impl ActuatorPort) -> PumpEvent {
        let ran_ms = self
            .state
            .activated_at()
            .map_or(0, |t| now.saturating_sub(t));
        self.state.deactivate();
        hw.set_pump(false);
        hw.set_buzzer(false);

        info!(
            "FSM transition: {:?} -> {:?} (ran {} ms)",
            StateId::Active,
            StateId::Idle,
            ran_ms
        );
        PumpEvent::CycleComplete { ran_ms }
    }
}
