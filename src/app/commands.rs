//! Inbound commands to the control loop.
//!
//! These represent actions requested by the host over the serial link.
//! The protocol layer turns a normalised line into one of these; the
//! [`ControlLoop`](super::service::ControlLoop) acts on it.

/// Commands the host can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Start (or restart) a manual watering cycle.
    Water,

    /// Reply with a fresh `SENS%` line.
    Status,
}
