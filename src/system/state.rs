//! Heartbeat Phase
//!
//! The heartbeat is a two state machine:
//!
//! ```text
//! Starting --greeting--> Looping --tick--> Looping
//! ```
//!
//! `Starting` is left exactly once; `Looping` has no exit.

/// Phase of the heartbeat task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Greeting not yet emitted
    Starting,
    /// Emitting one tick per interval
    Looping,
}
