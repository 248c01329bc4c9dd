//! Tick Counter
//!
//! Task private counter numbering the heartbeat ticks.
//!
//! # Overflow
//! The counter is a `u32` and wraps back to 0 after `u32::MAX`. At the
//! default 1 s cadence that is roughly 136 years of uptime.

use core::fmt::Write;
use heapless::String;

/// Text preceding the tick number in every tick record
pub const TICK_PREFIX: &str = "Tick number: ";

/// Decimal digits of `u32::MAX`
const MAX_TICK_DIGITS: usize = 10;

/// Capacity of a rendered tick record
pub const TICK_MESSAGE_CAPACITY: usize = TICK_PREFIX.len() + MAX_TICK_DIGITS;

const _: () = assert!(u32::MAX.ilog10() as usize + 1 == MAX_TICK_DIGITS);

/// A rendered tick record
pub type TickMessage = String<TICK_MESSAGE_CAPACITY>;

/// Counter for heartbeat ticks, starting at 0
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickCounter(u32);

impl TickCounter {
    /// Counter at tick 0
    pub const fn new() -> Self {
        Self(0)
    }

    /// Value the next tick record will carry
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Moves on to the next tick, wrapping at `u32::MAX`
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Renders `Tick number: <tick>` in base 10
pub fn tick_message(tick: u32) -> TickMessage {
    let mut message = TickMessage::new();
    let written = write!(message, "{TICK_PREFIX}{tick}");
    debug_assert!(written.is_ok(), "tick message exceeds its capacity");
    message
}
