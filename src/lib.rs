//! Heartbeat firmware core
//!
//! Platform independent parts of the firmware: the heartbeat state machine
//! and the log/delay seams it runs against. The RP2350 bindings live in
//! [`platform`] and are only built with the `firmware` feature.

#![cfg_attr(not(test), no_std)]

/// System core modules
pub mod system;
/// Task implementations
pub mod task;

/// RP2350 implementations of the system seams
#[cfg(feature = "firmware")]
pub mod platform;
