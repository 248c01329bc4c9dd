//! RP2350 bindings
//!
//! Connects the heartbeat seams to the firmware runtime: records go to defmt
//! over RTT and delays are embassy-time timers driven by the RP2350 timer.

use embassy_time::{Duration, Timer};

use crate::system::{delay::Delay, log_sink::LogSink};

/// Log sink forwarding to the defmt global logger
#[derive(Debug, Default, Clone, Copy)]
pub struct DefmtSink;

impl LogSink for DefmtSink {
    fn emit(&mut self, tag: &str, message: &str) {
        defmt::info!("[{=str}] {=str}", tag, message);
    }
}

/// Delay backed by the embassy time driver
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    async fn delay(&mut self, duration: Duration) {
        Timer::after(duration).await;
    }
}
