//! Heartbeat Configuration
//!
//! Compile time settings for the heartbeat task.
//!
//! # Defaults
//! - Tag: `main`
//! - Greeting: `Hello from C++ on ESP32!`
//! - Interval: 1000 ms between ticks
//!
//! # Usage
//! ```rust
//! use embassy_time::Duration;
//! use heartbeat_firmware::system::config::HeartbeatConfig;
//!
//! const CONFIG: HeartbeatConfig = HeartbeatConfig::DEFAULT.with_interval(Duration::from_millis(250));
//! ```

use embassy_time::Duration;

/// Tag attached to every record the heartbeat emits
pub const DEFAULT_TAG: &str = "main";

/// Startup greeting
pub const DEFAULT_GREETING: &str = "Hello from C++ on ESP32!";

/// Time between ticks (ms)
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

/// Shortest interval the heartbeat accepts
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Settings for one heartbeat task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeartbeatConfig {
    /// Source identifier for log consumers
    pub tag: &'static str,
    /// Emitted once, before the first tick
    pub greeting: &'static str,
    /// Suspension between two ticks
    pub interval: Duration,
}

impl HeartbeatConfig {
    /// Settings used by the firmware
    pub const DEFAULT: Self = Self {
        tag: DEFAULT_TAG,
        greeting: DEFAULT_GREETING,
        interval: DEFAULT_INTERVAL,
    };

    /// Replaces the log tag
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    /// Replaces the startup greeting
    pub const fn with_greeting(mut self, greeting: &'static str) -> Self {
        self.greeting = greeting;
        self
    }

    /// Replaces the tick interval, see [`HeartbeatConfig::normalized`]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self.normalized()
    }

    /// Raises an interval below 1 ms to 1 ms
    ///
    /// `Heartbeat::new` applies this to every config it is given, so struct
    /// literals are covered too.
    pub const fn normalized(mut self) -> Self {
        if self.interval.as_ticks() < MIN_INTERVAL.as_ticks() {
            self.interval = MIN_INTERVAL;
        }
        self
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
