//! Heartbeat task
//!
//! Emits a greeting once, then a numbered tick record per interval, forever.
//!
//! # Operation
//! - `Starting`: emit the greeting, switch to `Looping`, no delay
//! - `Looping`: emit `Tick number: N`, increment N, then delay for the
//!   configured interval
//!
//! [`Heartbeat::step`] performs one transition so a test harness can drive the
//! machine tick by tick; [`Heartbeat::run`] loops over it on the target.

use crate::system::{
    config::HeartbeatConfig,
    counter::{tick_message, TickCounter},
    delay::Delay,
    log_sink::LogSink,
    state::Phase,
};

/// Heartbeat state machine bound to its log sink and delay
pub struct Heartbeat<S, D> {
    config: HeartbeatConfig,
    phase: Phase,
    counter: TickCounter,
    sink: S,
    delay: D,
}

impl<S: LogSink, D: Delay> Heartbeat<S, D> {
    /// Creates the heartbeat in `Starting` with the counter at 0
    ///
    /// An interval below 1 ms is raised to 1 ms.
    pub fn new(config: HeartbeatConfig, sink: S, delay: D) -> Self {
        Self {
            config: config.normalized(),
            phase: Phase::Starting,
            counter: TickCounter::new(),
            sink,
            delay,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tick number the next tick record will carry
    pub fn next_tick(&self) -> u32 {
        self.counter.value()
    }

    /// Performs exactly one state transition
    pub async fn step(&mut self) {
        match self.phase {
            Phase::Starting => {
                self.sink.emit(self.config.tag, self.config.greeting);
                self.phase = Phase::Looping;
            }
            Phase::Looping => {
                let message = tick_message(self.counter.value());
                self.sink.emit(self.config.tag, &message);
                self.counter.increment();
                self.delay.delay(self.config.interval).await;
            }
        }
    }

    /// Runs the heartbeat for the lifetime of the task
    pub async fn run(mut self) -> ! {
        loop {
            self.step().await;
        }
    }

    /// Releases the sink and delay
    pub fn into_parts(self) -> (S, D) {
        (self.sink, self.delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use embassy_time::Duration;

    #[derive(Default)]
    struct Recorder(Vec<(String, String)>);

    impl LogSink for Recorder {
        fn emit(&mut self, tag: &str, message: &str) {
            self.0.push((tag.into(), message.into()));
        }
    }

    #[derive(Default)]
    struct Delays(Vec<Duration>);

    impl Delay for Delays {
        async fn delay(&mut self, duration: Duration) {
            self.0.push(duration);
        }
    }

    fn heartbeat() -> Heartbeat<Recorder, Delays> {
        Heartbeat::new(
            HeartbeatConfig::DEFAULT,
            Recorder::default(),
            Delays::default(),
        )
    }

    #[test]
    fn starts_in_starting_phase() {
        let heartbeat = heartbeat();
        assert_eq!(heartbeat.phase(), Phase::Starting);
        assert_eq!(heartbeat.next_tick(), 0);
    }

    #[test]
    fn first_step_greets_without_delay() {
        let mut heartbeat = heartbeat();
        block_on(heartbeat.step());

        assert_eq!(heartbeat.phase(), Phase::Looping);
        assert_eq!(heartbeat.next_tick(), 0);
        let (sink, delays) = heartbeat.into_parts();
        assert_eq!(
            sink.0,
            vec![("main".to_string(), "Hello from C++ on ESP32!".to_string())]
        );
        assert!(delays.0.is_empty());
    }

    #[test]
    fn looping_step_emits_then_delays() {
        let mut heartbeat = heartbeat();
        block_on(heartbeat.step());
        block_on(heartbeat.step());

        assert_eq!(heartbeat.phase(), Phase::Looping);
        assert_eq!(heartbeat.next_tick(), 1);
        let (sink, delays) = heartbeat.into_parts();
        assert_eq!(sink.0[1], ("main".to_string(), "Tick number: 0".to_string()));
        assert_eq!(delays.0, vec![Duration::from_millis(1000)]);
    }

    #[test]
    fn zero_interval_from_literal_is_raised() {
        let config = HeartbeatConfig {
            interval: Duration::from_ticks(0),
            ..HeartbeatConfig::DEFAULT
        };
        let mut heartbeat = Heartbeat::new(config, Recorder::default(), Delays::default());
        block_on(heartbeat.step());
        block_on(heartbeat.step());

        let (_, delays) = heartbeat.into_parts();
        assert_eq!(delays.0, vec![Duration::from_millis(1)]);
    }

    #[test]
    fn borrowed_sink_and_delay_stay_with_caller() {
        let mut sink = Recorder::default();
        let mut delays = Delays::default();
        {
            let mut heartbeat = Heartbeat::new(HeartbeatConfig::DEFAULT, &mut sink, &mut delays);
            for _ in 0..3 {
                block_on(heartbeat.step());
            }
        }

        assert_eq!(sink.0.len(), 3);
        assert_eq!(sink.0[2].1, "Tick number: 1");
        assert_eq!(delays.0.len(), 2);
    }

    #[test]
    fn uses_configured_tag_and_interval() {
        let config = HeartbeatConfig::DEFAULT
            .with_tag("beat")
            .with_interval(Duration::from_millis(20));
        let mut heartbeat = Heartbeat::new(config, Recorder::default(), Delays::default());
        for _ in 0..3 {
            block_on(heartbeat.step());
        }

        let (sink, delays) = heartbeat.into_parts();
        assert!(sink.0.iter().all(|(tag, _)| tag == "beat"));
        assert_eq!(delays.0, vec![Duration::from_millis(20); 2]);
    }
}
