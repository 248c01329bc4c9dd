//! Delay
//!
//! Suspension point of the heartbeat. While the task is delayed the executor
//! is free to run other work.

use embassy_time::Duration;

/// Cooperative delay
#[allow(async_fn_in_trait)]
pub trait Delay {
    /// Suspends the caller for at least `duration`
    async fn delay(&mut self, duration: Duration);
}

impl<D: Delay> Delay for &mut D {
    async fn delay(&mut self, duration: Duration) {
        (**self).delay(duration).await
    }
}
