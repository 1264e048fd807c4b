//! Monotonic deadline shared by both waiting phases

use tokio::time::{Duration, Instant};

/// A start instant plus a timeout budget.
///
/// Built on [`tokio::time::Instant`], which is monotonic and follows the paused
/// test clock.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    timeout: Duration,
}

impl Deadline {
    /// Start the clock now
    pub fn start(timeout: Duration) -> Self {
        Self::starting_at(Instant::now(), timeout)
    }

    pub fn starting_at(start: Instant, timeout: Duration) -> Self {
        Self { start, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once strictly more than `timeout` has passed since `start`
    pub fn expired(&self) -> bool {
        self.elapsed() > self.timeout
    }

    pub fn remaining(&self) -> Duration {
        self.timeout.saturating_sub(self.elapsed())
    }
}
