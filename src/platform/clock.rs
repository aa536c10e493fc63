//! Monotonic clock and frame pacing

use std::time::{Duration, Instant};

/// Time source the frame loop paces itself against
pub trait Clock {
    fn now(&self) -> Instant;
    /// Block until `deadline`. Returns immediately if it already passed.
    fn sleep_until(&mut self, deadline: Instant);
}

/// The real monotonic clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep_until(&mut self, deadline: Instant) {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

/// Absolute frame deadlines.
///
/// Each frame's deadline is the previous one plus a fixed step, so time
/// spent rendering never accumulates as drift. A frame that overruns by more
/// than a whole step is not caught up; the schedule just lags behind.
#[derive(Debug, Clone)]
pub struct FrameClock {
    next: Instant,
    step: Duration,
}

impl FrameClock {
    pub fn new(start: Instant, dt: f64) -> Self {
        Self {
            next: start,
            step: Duration::from_micros((dt * 1_000_000.0) as u64),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    /// Move to the next frame boundary and return it
    pub fn advance(&mut self) -> Instant {
        self.next += self.step;
        self.next
    }
}
