//! Deferred-execution points, expressed as manually polled state so the host
//! scheduler (vsync callback, timer, or a test loop) stays in control.

use std::time::Duration;

/// Fixed-period trigger accumulator. Drives the radar blip recycling.
#[derive(Clone, Debug)]
pub struct Interval {
    period: Duration,
    accum: Duration,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accum: Duration::ZERO,
        }
    }

    /// Advance by `dt` and return how many periods elapsed.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.accum += dt;
        let mut fires = 0;
        while self.accum >= self.period {
            self.accum -= self.period;
            fires += 1;
        }
        fires
    }

    pub fn reset(&mut self) {
        self.accum = Duration::ZERO;
    }
}

/// Trailing-edge debounce over an externally supplied clock. Re-scheduling
/// before the deadline pushes it out; `cancel` drops any pending fire.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn schedule(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once when a scheduled deadline has passed.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
