//! Fixed-duration eased tween toward a retargetable 2D goal.
//!
//! This is the smoothed half of the two parallax behaviors: the radar group
//! eases toward the pointer-derived target over a short window, while the
//! constellation offset is applied instantaneously. The two are intentionally
//! different effects, not variants of one.

use std::time::Duration;

use glam::Vec2;

use crate::easing::ease_out_cubic;

#[derive(Clone, Debug)]
pub struct Tween2 {
    from: Vec2,
    to: Vec2,
    duration: f32,
    elapsed: f32,
}

impl Tween2 {
    pub fn new(initial: Vec2, duration_sec: f32) -> Self {
        Self {
            from: initial,
            to: initial,
            duration: duration_sec.max(f32::EPSILON),
            elapsed: f32::INFINITY,
        }
    }

    /// Restart the transition from the current eased value toward `target`.
    pub fn retarget(&mut self, target: Vec2) {
        self.from = self.value();
        self.to = target;
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.elapsed < self.duration {
            self.elapsed += dt.as_secs_f32();
        }
    }

    pub fn value(&self) -> Vec2 {
        if self.elapsed >= self.duration {
            return self.to;
        }
        let p = ease_out_cubic((self.elapsed / self.duration).clamp(0.0, 1.0));
        self.from + (self.to - self.from) * p
    }

    pub fn target(&self) -> Vec2 {
        self.to
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}
