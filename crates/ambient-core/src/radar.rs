//! Radar sweep: a continuously rotating wedge over fixed range rings, a
//! recycled pool of blip pulses, and an eased pointer parallax on the whole
//! group.
//!
//! Radar geometry lives in a normalized 100x100 view box and is mapped onto
//! the surface with a cover-fit transform at draw time.

use std::time::Duration;

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::easing::{ease_in_cubic, ease_out_cubic};
use crate::motion::Motion;
use crate::surface::Surface;
use crate::timer::Interval;
use crate::tween::Tween2;

/// Wedge rotation is a pure function of elapsed time modulo the period.
#[inline]
pub fn rotation_degrees(elapsed_sec: f64) -> f32 {
    ((elapsed_sec.rem_euclid(RADAR_PERIOD_SEC) / RADAR_PERIOD_SEC) * 360.0) as f32
}

/// Two-phase blip envelope: rise to peak over one phase (ease-out), fall back
/// over the next (ease-in), then idle. `age_sec` counts from the trigger.
pub fn blip_envelope(age_sec: f64) -> (f32, f32) {
    if age_sec < 0.0 {
        return (0.0, 0.0);
    }
    if age_sec < BLIP_PHASE_SEC {
        let p = ease_out_cubic((age_sec / BLIP_PHASE_SEC) as f32);
        (BLIP_PEAK_SCALE * p, p)
    } else if age_sec < BLIP_PHASE_SEC * 2.0 {
        let q = ease_in_cubic(((age_sec - BLIP_PHASE_SEC) / BLIP_PHASE_SEC) as f32);
        (BLIP_PEAK_SCALE * (1.0 - q), 1.0 - q)
    } else {
        (0.0, 0.0)
    }
}

/// One pool slot. Slots are recycled, never created or destroyed after init.
#[derive(Clone, Copy, Debug)]
pub struct Blip {
    /// Normalized position in the 100x100 view box.
    pub pos: Vec2,
    /// Trigger time; `None` until the slot first fires.
    pub triggered_sec: Option<f64>,
}

impl Blip {
    /// Current (scale, opacity) for the pool clock `elapsed_sec`.
    pub fn envelope(&self, elapsed_sec: f64) -> (f32, f32) {
        match self.triggered_sec {
            Some(t0) => blip_envelope(elapsed_sec - t0),
            None => (0.0, 0.0),
        }
    }
}

pub struct RadarSweep {
    blips: [Blip; BLIP_COUNT],
    trigger: Interval,
    parallax: Tween2,
    elapsed_sec: f64,
    viewport: Vec2,
    motion: Motion,
    rng: StdRng,
}

impl RadarSweep {
    pub fn new(viewport_w: f32, viewport_h: f32, seed: u64, motion: Motion) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let blips = core::array::from_fn(|_| Blip {
            pos: Vec2::new(
                rng.gen::<f32>() * RADAR_VIEW_UNITS,
                rng.gen::<f32>() * RADAR_VIEW_UNITS,
            ),
            triggered_sec: None,
        });
        Self {
            blips,
            trigger: Interval::new(BLIP_INTERVAL),
            parallax: Tween2::new(Vec2::ZERO, RADAR_PARALLAX_EASE_SEC),
            elapsed_sec: 0.0,
            viewport: Vec2::new(viewport_w.max(0.0), viewport_h.max(0.0)),
            motion,
            rng,
        }
    }

    /// One cooperative frame: advance the clock, recycle due blips, settle the
    /// parallax tween.
    pub fn tick(&mut self, dt: Duration) {
        if self.motion.is_reduced() {
            return;
        }
        self.elapsed_sec += dt.as_secs_f64();
        for _ in 0..self.trigger.tick(dt) {
            self.trigger_blip();
        }
        self.parallax.tick(dt);
    }

    /// Pick one random slot, reposition it, and restart its envelope. A slot
    /// mid-envelope restarts from the rise; nothing queues.
    fn trigger_blip(&mut self) {
        let index = self.rng.gen_range(0..self.blips.len());
        let blip = &mut self.blips[index];
        blip.pos = Vec2::new(
            self.rng.gen::<f32>() * RADAR_VIEW_UNITS,
            self.rng.gen::<f32>() * RADAR_VIEW_UNITS,
        );
        blip.triggered_sec = Some(self.elapsed_sec);
        log::trace!("[radar] blip {} at ({:.0},{:.0})", index, blip.pos.x, blip.pos.y);
    }

    /// Retarget the eased group parallax from the pointer's offset to the
    /// viewport center.
    pub fn pointer_move(&mut self, pointer: Vec2) {
        if self.motion.is_reduced() {
            return;
        }
        let target = (pointer - self.viewport / 2.0) * RADAR_PARALLAX_FACTOR;
        self.parallax.retarget(target);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Cover-fit mapping from view-box units to surface pixels.
    fn view_transform(&self) -> (f32, Vec2) {
        let scale = (self.viewport.x / RADAR_VIEW_UNITS).max(self.viewport.y / RADAR_VIEW_UNITS);
        let origin = (self.viewport - Vec2::splat(RADAR_VIEW_UNITS * scale)) / 2.0;
        (scale, origin)
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return;
        }
        let (scale, origin) = self.view_transform();
        let group_offset = if self.motion.is_reduced() {
            Vec2::ZERO
        } else {
            self.parallax.value()
        };
        let center =
            origin + Vec2::splat(RADAR_VIEW_UNITS / 2.0) * scale + group_offset;

        for radius in RADAR_RING_RADII {
            surface.stroke_circle(
                center,
                radius * scale,
                RADAR_RING_WIDTH * scale,
                RADAR_RING_COLOR,
            );
        }

        let rotation = if self.motion.is_reduced() {
            0.0
        } else {
            rotation_degrees(self.elapsed_sec)
        };
        surface.fill_wedge(
            center,
            RADAR_RING_RADII[0] * scale,
            rotation,
            RADAR_WEDGE_SWEEP_DEG,
            RADAR_WEDGE_COLOR,
        );

        if self.motion.is_reduced() {
            return;
        }
        for blip in &self.blips {
            let (blip_scale, opacity) = blip.envelope(self.elapsed_sec);
            if opacity <= 0.0 {
                continue;
            }
            let pos = origin + blip.pos * scale + group_offset;
            surface.fill_circle(
                pos,
                BLIP_BASE_RADIUS * blip_scale * scale,
                [BLIP_COLOR[0], BLIP_COLOR[1], BLIP_COLOR[2], opacity],
            );
        }
    }

    pub fn blips(&self) -> &[Blip; BLIP_COUNT] {
        &self.blips
    }

    pub fn parallax_offset(&self) -> Vec2 {
        self.parallax.value()
    }

    pub fn parallax_target(&self) -> Vec2 {
        self.parallax.target()
    }

    pub fn elapsed_sec(&self) -> f64 {
        self.elapsed_sec
    }
}
