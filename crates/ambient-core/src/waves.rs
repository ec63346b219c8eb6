//! Aurora wave field: four layered sine generators stroked as polylines, plus
//! an independent track of decorative light rays sweeping the viewport.

use std::time::Duration;

use glam::Vec2;

use crate::constants::*;
use crate::motion::Motion;
use crate::surface::{with_alpha, Surface};

#[derive(Clone, Copy, Debug)]
pub struct WaveLayer {
    pub speed: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub color: [f32; 4],
}

/// The four fixed layers; never created or destroyed after init.
pub const WAVE_LAYERS: [WaveLayer; 4] = [
    WaveLayer {
        speed: 0.5,
        amplitude: 50.0,
        frequency: 0.02,
        color: [0.357, 0.486, 0.980, 0.3],
    },
    WaveLayer {
        speed: 0.7,
        amplitude: 70.0,
        frequency: 0.015,
        color: [0.427, 0.431, 0.980, 0.25],
    },
    WaveLayer {
        speed: 0.3,
        amplitude: 40.0,
        frequency: 0.025,
        color: [0.482, 0.380, 1.0, 0.2],
    },
    WaveLayer {
        speed: 0.9,
        amplitude: 60.0,
        frequency: 0.018,
        color: [0.608, 0.910, 0.882, 0.15],
    },
];

/// Visual variant switch: `Backdrop` paints a vertical gradient first and
/// double-strokes each layer for a glow. No behavioral difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveStyle {
    Lines,
    Backdrop,
}

/// Sample one layer's height at `x` for the shared phase accumulator `time`.
#[inline]
pub fn sample_y(x: f32, layer: &WaveLayer, time: f32, mid_height: f32) -> f32 {
    mid_height
        + (x * layer.frequency + time * layer.speed).sin() * layer.amplitude
        + (x * layer.frequency * 2.0 + time * layer.speed * 1.5).sin() * (layer.amplitude * 0.5)
}

pub struct WaveField {
    time: f32,
    width: f32,
    height: f32,
    style: WaveStyle,
    motion: Motion,
}

impl WaveField {
    pub fn new(width: f32, height: f32, style: WaveStyle, motion: Motion) -> Self {
        Self {
            time: 0.0,
            width: width.max(0.0),
            height: height.max(0.0),
            style,
            motion,
        }
    }

    /// Advance the shared phase by one frame step.
    pub fn advance(&mut self) {
        if self.motion.is_reduced() {
            return;
        }
        self.time += WAVE_TIME_STEP;
    }

    pub fn tick(&mut self, _dt: Duration) {
        self.advance();
    }

    /// Dimensions resync only; no other state depends on size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    fn layer_points(&self, layer: &WaveLayer) -> Vec<Vec2> {
        let mid = self.height / 2.0;
        let samples = (self.width / WAVE_SAMPLE_STEP) as usize + 1;
        let mut points = Vec::with_capacity(samples);
        let mut x = 0.0;
        while x <= self.width {
            points.push(Vec2::new(x, sample_y(x, layer, self.time, mid)));
            x += WAVE_SAMPLE_STEP;
        }
        points
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        if self.style == WaveStyle::Backdrop {
            surface.fill_vertical_gradient(AURORA_TOP_COLOR, AURORA_BOTTOM_COLOR);
        }
        for layer in &WAVE_LAYERS {
            let points = self.layer_points(layer);
            if points.len() < 2 {
                continue;
            }
            if self.style == WaveStyle::Backdrop {
                // Wider translucent underlay reads as a glow behind the stroke.
                surface.polyline(
                    &points,
                    WAVE_GLOW_WIDTH,
                    with_alpha(layer.color, layer.color[3] * WAVE_GLOW_ALPHA),
                );
            }
            surface.polyline(&points, WAVE_LINE_WIDTH, layer.color);
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Snapshot of one light ray: horizontal position and fade-in opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayState {
    pub x: f32,
    pub opacity: f32,
}

/// Decorative streaks swept linearly across the viewport, each delayed by its
/// index. Independent of the wave layers; the host typically maps these onto
/// styled elements layered over the canvas.
pub struct LightRays {
    elapsed: f32,
    motion: Motion,
}

impl LightRays {
    pub fn new(motion: Motion) -> Self {
        Self {
            elapsed: 0.0,
            motion,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.motion.is_reduced() {
            return;
        }
        self.elapsed += dt.as_secs_f32();
    }

    /// Ray state at the current time, or `None` while its start delay runs.
    pub fn ray(&self, index: usize, width: f32) -> Option<RayState> {
        let local = self.elapsed - index as f32 * RAY_DELAY_STEP_SEC;
        if local < 0.0 {
            return None;
        }
        let phase = (local % RAY_SWEEP_SEC) / RAY_SWEEP_SEC;
        Some(RayState {
            x: -width + phase * 2.0 * width,
            opacity: phase,
        })
    }

    pub fn rays(&self, width: f32) -> [Option<RayState>; RAY_COUNT] {
        core::array::from_fn(|i| self.ray(i, width))
    }
}
