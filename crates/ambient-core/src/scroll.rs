//! Scroll choreography for the hero cards: ambient drift until the section
//! pins, then a three-phase interpolation over pinned scroll progress, ending
//! in a one-shot ownership transfer of the tracked elements to the host.
//!
//! Progress is a pure function of scroll offset within the pinned range;
//! transforms are deterministic in progress and continuous at the phase
//! boundaries. The transfer event fires exactly once per mount.

use std::time::Duration;

use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::*;
use crate::easing::{ease_in_cubic, ease_in_out_cubic, yoyo};
use crate::motion::Motion;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Converging,
    Stacking,
    Exiting,
    Released,
}

/// Resolved transform for one tracked element, ready for the host to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTransform {
    pub translation: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub z_index: i32,
}

/// Static description of one tracked element.
#[derive(Clone, Copy, Debug)]
pub struct TrackedElement {
    /// Resting translation before any drift or scroll influence.
    pub base: Vec2,
    pub base_scale: f32,
    /// Signed drift extents; the sign sets the oscillation direction.
    pub drift_dy: f32,
    pub drift_rot: f32,
    /// Vertical offset and explicit stacking order taken during Stacking.
    pub stack_y: f32,
    pub stack_z: i32,
}

/// The hero variant: two cards drifting on opposite diagonals.
pub fn hero_elements() -> SmallVec<[TrackedElement; 4]> {
    SmallVec::from_slice(&[
        TrackedElement {
            base: Vec2::new(-120.0, -40.0),
            base_scale: 0.9,
            drift_dy: DRIFT_Y_RANGE,
            drift_rot: DRIFT_ROT_RANGE,
            stack_y: -STACK_Y_OFFSET,
            stack_z: 20,
        },
        TrackedElement {
            base: Vec2::new(130.0, 40.0),
            base_scale: 0.9,
            drift_dy: -DRIFT_Y_RANGE,
            drift_rot: -DRIFT_ROT_RANGE,
            stack_y: STACK_Y_OFFSET,
            stack_z: 19,
        },
    ])
}

pub struct ScrollChoreographer {
    elements: SmallVec<[TrackedElement; 4]>,
    pin_fraction: f32,
    viewport_height: f32,
    progress: f32,
    drift_elapsed: f32,
    drift_cancelled: bool,
    /// Transforms captured at the instant drift stops; Converging starts here.
    converge_from: SmallVec<[ElementTransform; 4]>,
    released: bool,
    release_fired: bool,
    motion: Motion,
}

impl ScrollChoreographer {
    pub fn new(
        elements: SmallVec<[TrackedElement; 4]>,
        pin_fraction: f32,
        viewport_height: f32,
        motion: Motion,
    ) -> Self {
        let mut choreographer = Self {
            elements,
            pin_fraction,
            viewport_height: viewport_height.max(0.0),
            progress: 0.0,
            drift_elapsed: 0.0,
            drift_cancelled: false,
            converge_from: SmallVec::new(),
            released: false,
            release_fired: false,
            motion,
        };
        if motion.is_reduced() {
            // No pin, no drift: elements go straight to their released state.
            choreographer.drift_cancelled = true;
            choreographer.progress = 1.0;
            choreographer.released = true;
        }
        choreographer
    }

    /// Advance the pre-pin ambient drift. A no-op once the drift has been
    /// cancelled; it never resumes.
    pub fn tick(&mut self, dt: Duration) {
        if self.drift_cancelled {
            return;
        }
        self.drift_elapsed += dt.as_secs_f32();
    }

    /// Map a scroll offset within the pinned range onto progress and run the
    /// phase transitions it implies.
    pub fn on_scroll(&mut self, scroll_offset: f32) {
        if self.motion.is_reduced() || self.released {
            return;
        }
        self.progress = progress_for_offset(
            scroll_offset,
            self.pin_fraction,
            self.viewport_height,
        );
        if self.progress > 0.0 && !self.drift_cancelled {
            self.converge_from = self.drift_transforms();
            self.drift_cancelled = true;
            log::debug!("[scroll] pinned; drift cancelled");
        }
        if self.progress >= 1.0 {
            self.released = true;
            log::info!("[scroll] pin complete; releasing {} elements", self.elements.len());
        }
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height.max(0.0);
    }

    pub fn phase(&self) -> ScrollPhase {
        if self.released {
            ScrollPhase::Released
        } else if !self.drift_cancelled {
            ScrollPhase::Idle
        } else if self.progress < CONVERGE_END {
            ScrollPhase::Converging
        } else if self.progress < STACK_END {
            ScrollPhase::Stacking
        } else {
            ScrollPhase::Exiting
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// One-shot ownership-transfer event. Returns true exactly once, when the
    /// choreography has released; repeated calls are no-ops so the host-side
    /// re-parenting can never run twice.
    pub fn take_release(&mut self) -> bool {
        if self.released && !self.release_fired {
            self.release_fired = true;
            return true;
        }
        false
    }

    fn drift_transforms(&self) -> SmallVec<[ElementTransform; 4]> {
        let s = yoyo(self.drift_elapsed / DRIFT_HALF_CYCLE_SEC);
        self.elements
            .iter()
            .map(|el| ElementTransform {
                translation: el.base + Vec2::new(0.0, el.drift_dy * s),
                rotation_deg: el.drift_rot * s,
                scale: el.base_scale,
                z_index: 0,
            })
            .collect()
    }

    /// Current transforms for every tracked element.
    pub fn transforms(&self) -> SmallVec<[ElementTransform; 4]> {
        match self.phase() {
            ScrollPhase::Idle => self.drift_transforms(),
            ScrollPhase::Converging => {
                let eased = ease_in_out_cubic(self.progress / CONVERGE_END);
                self.converge_from
                    .iter()
                    .zip(self.elements.iter())
                    .map(|(from, el)| ElementTransform {
                        translation: from.translation * (1.0 - eased),
                        rotation_deg: from.rotation_deg * (1.0 - eased),
                        scale: el.base_scale,
                        z_index: from.z_index,
                    })
                    .collect()
            }
            ScrollPhase::Stacking => {
                let local = (self.progress - CONVERGE_END) / (STACK_END - CONVERGE_END);
                let eased = ease_in_out_cubic(local);
                self.elements
                    .iter()
                    .map(|el| ElementTransform {
                        translation: Vec2::new(0.0, el.stack_y * eased),
                        rotation_deg: 0.0,
                        scale: el.base_scale,
                        z_index: el.stack_z,
                    })
                    .collect()
            }
            ScrollPhase::Exiting => self
                .elements
                .iter()
                .map(|el| ElementTransform {
                    translation: Vec2::new(0.0, el.stack_y),
                    rotation_deg: 0.0,
                    scale: el.base_scale,
                    z_index: el.stack_z,
                })
                .collect(),
            ScrollPhase::Released => self
                .elements
                .iter()
                .map(|el| ElementTransform {
                    translation: Vec2::ZERO,
                    rotation_deg: 0.0,
                    scale: 1.0,
                    z_index: el.stack_z,
                })
                .collect(),
        }
    }

    /// Vertical translation of the whole pinned container; nonzero only while
    /// Exiting (ease-in toward one full viewport height) and after release.
    pub fn container_offset_y(&self) -> f32 {
        match self.phase() {
            ScrollPhase::Exiting => {
                let local = (self.progress - STACK_END) / (1.0 - STACK_END);
                ease_in_cubic(local) * self.viewport_height
            }
            ScrollPhase::Released => self.viewport_height,
            _ => 0.0,
        }
    }

    pub fn elements(&self) -> &[TrackedElement] {
        &self.elements
    }
}

/// Clamped linear progress through the pinned range. Degenerate extents pin
/// instantly rather than divide by zero.
pub fn progress_for_offset(scroll_offset: f32, pin_fraction: f32, viewport_height: f32) -> f32 {
    let extent = pin_fraction * viewport_height;
    if extent <= 0.0 {
        return if scroll_offset > 0.0 { 1.0 } else { 0.0 };
    }
    (scroll_offset / extent).clamp(0.0, 1.0)
}
