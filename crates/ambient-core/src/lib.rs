//! Host-agnostic animation cores for the Lost & Found ambient backgrounds.
//!
//! Each component owns its state and exposes explicit `tick`/`render`
//! functions; the host decides how ticks are driven (vsync callback, timer,
//! or manual stepping in tests) and supplies a [`surface::Surface`] to draw
//! into. Nothing here touches platform APIs.

pub mod constants;
pub mod easing;
pub mod motion;
pub mod particles;
pub mod radar;
pub mod scroll;
pub mod surface;
pub mod timer;
pub mod tween;
pub mod waves;

pub use motion::Motion;
pub use particles::ParticleField;
pub use radar::RadarSweep;
pub use scroll::ScrollChoreographer;
pub use surface::{DrawList, DrawOp, Rgba, Surface};
pub use waves::{LightRays, WaveField, WaveStyle};

/// Derive a per-subsystem RNG seed from one base seed so components can be
/// reseeded independently.
#[inline]
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    base ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}
