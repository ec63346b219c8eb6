//! The drawable-surface seam between the animation state machines and the
//! host. Renderers emit primitives through [`Surface`]; the web front-end
//! implements it over a 2D canvas context, tests record into a [`DrawList`].

use glam::Vec2;

/// Straight-alpha color, components in [0, 1].
pub type Rgba = [f32; 4];

#[inline]
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], alpha]
}

/// A 2D raster area of known pixel dimensions.
///
/// Angles are in degrees, measured clockwise from twelve o'clock to match the
/// radar sweep's screen-space rotation.
pub trait Surface {
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba);
    fn polyline(&mut self, points: &[Vec2], width: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn fill_wedge(&mut self, center: Vec2, radius: f32, start_deg: f32, sweep_deg: f32, color: Rgba);
    fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba);
}

/// Recorded draw call, one per [`Surface`] method.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear,
    Line {
        a: Vec2,
        b: Vec2,
        width: f32,
        color: Rgba,
    },
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Rgba,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Rgba,
    },
    FillWedge {
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        color: Rgba,
    },
    FillVerticalGradient {
        top: Rgba,
        bottom: Rgba,
    },
}

/// In-memory [`Surface`] that records every primitive it receives. Drives the
/// renderers in tests and from hosts that batch their own draw submission.
#[derive(Debug, Default)]
pub struct DrawList {
    pub size: Vec2,
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ops: Vec::new(),
        }
    }
}

impl Surface for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line { a, b, width, color });
    }

    fn polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_wedge(
        &mut self,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        color: Rgba,
    ) {
        self.ops.push(DrawOp::FillWedge {
            center,
            radius,
            start_deg,
            sweep_deg,
            color,
        });
    }

    fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        self.ops.push(DrawOp::FillVerticalGradient { top, bottom });
    }
}
