//! Canvas 2D implementation of the core [`Surface`] seam.

use ambient_core::{Rgba, Surface};
use glam::Vec2;
use web_sys as web;

use crate::dom;

fn css_rgba(color: Rgba) -> String {
    format!(
        "rgba({}, {}, {}, {})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        color[3]
    )
}

pub struct Canvas2d {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(canvas)?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

impl Surface for Canvas2d {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx
            .clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&css_rgba(color));
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.stroke();
    }

    fn polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        let Some(first) = points.first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&css_rgba(color));
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in &points[1..] {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&css_rgba(color));
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&css_rgba(color));
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.stroke();
    }

    fn fill_wedge(
        &mut self,
        center: Vec2,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        color: Rgba,
    ) {
        // Surface angles run clockwise from twelve o'clock; canvas arcs run
        // from the +x axis.
        let start = (start_deg as f64 - 90.0).to_radians();
        let end = start + (sweep_deg as f64).to_radians();
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.move_to(center.x as f64, center.y as f64);
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, start, end);
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn fill_vertical_gradient(&mut self, top: Rgba, bottom: Rgba) {
        let size = self.size();
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, size.y as f64);
        _ = gradient.add_color_stop(0.0, &css_rgba(top));
        _ = gradient.add_color_stop(1.0, &css_rgba(bottom));
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }
}
