//! Constellation network renderer: a fixed batch of drifting nodes joined by
//! proximity edges, with a transient pointer-highlighted node.
//!
//! Everything here is surface-space pixels. The field owns its node batch and
//! replaces it wholesale on resize; per-frame work is O(N²) over a small N by
//! design, so no spatial index is kept.

use std::time::Duration;

use glam::Vec2;
use rand::prelude::*;

use crate::constants::*;
use crate::easing::ease_out_cubic;
use crate::motion::Motion;
use crate::surface::{with_alpha, Surface};

#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current render radius; returns to `rest_radius` outside a highlight.
    pub radius: f32,
    pub rest_radius: f32,
}

/// Proximity edge between two node indices, ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
    pub width: f32,
}

#[derive(Clone, Copy, Debug)]
struct Highlight {
    index: usize,
    start_sec: f64,
}

pub struct ParticleField {
    pub nodes: Vec<Node>,
    width: f32,
    height: f32,
    offset: Vec2,
    highlight: Option<Highlight>,
    motion: Motion,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64, motion: Motion) -> Self {
        let mut field = Self {
            nodes: Vec::with_capacity(NODE_COUNT),
            width: width.max(0.0),
            height: height.max(0.0),
            offset: Vec2::ZERO,
            highlight: None,
            motion,
            rng: StdRng::seed_from_u64(seed),
        };
        field.spawn_nodes();
        field
    }

    /// Replace the whole node batch for the given surface dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.highlight = None;
        self.spawn_nodes();
        log::debug!(
            "[constellation] respawned {} nodes for {}x{}",
            self.nodes.len(),
            self.width,
            self.height
        );
    }

    fn spawn_nodes(&mut self) {
        self.nodes.clear();
        for _ in 0..NODE_COUNT {
            let rest_radius = NODE_RADIUS_MIN + self.rng.gen::<f32>() * NODE_RADIUS_SPAN;
            self.nodes.push(Node {
                pos: Vec2::new(
                    self.rng.gen::<f32>() * self.width,
                    self.rng.gen::<f32>() * self.height,
                ),
                vel: Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * NODE_SPEED_MAX,
                    (self.rng.gen::<f32>() - 0.5) * 2.0 * NODE_SPEED_MAX,
                ),
                radius: rest_radius,
                rest_radius,
            });
        }
    }

    /// Advance one frame of node physics: integrate, bounce, clamp.
    ///
    /// The bounce test runs on the pre-clamp position so a component's sign
    /// flips at most once per boundary crossing.
    pub fn step(&mut self) {
        for node in &mut self.nodes {
            node.pos += node.vel;
            if node.pos.x <= 0.0 || node.pos.x >= self.width {
                node.vel.x = -node.vel.x;
            }
            if node.pos.y <= 0.0 || node.pos.y >= self.height {
                node.vel.y = -node.vel.y;
            }
            node.pos.x = node.pos.x.clamp(0.0, self.width);
            node.pos.y = node.pos.y.clamp(0.0, self.height);
        }
    }

    /// Play or expire the highlight radius envelope at time `now_sec`.
    pub fn update_highlight(&mut self, now_sec: f64) {
        for node in &mut self.nodes {
            node.radius = node.rest_radius;
        }
        let Some(h) = self.highlight else {
            return;
        };
        let elapsed = now_sec - h.start_sec;
        if elapsed >= HIGHLIGHT_DURATION_SEC {
            self.highlight = None;
            return;
        }
        if let Some(node) = self.nodes.get_mut(h.index) {
            let p = (elapsed / HIGHLIGHT_DURATION_SEC).clamp(0.0, 1.0);
            node.radius =
                node.rest_radius + (HIGHLIGHT_RADIUS - node.rest_radius) * highlight_pulse(p);
        }
    }

    /// Unique-pair proximity edges, using the parallax-shifted delta the same
    /// way the draw step shifts positions.
    pub fn compute_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        let highlighted = self.highlight.map(|h| h.index);
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let delta = self.nodes[i].pos - self.nodes[j].pos + self.offset;
                let distance = delta.length();
                if distance < LINK_DISTANCE {
                    let width = if highlighted == Some(i) || highlighted == Some(j) {
                        LINK_WIDTH_HIGHLIGHT
                    } else {
                        LINK_WIDTH
                    };
                    edges.push(Edge {
                        a: i,
                        b: j,
                        opacity: (1.0 - distance / LINK_DISTANCE) * LINK_ALPHA_SCALE,
                        width,
                    });
                }
            }
        }
        edges
    }

    /// Pointer update: refresh the parallax offset and, if the nearest node
    /// sits within pick range and is not already highlighted, begin a new
    /// highlight at `now_sec`.
    pub fn pointer_move(&mut self, pointer: Vec2, now_sec: f64) {
        if self.motion.is_reduced() {
            return;
        }
        if self.width > 0.0 && self.height > 0.0 {
            self.offset = Vec2::new(
                (pointer.x - self.width / 2.0) / self.width * PARALLAX_RANGE,
                (pointer.y - self.height / 2.0) / self.height * PARALLAX_RANGE,
            );
        }

        let mut closest: Option<(usize, f32)> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let distance = node.pos.distance(pointer);
            if distance < POINTER_PICK_RADIUS
                && closest.map_or(true, |(_, best)| distance < best)
            {
                closest = Some((i, distance));
            }
        }
        if let Some((index, _)) = closest {
            if self.highlight.map(|h| h.index) != Some(index) {
                self.highlight = Some(Highlight {
                    index,
                    start_sec: now_sec,
                });
            }
        }
    }

    /// One cooperative frame: physics, then the highlight envelope. The host
    /// draws afterwards so edge computation always sees settled positions.
    pub fn tick(&mut self, _dt: Duration, now_sec: f64) {
        if self.motion.is_reduced() {
            return;
        }
        self.step();
        self.update_highlight(now_sec);
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        if self.motion.is_reduced() {
            // Static nodes only: no edges, no highlight, no parallax.
            for node in &self.nodes {
                surface.fill_circle(node.pos, node.rest_radius, NODE_COLOR);
            }
            return;
        }

        let highlighted = self.highlight.map(|h| h.index);
        for edge in self.compute_edges() {
            surface.line(
                self.nodes[edge.a].pos + self.offset,
                self.nodes[edge.b].pos + self.offset,
                edge.width,
                with_alpha(LINK_COLOR, edge.opacity),
            );
        }
        for (i, node) in self.nodes.iter().enumerate() {
            let color = if highlighted == Some(i) {
                NODE_HIGHLIGHT_COLOR
            } else {
                NODE_COLOR
            };
            surface.fill_circle(node.pos + self.offset, node.radius, color);
        }
    }

    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlight.map(|h| h.index)
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Highlight radius envelope over normalized progress: a fast cubic ease-out
/// flare followed by a cubic decay back to rest. Zero at both endpoints.
pub fn highlight_pulse(p: f64) -> f32 {
    let p = p.clamp(0.0, 1.0);
    if p < HIGHLIGHT_RISE_FRACTION {
        ease_out_cubic((p / HIGHLIGHT_RISE_FRACTION) as f32)
    } else {
        let q = (p - HIGHLIGHT_RISE_FRACTION) / (1.0 - HIGHLIGHT_RISE_FRACTION);
        (1.0 - q as f32).powi(3)
    }
}
