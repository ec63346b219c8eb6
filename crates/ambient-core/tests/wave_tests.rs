// Integration tests for the aurora wave field and the light-ray track.

use std::time::Duration;

use ambient_core::constants::*;
use ambient_core::motion::Motion;
use ambient_core::surface::{DrawList, DrawOp};
use ambient_core::waves::{sample_y, LightRays, WaveField, WaveStyle, WAVE_LAYERS};

#[test]
fn time_advances_by_a_fixed_step_per_frame() {
    let mut field = WaveField::new(800.0, 600.0, WaveStyle::Lines, Motion::Full);
    for _ in 0..10 {
        field.advance();
    }
    assert!((field.time() - 10.0 * WAVE_TIME_STEP).abs() < 1e-6);
}

#[test]
fn sample_matches_the_layered_sine_formula() {
    let layer = &WAVE_LAYERS[0];
    let (x, time, mid) = (10.0_f32, 0.5_f32, 300.0_f32);
    let expected = mid
        + (x * layer.frequency + time * layer.speed).sin() * layer.amplitude
        + (x * layer.frequency * 2.0 + time * layer.speed * 1.5).sin() * (layer.amplitude * 0.5);
    assert!((sample_y(x, layer, time, mid) - expected).abs() < 1e-6);
}

#[test]
fn sample_is_bounded_by_the_layer_amplitude() {
    for layer in &WAVE_LAYERS {
        for i in 0..500 {
            let x = i as f32 * WAVE_SAMPLE_STEP;
            let y = sample_y(x, layer, 3.7, 0.0);
            assert!(y.abs() <= layer.amplitude * 1.5 + 1e-3);
        }
    }
}

#[test]
fn render_strokes_one_polyline_per_layer() {
    let field = WaveField::new(100.0, 50.0, WaveStyle::Lines, Motion::Full);
    let mut list = DrawList::new(100.0, 50.0);
    field.render(&mut list);

    assert!(matches!(list.ops[0], DrawOp::Clear));
    let polylines: Vec<_> = list
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Polyline { points, width, .. } => Some((points.len(), *width)),
            _ => None,
        })
        .collect();
    assert_eq!(polylines.len(), WAVE_LAYERS.len());
    for (len, width) in polylines {
        // Sampled every 2 px across the full width, endpoints included.
        assert_eq!(len, 51);
        assert_eq!(width, WAVE_LINE_WIDTH);
    }
}

#[test]
fn backdrop_variant_adds_gradient_and_glow_strokes() {
    let field = WaveField::new(100.0, 50.0, WaveStyle::Backdrop, Motion::Full);
    let mut list = DrawList::new(100.0, 50.0);
    field.render(&mut list);

    assert!(matches!(list.ops[1], DrawOp::FillVerticalGradient { .. }));
    let polylines = list
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Polyline { .. }))
        .count();
    assert_eq!(polylines, WAVE_LAYERS.len() * 2, "glow underlay plus stroke per layer");
}

#[test]
fn resize_only_resyncs_dimensions() {
    let mut field = WaveField::new(800.0, 600.0, WaveStyle::Lines, Motion::Full);
    for _ in 0..5 {
        field.advance();
    }
    let time = field.time();
    field.resize(1024.0, 768.0);
    assert_eq!(field.time(), time);
    assert_eq!(field.size().x, 1024.0);
}

#[test]
fn reduced_motion_freezes_the_phase() {
    let mut field = WaveField::new(800.0, 600.0, WaveStyle::Lines, Motion::Reduced);
    field.tick(Duration::from_millis(16));
    field.advance();
    assert_eq!(field.time(), 0.0);
}

#[test]
fn rays_start_staggered_by_index() {
    let rays = LightRays::new(Motion::Full);
    let states = rays.rays(800.0);
    assert!(states[0].is_some(), "first ray starts immediately");
    for state in states.iter().skip(1) {
        assert!(state.is_none(), "delayed rays are idle at t=0");
    }

    let mut rays = LightRays::new(Motion::Full);
    rays.tick(Duration::from_secs_f32(RAY_DELAY_STEP_SEC));
    let states = rays.rays(800.0);
    assert!(states[0].is_some());
    assert!(states[1].is_some(), "second ray live after its delay");
    assert!(states[2].is_none());
}

#[test]
fn ray_sweeps_linearly_and_loops() {
    let mut rays = LightRays::new(Motion::Full);
    let width = 800.0;

    let start = rays.ray(0, width).unwrap();
    assert_eq!(start.x, -width);
    assert_eq!(start.opacity, 0.0);

    rays.tick(Duration::from_secs_f32(RAY_SWEEP_SEC / 2.0));
    let mid = rays.ray(0, width).unwrap();
    assert!((mid.x - 0.0).abs() < 1e-3, "halfway across at half the sweep");
    assert!((mid.opacity - 0.5).abs() < 1e-4);

    rays.tick(Duration::from_secs_f32(RAY_SWEEP_SEC / 2.0));
    let looped = rays.ray(0, width).unwrap();
    assert_eq!(looped.x, -width, "sweep loops indefinitely");
}

#[test]
fn reduced_motion_keeps_rays_idle() {
    let mut rays = LightRays::new(Motion::Reduced);
    rays.tick(Duration::from_secs(30));
    let state = rays.ray(0, 800.0).unwrap();
    assert_eq!(state.x, -800.0);
}
