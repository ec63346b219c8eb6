// Integration tests for the radar sweep: rotation periodicity, the blip
// envelope and recycling interval, and the eased pointer parallax.

use std::time::Duration;

use ambient_core::constants::*;
use ambient_core::motion::Motion;
use ambient_core::radar::{blip_envelope, rotation_degrees, RadarSweep};
use ambient_core::surface::{DrawList, DrawOp};
use glam::Vec2;

fn make_radar() -> RadarSweep {
    RadarSweep::new(800.0, 600.0, 7, Motion::Full)
}

#[test]
fn rotation_is_periodic_in_the_sweep_period() {
    for t in [0.0, 0.4, 1.7, 3.0, 5.99, 123.456] {
        let a = rotation_degrees(t);
        let b = rotation_degrees(t + RADAR_PERIOD_SEC);
        assert!((a - b).abs() < 1e-3, "angle differs at t={t}: {a} vs {b}");
    }
}

#[test]
fn rotation_is_a_pure_function_of_time() {
    assert!((rotation_degrees(0.0)).abs() < 1e-6);
    assert!((rotation_degrees(1.5) - 90.0).abs() < 1e-3);
    assert!((rotation_degrees(3.0) - 180.0).abs() < 1e-3);
    assert!(rotation_degrees(6.0).abs() < 1e-3, "wraps at the period");
}

#[test]
fn blip_envelope_hits_its_keyframes() {
    let (scale, opacity) = blip_envelope(0.0);
    assert_eq!((scale, opacity), (0.0, 0.0));

    let (scale, opacity) = blip_envelope(BLIP_PHASE_SEC);
    assert!((scale - BLIP_PEAK_SCALE).abs() < 1e-5, "peak scale at the phase boundary");
    assert!((opacity - 1.0).abs() < 1e-5);

    let (scale, opacity) = blip_envelope(BLIP_PHASE_SEC * 2.0);
    assert!(scale.abs() < 1e-5, "fully decayed after the fall phase");
    assert!(opacity.abs() < 1e-5);
}

#[test]
fn blip_envelope_rises_then_falls() {
    let (rising_scale, rising_opacity) = blip_envelope(0.2);
    assert!(rising_scale > 0.0 && rising_scale < BLIP_PEAK_SCALE);
    assert!(rising_opacity > 0.0 && rising_opacity < 1.0);

    let (falling_scale, _) = blip_envelope(0.6);
    assert!(falling_scale > 0.0 && falling_scale < BLIP_PEAK_SCALE);

    // Before the trigger there is nothing to draw.
    assert_eq!(blip_envelope(-0.1), (0.0, 0.0));
}

#[test]
fn blips_recycle_on_the_fixed_interval() {
    let mut radar = make_radar();
    assert!(
        radar.blips().iter().all(|b| b.triggered_sec.is_none()),
        "pool starts idle"
    );

    // Just under one interval: nothing fires.
    for _ in 0..11 {
        radar.tick(Duration::from_millis(100));
    }
    assert!(radar.blips().iter().all(|b| b.triggered_sec.is_none()));

    // Crossing the interval fires exactly one slot.
    radar.tick(Duration::from_millis(200));
    let triggered = radar
        .blips()
        .iter()
        .filter(|b| b.triggered_sec.is_some())
        .count();
    assert_eq!(triggered, 1);

    // Another full interval re-triggers (possibly the same slot).
    for _ in 0..12 {
        radar.tick(Duration::from_millis(100));
    }
    let triggered = radar
        .blips()
        .iter()
        .filter(|b| b.triggered_sec.is_some())
        .count();
    assert!(triggered >= 1 && triggered <= 2);
}

#[test]
fn triggered_blip_starts_from_the_rise() {
    let mut radar = make_radar();
    for _ in 0..13 {
        radar.tick(Duration::from_millis(100));
    }
    let blip = radar
        .blips()
        .iter()
        .find(|b| b.triggered_sec.is_some())
        .expect("one slot fired");
    let (scale, opacity) = blip.envelope(radar.elapsed_sec());
    assert!(scale < BLIP_PEAK_SCALE, "fresh trigger is still rising");
    assert!(opacity < 1.0);
}

#[test]
fn parallax_is_eased_not_instantaneous() {
    let mut radar = make_radar();
    radar.pointer_move(Vec2::new(500.0, 400.0));

    let target = Vec2::new(100.0, 100.0) * RADAR_PARALLAX_FACTOR;
    assert_eq!(radar.parallax_target(), target);
    assert!(
        radar.parallax_offset().length() < target.length(),
        "offset must not jump to the target"
    );

    // After the transition window the tween settles exactly on the target.
    radar.tick(Duration::from_secs_f32(RADAR_PARALLAX_EASE_SEC));
    assert!((radar.parallax_offset() - target).length() < 1e-4);
}

#[test]
fn reduced_motion_freezes_the_sweep() {
    let mut radar = RadarSweep::new(800.0, 600.0, 7, Motion::Reduced);
    radar.pointer_move(Vec2::new(500.0, 400.0));
    for _ in 0..20 {
        radar.tick(Duration::from_millis(100));
    }
    assert_eq!(radar.elapsed_sec(), 0.0);
    assert_eq!(radar.parallax_offset(), Vec2::ZERO);

    let mut list = DrawList::new(800.0, 600.0);
    radar.render(&mut list);
    let rings = list
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::StrokeCircle { .. }))
        .count();
    assert_eq!(rings, RADAR_RING_RADII.len());
    assert!(list
        .ops
        .iter()
        .any(|op| matches!(op, DrawOp::FillWedge { start_deg, .. } if *start_deg == 0.0)));
    assert!(
        !list.ops.iter().any(|op| matches!(op, DrawOp::FillCircle { .. })),
        "no blips in reduced motion"
    );
}

#[test]
fn render_maps_the_view_box_with_a_cover_fit() {
    let radar = RadarSweep::new(200.0, 100.0, 7, Motion::Full);
    let mut list = DrawList::new(200.0, 100.0);
    radar.render(&mut list);

    // Cover-fit scale is 2.0, so the group center lands mid-viewport and the
    // inner ring radius doubles.
    let ring = list
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::StrokeCircle { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
        .expect("rings drawn");
    assert_eq!(ring.0, Vec2::new(100.0, 50.0));
    assert_eq!(ring.1, RADAR_RING_RADII[0] * 2.0);
}

#[test]
fn degenerate_viewport_renders_nothing() {
    let radar = RadarSweep::new(0.0, 0.0, 7, Motion::Full);
    let mut list = DrawList::new(0.0, 0.0);
    radar.render(&mut list);
    assert_eq!(list.ops.len(), 1, "clear only");
}
