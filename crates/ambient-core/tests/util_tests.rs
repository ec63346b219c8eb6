// Tests for the shared utilities: easing curves, manually polled timers, the
// eased tween, and seed derivation.

use std::time::Duration;

use ambient_core::derive_seed;
use ambient_core::easing::*;
use ambient_core::timer::{Debouncer, Interval};
use ambient_core::tween::Tween2;
use glam::Vec2;

#[test]
fn easing_curves_hit_their_endpoints() {
    for f in [
        ease_in_quad,
        ease_out_quad,
        ease_in_out_quad,
        ease_in_cubic,
        ease_out_cubic,
        ease_in_out_cubic,
    ] {
        assert!(f(0.0).abs() < 1e-6);
        assert!((f(1.0) - 1.0).abs() < 1e-6);
        // monotone over the unit interval
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = f(i as f32 / 100.0);
            assert!(v >= prev - 1e-6);
            prev = v;
        }
    }
}

#[test]
fn ease_out_cubic_matches_the_closed_form() {
    let p = 0.3_f32;
    assert!((ease_out_cubic(p) - (1.0 - (1.0 - p).powi(3))).abs() < 1e-6);
}

#[test]
fn yoyo_rises_then_retraces() {
    assert!(yoyo(0.0).abs() < 1e-6);
    assert!((yoyo(1.0) - 1.0).abs() < 1e-6);
    assert!(yoyo(2.0).abs() < 1e-6);
    assert!((yoyo(0.25) - yoyo(1.75)).abs() < 1e-6, "symmetric about the turnaround");
    assert!((yoyo(4.5) - yoyo(0.5)).abs() < 1e-6, "periodic in two half-cycles");
}

#[test]
fn interval_fires_once_per_period() {
    let mut interval = Interval::new(Duration::from_millis(1200));
    assert_eq!(interval.tick(Duration::from_millis(1100)), 0);
    assert_eq!(interval.tick(Duration::from_millis(200)), 1);
    assert_eq!(interval.tick(Duration::from_millis(2400)), 2, "catches up across long frames");
    interval.reset();
    assert_eq!(interval.tick(Duration::from_millis(1100)), 0);
}

#[test]
fn zero_period_interval_never_fires() {
    let mut interval = Interval::new(Duration::ZERO);
    assert_eq!(interval.tick(Duration::from_secs(10)), 0);
}

#[test]
fn debouncer_fires_once_after_the_trailing_delay() {
    let mut debounce = Debouncer::new(Duration::from_millis(200));
    assert!(!debounce.fire(Duration::from_millis(0)), "nothing scheduled");

    debounce.schedule(Duration::from_millis(100));
    assert!(!debounce.fire(Duration::from_millis(250)));

    // Re-scheduling pushes the deadline out.
    debounce.schedule(Duration::from_millis(260));
    assert!(!debounce.fire(Duration::from_millis(300)));
    assert!(debounce.fire(Duration::from_millis(460)));
    assert!(!debounce.fire(Duration::from_millis(500)), "fires exactly once");
}

#[test]
fn debouncer_cancel_drops_the_pending_fire() {
    let mut debounce = Debouncer::new(Duration::from_millis(200));
    debounce.schedule(Duration::from_millis(0));
    assert!(debounce.is_pending());
    debounce.cancel();
    assert!(!debounce.fire(Duration::from_secs(10)));
}

#[test]
fn tween_settles_on_its_target() {
    let mut tween = Tween2::new(Vec2::ZERO, 0.4);
    assert_eq!(tween.value(), Vec2::ZERO);
    assert!(tween.is_settled());

    tween.retarget(Vec2::new(10.0, -4.0));
    assert_eq!(tween.value(), Vec2::ZERO, "transition starts from the old value");

    tween.tick(Duration::from_millis(200));
    let mid = tween.value();
    assert!(mid.length() > 0.0 && mid.length() < Vec2::new(10.0, -4.0).length());

    tween.tick(Duration::from_millis(200));
    assert_eq!(tween.value(), Vec2::new(10.0, -4.0));
    assert!(tween.is_settled());
}

#[test]
fn tween_retarget_mid_flight_continues_smoothly() {
    let mut tween = Tween2::new(Vec2::ZERO, 0.4);
    tween.retarget(Vec2::new(10.0, 0.0));
    tween.tick(Duration::from_millis(200));
    let mid = tween.value();

    tween.retarget(Vec2::new(-10.0, 0.0));
    assert_eq!(tween.value(), mid, "no jump on retarget");
}

#[test]
fn derived_seeds_differ_per_stream() {
    let base = 42;
    let seeds: Vec<u64> = (0..4).map(|i| derive_seed(base, i)).collect();
    for (i, a) in seeds.iter().enumerate() {
        for b in seeds.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
    assert_eq!(derive_seed(base, 1), derive_seed(base, 1), "deterministic");
}
