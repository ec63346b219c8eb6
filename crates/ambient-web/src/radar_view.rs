//! Mounts the radar sweep background: rotation, blip recycling, and the eased
//! pointer parallax on the whole group.

use std::cell::RefCell;
use std::rc::Rc;

use ambient_core::{derive_seed, RadarSweep};
use instant::Instant;
use web_sys as web;

use crate::dom;
use crate::frame;
use crate::surface2d::Canvas2d;
use crate::teardown::{listen, listen_event, Teardown};

pub const CANVAS_ID: &str = "radar-canvas";

pub fn mount(document: &web::Document, base_seed: u64) -> anyhow::Result<Option<Teardown>> {
    let Some(canvas) = dom::canvas_by_id(document, CANVAS_ID) else {
        return Ok(None);
    };
    dom::sync_canvas_backing_size(&canvas);
    let mut surface = Canvas2d::new(&canvas)?;
    let motion = dom::prefers_reduced_motion();

    let radar = Rc::new(RefCell::new(RadarSweep::new(
        canvas.width() as f32,
        canvas.height() as f32,
        derive_seed(base_seed, 1),
        motion,
    )));
    let mut teardown = Teardown::new();

    if motion.is_reduced() {
        radar.borrow().render(&mut surface);
        return Ok(Some(teardown));
    }

    // Parallax tracks the pointer anywhere over the page, not just the canvas.
    if let Some(window) = web::window() {
        let radar_m = radar.clone();
        let canvas_m = canvas.clone();
        listen_event::<web::PointerEvent>(
            window.as_ref(),
            "pointermove",
            move |ev| {
                let pos = crate::input::pointer_canvas_px(&ev, &canvas_m);
                radar_m.borrow_mut().pointer_move(pos);
            },
            &mut teardown,
        );

        let canvas_r = canvas.clone();
        let radar_r = radar.clone();
        listen(
            window.as_ref(),
            "resize",
            move || {
                dom::sync_canvas_backing_size(&canvas_r);
                radar_r
                    .borrow_mut()
                    .resize(canvas_r.width() as f32, canvas_r.height() as f32);
            },
            &mut teardown,
        );
    }

    let handle = frame::start_loop({
        let radar = radar.clone();
        let mut last = Instant::now();
        move || {
            let now = Instant::now();
            let dt = now - last;
            last = now;

            let mut radar = radar.borrow_mut();
            radar.tick(dt);
            radar.render(&mut surface);
        }
    });
    teardown.defer(move || handle.cancel());
    log::info!("[mount] radar running");
    Ok(Some(teardown))
}
