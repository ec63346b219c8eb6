//! Mounts the constellation background onto its canvas: pointer highlighting,
//! debounced resize, and the per-frame step/render cycle.

use std::cell::RefCell;
use std::rc::Rc;

use ambient_core::constants::RESIZE_DEBOUNCE;
use ambient_core::timer::Debouncer;
use ambient_core::{derive_seed, ParticleField};
use instant::Instant;
use web_sys as web;

use crate::dom;
use crate::frame;
use crate::input;
use crate::surface2d::Canvas2d;
use crate::teardown::{listen, listen_event, Teardown};

pub const CANVAS_ID: &str = "constellation-canvas";

pub fn mount(document: &web::Document, base_seed: u64) -> anyhow::Result<Option<Teardown>> {
    let Some(canvas) = dom::canvas_by_id(document, CANVAS_ID) else {
        return Ok(None);
    };
    dom::sync_canvas_backing_size(&canvas);
    let mut surface = Canvas2d::new(&canvas)?;
    let motion = dom::prefers_reduced_motion();

    let field = Rc::new(RefCell::new(ParticleField::new(
        canvas.width() as f32,
        canvas.height() as f32,
        derive_seed(base_seed, 0),
        motion,
    )));
    let mut teardown = Teardown::new();

    if motion.is_reduced() {
        field.borrow().render(&mut surface);
        return Ok(Some(teardown));
    }

    let start = Instant::now();

    {
        let field = field.clone();
        let canvas_m = canvas.clone();
        listen_event::<web::PointerEvent>(
            canvas.as_ref(),
            "pointermove",
            move |ev| {
                let pos = input::pointer_canvas_px(&ev, &canvas_m);
                field
                    .borrow_mut()
                    .pointer_move(pos, start.elapsed().as_secs_f64());
            },
            &mut teardown,
        );
    }

    let resize = Rc::new(RefCell::new(Debouncer::new(RESIZE_DEBOUNCE)));
    if let Some(window) = web::window() {
        let resize = resize.clone();
        listen(
            window.as_ref(),
            "resize",
            move || resize.borrow_mut().schedule(start.elapsed()),
            &mut teardown,
        );
    }

    let handle = frame::start_loop({
        let field = field.clone();
        let canvas = canvas.clone();
        let resize = resize.clone();
        let mut last = Instant::now();
        move || {
            let now = Instant::now();
            let dt = now - last;
            last = now;

            if resize.borrow_mut().fire(start.elapsed()) {
                dom::sync_canvas_backing_size(&canvas);
                field
                    .borrow_mut()
                    .resize(canvas.width() as f32, canvas.height() as f32);
            }

            let mut field = field.borrow_mut();
            field.tick(dt, start.elapsed().as_secs_f64());
            field.render(&mut surface);
        }
    });

    teardown.defer({
        let resize = resize.clone();
        move || resize.borrow_mut().cancel()
    });
    teardown.defer(move || handle.cancel());
    log::info!("[mount] constellation running");
    Ok(Some(teardown))
}
