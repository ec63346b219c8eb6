//! Mounts the aurora wave canvas plus its overlaid light-ray streaks.

use std::cell::RefCell;
use std::rc::Rc;

use ambient_core::constants::RAY_COUNT;
use ambient_core::{LightRays, WaveField, WaveStyle};
use instant::Instant;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::frame;
use crate::surface2d::Canvas2d;
use crate::teardown::{listen, Teardown};

pub const CANVAS_ID: &str = "aurora-canvas";
pub const RAY_CONTAINER_ID: &str = "light-rays";

pub fn mount(document: &web::Document) -> anyhow::Result<Option<Teardown>> {
    let Some(canvas) = dom::canvas_by_id(document, CANVAS_ID) else {
        return Ok(None);
    };
    dom::sync_canvas_backing_size(&canvas);
    let mut surface = Canvas2d::new(&canvas)?;
    let motion = dom::prefers_reduced_motion();

    let field = Rc::new(RefCell::new(WaveField::new(
        canvas.width() as f32,
        canvas.height() as f32,
        WaveStyle::Lines,
        motion,
    )));
    let rays = Rc::new(RefCell::new(LightRays::new(motion)));
    let mut teardown = Teardown::new();

    // Light-ray streaks live as styled elements layered over the canvas.
    let ray_elements = spawn_ray_elements(document);
    {
        let ray_elements = ray_elements.clone();
        teardown.defer(move || {
            for ray in &ray_elements {
                ray.remove();
            }
        });
    }

    if motion.is_reduced() {
        field.borrow().render(&mut surface);
        return Ok(Some(teardown));
    }

    // The aurora resyncs its canvas on every resize event, undebounced.
    if let Some(window) = web::window() {
        let canvas_r = canvas.clone();
        let field_r = field.clone();
        listen(
            window.as_ref(),
            "resize",
            move || {
                dom::sync_canvas_backing_size(&canvas_r);
                field_r
                    .borrow_mut()
                    .resize(canvas_r.width() as f32, canvas_r.height() as f32);
            },
            &mut teardown,
        );
    }

    let handle = frame::start_loop({
        let field = field.clone();
        let rays = rays.clone();
        let mut last = Instant::now();
        move || {
            let now = Instant::now();
            let dt = now - last;
            last = now;

            let mut field = field.borrow_mut();
            field.tick(dt);
            field.render(&mut surface);

            let mut rays_ref = rays.borrow_mut();
            rays_ref.tick(dt);
            let width = field.size().x;
            for (i, ray) in ray_elements.iter().enumerate() {
                let style = ray.style();
                match rays_ref.ray(i, width) {
                    Some(state) => {
                        _ = style.set_property(
                            "transform",
                            &format!("translateX({}px) rotate(-12deg)", state.x),
                        );
                        _ = style.set_property("opacity", &state.opacity.to_string());
                    }
                    None => {
                        _ = style.set_property("opacity", "0");
                    }
                }
            }
        }
    });
    teardown.defer(move || handle.cancel());
    log::info!("[mount] aurora running");
    Ok(Some(teardown))
}

fn spawn_ray_elements(document: &web::Document) -> Rc<Vec<web::HtmlElement>> {
    let mut elements = Vec::new();
    let Some(container) = dom::html_element_by_id(document, RAY_CONTAINER_ID) else {
        return Rc::new(elements);
    };
    for i in 0..RAY_COUNT {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        el.set_class_name("light-ray");
        _ = el.style().set_property("left", &format!("{}%", -10 + i as i32 * 20));
        _ = el.style().set_property("opacity", "0");
        if container.append_child(&el).is_ok() {
            elements.push(el);
        }
    }
    Rc::new(elements)
}
