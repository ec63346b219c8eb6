//! Self-rescheduling requestAnimationFrame loop with cancellation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameHandle {
    cancelled: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    // Keeps the self-referential tick closure alive until the handle drops.
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameHandle {
    /// Stop the loop and cancel the pending frame request. Idempotent.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
    }
}

/// Drive `frame` once per animation frame until the returned handle cancels.
pub fn start_loop(mut frame: impl FnMut() + 'static) -> FrameHandle {
    let cancelled = Rc::new(Cell::new(false));
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let cancelled_tick = cancelled.clone();
    let raf_id_tick = raf_id.clone();
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_tick.get() {
            return;
        }
        frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    raf_id_tick.set(id);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                raf_id.set(id);
            }
        }
    }

    FrameHandle {
        cancelled,
        raf_id,
        _tick: tick,
    }
}
