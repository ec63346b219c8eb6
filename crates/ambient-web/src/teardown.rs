//! Mount lifecycle plumbing: every mount returns a [`Teardown`] that cancels
//! its frame callback, clears pending timers, and detaches every listener it
//! registered. Disposal is idempotent.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default)]
pub struct Teardown {
    tasks: Vec<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defer(&mut self, task: impl FnOnce() + 'static) {
        self.tasks.push(Box::new(task));
    }

    /// Run all deferred cleanup. Safe to call more than once.
    pub fn dispose(&mut self) {
        for task in self.tasks.drain(..) {
            task();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Attach an argument-less listener and register its removal.
pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut() + 'static,
    teardown: &mut Teardown,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    let target = target.clone();
    teardown.defer(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    });
}

/// Attach a typed event listener and register its removal.
pub fn listen_event<E>(
    target: &web::EventTarget,
    event: &'static str,
    handler: impl FnMut(E) + 'static,
    teardown: &mut Teardown,
) where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    let target = target.clone();
    teardown.defer(move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop(closure);
    });
}
