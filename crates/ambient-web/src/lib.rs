#![cfg(target_arch = "wasm32")]
//! Web front-end wiring the ambient background cores onto the page: canvas
//! surfaces, the frame loop, input/resize listeners, and mount/unmount
//! lifecycle.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

mod aurora;
mod constellation;
mod dom;
mod frame;
mod hero;
mod input;
mod radar_view;
mod surface2d;
mod teardown;

use teardown::Teardown;

thread_local! {
    static ACTIVE_MOUNTS: RefCell<Vec<Teardown>> = RefCell::new(Vec::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Tear down every active mount: cancel frame callbacks, clear timers, detach
/// listeners. Safe to call repeatedly.
#[wasm_bindgen]
pub fn unmount() {
    ACTIVE_MOUNTS.with(|mounts| {
        for mut teardown in mounts.borrow_mut().drain(..) {
            teardown.dispose();
        }
    });
    log::info!("ambient-web unmounted");
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let base_seed = js_sys::Date::now() as u64;

    // Each background is optional on a given page; a missing host element is
    // "not yet mounted", not an error.
    let mounts = [
        constellation::mount(&document, base_seed)?,
        aurora::mount(&document)?,
        radar_view::mount(&document, base_seed)?,
        hero::mount(&document)?,
    ];
    ACTIVE_MOUNTS.with(|active| {
        active.borrow_mut().extend(mounts.into_iter().flatten());
    });
    Ok(())
}
