#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod frame;
mod nav;
mod render;
mod reveal;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neural-page starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Wire each page behaviour on its own; one failing never blocks the others.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    if let Err(e) = reveal::init_reveal(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    if let Err(e) = frame::init_particle_field(&window, &document) {
        log::error!("[particles] disabled: {:?}", e);
    }
    if let Err(e) = contact::init_contact_form(&document) {
        log::warn!("[contact] disabled: {:?}", e);
    }
    nav::init_nav(&document);

    Ok(())
}
