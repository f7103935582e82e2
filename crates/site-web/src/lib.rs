#![cfg(target_arch = "wasm32")]
//! Browser wiring for the portfolio front-end. Every subsystem initializes
//! independently: a missing DOM hook or failed init disables that feature
//! only and never halts the rest of the page.

mod canvas;
mod content;
mod dom;
mod form;
mod observer;
mod scroll;
mod ui;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    let Some(document) = dom::window_document() else {
        log::error!("no document available");
        return Ok(());
    };

    ui::init_notification_styles(&document);
    ui::init_menu(&document);
    ui::init_modal(&document);

    if let Err(e) = canvas::init(&document) {
        log::error!("particle canvas init failed: {e:#}");
    }

    let fade = observer::fade_observer();
    if fade.is_none() {
        log::warn!("IntersectionObserver unavailable; reveal animations disabled");
    }
    content::init(&document, fade.clone());
    form::init(&document);

    if let Err(e) = scroll::init(&document, fade) {
        log::error!("scroll system init failed: {e:#}");
    }

    Ok(())
}
