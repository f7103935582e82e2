//! Fade-in reveal driven by a single IntersectionObserver.

use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const THRESHOLD: f64 = 0.1;
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Observer that adds `visible` to intersecting targets and stops watching
/// them. `None` when construction fails (the page stays usable, unrevealed).
pub fn fade_observer() -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .ok();
    callback.forget();
    observer
}

/// Observe every match of `selector` that has not been revealed yet.
pub fn observe_hidden(
    document: &web::Document,
    observer: &web::IntersectionObserver,
    selector: &str,
) {
    for el in dom::query_all(document, selector) {
        if !el.class_list().contains("visible") {
            observer.observe(&el);
        }
    }
}
