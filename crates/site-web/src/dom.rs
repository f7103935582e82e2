//! Small DOM and scheduling helpers shared by the subsystems.

use gloo_timers::callback::Timeout;
use site_core::timing::Debouncer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// CSS-pixel viewport size, `(0, 0)` when unavailable.
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// All elements matching `selector`; empty for a bad selector.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list
                .item(i)
                .and_then(|node| node.dyn_into::<web::Element>().ok())
            {
                out.push(el);
            }
        }
    }
    out
}

/// Attach a leaked event listener receiving the raw event.
pub fn listen(target: &web::EventTarget, event: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a leaked event listener that ignores the event object.
pub fn listen0(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |_: web::Event| handler()) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Toggle `class` on `el` only when its presence actually changes.
pub fn set_class_if_changed(el: &web::Element, class: &str, on: bool) {
    let list = el.class_list();
    if list.contains(class) != on {
        if on {
            let _ = list.add_1(class);
        } else {
            let _ = list.remove_1(class);
        }
    }
}

pub fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| {
        w.request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    })
}

pub fn cancel_frame(id: i32) {
    if let Some(w) = web::window() {
        let _ = w.cancel_animation_frame(id);
    }
}

/// Trailing-edge debounce: `action` runs once per quiet period of `delay_ms`.
/// Stale timers are recognized by their deadline token and no-op.
pub fn debounced(delay_ms: f64, action: impl Fn() + 'static) -> impl FnMut() {
    let debouncer = Rc::new(RefCell::new(Debouncer::new(delay_ms)));
    let action = Rc::new(action);
    move || {
        let deadline = debouncer.borrow_mut().trigger(now_ms());
        let debouncer = debouncer.clone();
        let action = action.clone();
        Timeout::new(delay_ms as u32, move || {
            if debouncer.borrow_mut().expire(deadline) {
                action();
            }
        })
        .forget();
    }
}
