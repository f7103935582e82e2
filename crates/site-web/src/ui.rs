//! DOM chrome: mobile menu, project modal dismissal, and notifications.

use crate::dom;
use gloo_timers::callback::Timeout;
use site_core::constants::{NOTIFICATION_FADE_MS, NOTIFICATION_VISIBLE_MS};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn init_menu(document: &web::Document) {
    let toggle = document.query_selector(".nav-toggle").ok().flatten();
    let menu = document.query_selector(".nav-menu").ok().flatten();
    let (Some(toggle), Some(menu)) = (toggle, menu) else {
        return;
    };

    {
        let toggle_ref = toggle.clone();
        let menu_ref = menu.clone();
        dom::listen0(&toggle, "click", move || {
            let _ = toggle_ref.class_list().toggle("active");
            let _ = menu_ref.class_list().toggle("active");
        });
    }
    for link in dom::query_all(document, ".nav-link") {
        let toggle = toggle.clone();
        let menu = menu.clone();
        dom::listen0(&link, "click", move || {
            close_menu(&toggle, &menu);
        });
    }
    // A click anywhere outside the toggle and menu closes the menu.
    {
        let toggle = toggle.clone();
        let menu = menu.clone();
        dom::listen(document, "click", move |ev| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Node>().ok())
                .map(|node| toggle.contains(Some(&node)) || menu.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                close_menu(&toggle, &menu);
            }
        });
    }
}

fn close_menu(toggle: &web::Element, menu: &web::Element) {
    let _ = toggle.class_list().remove_1("active");
    let _ = menu.class_list().remove_1("active");
}

pub fn init_modal(document: &web::Document) {
    let Some(modal) = document.get_element_by_id("projectModal") else {
        return;
    };
    for selector in [".modal-close", ".modal-overlay"] {
        if let Ok(Some(el)) = modal.query_selector(selector) {
            let modal = modal.clone();
            dom::listen0(&el, "click", move || {
                let _ = modal.class_list().remove_1("active");
            });
        }
    }
    let modal_ref = modal.clone();
    dom::listen(document, "keydown", move |ev| {
        if let Some(key_ev) = ev.dyn_ref::<web::KeyboardEvent>() {
            if key_ev.key() == "Escape" {
                let _ = modal_ref.class_list().remove_1("active");
            }
        }
    });
}

pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Self::Success => "#22c55e",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }
}

/// Float a transient message in the corner, replacing any current one.
pub fn notify(message: &str, kind: NotificationKind) {
    let Some(document) = dom::window_document() else {
        return;
    };
    for old in dom::query_all(&document, ".notification") {
        old.remove();
    }

    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(&format!("notification notification-{}", kind.class()));
    let _ = el.set_attribute(
        "style",
        &format!(
            "position: fixed; top: 100px; right: 20px; background: {}; \
             color: white; padding: 1rem; border-radius: 8px; z-index: 9999; \
             box-shadow: 0 4px 12px rgba(0,0,0,0.15); animation: slideIn 0.3s ease;",
            kind.color()
        ),
    );
    el.set_inner_html(&format!("<span>{message}</span>"));
    if let Some(body) = document.body() {
        let _ = body.append_child(&el);
    }

    let el_fade = el.clone();
    Timeout::new(NOTIFICATION_VISIBLE_MS, move || {
        if let Some(html_el) = el_fade.dyn_ref::<web::HtmlElement>() {
            let _ = html_el.style().set_property("opacity", "0");
        }
        let el_remove = el_fade.clone();
        Timeout::new(NOTIFICATION_FADE_MS, move || el_remove.remove()).forget();
    })
    .forget();
}

/// One-time keyframes for the notification slide-in.
pub fn init_notification_styles(document: &web::Document) {
    if let (Ok(style), Some(head)) = (document.create_element("style"), document.head()) {
        style.set_text_content(Some(
            "@keyframes slideIn { from { transform: translateX(100%); opacity: 0; } \
             to { transform: translateX(0); opacity: 1; } }",
        ));
        let _ = head.append_child(&style);
    }
}
