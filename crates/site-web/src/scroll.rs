//! Unified scroll system: one coalesced recompute per frame over a cached
//! layout snapshot, plus smooth-scroll anchor navigation.

use crate::{dom, observer};
use site_core::constants::RESIZE_DEBOUNCE_MS;
use site_core::scroll::{ScrollModel, SectionBounds};
use site_core::timing::FrameCoalescer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const REVEAL_SELECTOR: &str = ".project-card, .skill-item, .info-card, .contact-item";
const PARALLAX_SELECTOR: &str = ".hero-canopy, .about-bg, .projects-bg";

struct ScrollSystem {
    model: ScrollModel,
    header: Option<web::HtmlElement>,
    nav_links: Vec<(web::Element, Option<String>)>,
    parallax: Vec<web::HtmlElement>,
    sections: Vec<web::HtmlElement>,
}

impl ScrollSystem {
    fn new(document: &web::Document) -> Self {
        let header = document
            .query_selector(".header")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok());
        let nav_links = dom::query_all(document, ".nav-link")
            .into_iter()
            .map(|el| {
                let href = el.get_attribute("href");
                (el, href)
            })
            .collect();
        let parallax = dom::query_all(document, PARALLAX_SELECTOR)
            .into_iter()
            .filter_map(|e| e.dyn_into::<web::HtmlElement>().ok())
            .collect();
        let sections = dom::query_all(document, "section[id]")
            .into_iter()
            .filter_map(|e| e.dyn_into::<web::HtmlElement>().ok())
            .collect();

        let mut system = Self {
            model: ScrollModel::new(),
            header,
            nav_links,
            parallax,
            sections,
        };
        system.rebuild_cache();
        system
    }

    /// Snapshot live layout. The per-frame path only ever reads this cache.
    fn rebuild_cache(&mut self) {
        let bounds = self
            .sections
            .iter()
            .filter_map(|el| {
                let id = el.id();
                (!id.is_empty()).then(|| SectionBounds {
                    id,
                    top: el.offset_top() as f64,
                    height: el.offset_height() as f64,
                })
            })
            .collect();
        self.model.set_sections(bounds);
        self.model.set_header_height(
            self.header
                .as_ref()
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0),
        );
    }

    /// Apply all scroll-derived state for one frame. Class writes happen only
    /// when the state actually changes.
    fn recompute(&self, scroll_y: f64) {
        let state = self.model.derive(scroll_y);

        if let Some(header) = &self.header {
            dom::set_class_if_changed(header, "scrolled", state.header_scrolled);
        }

        for el in &self.parallax {
            let _ = el.style().set_property(
                "transform",
                &format!("translateY({}px)", state.parallax_offset),
            );
        }

        let active_id = state
            .active_section
            .and_then(|i| self.model.section_id(i));
        for (link, href) in &self.nav_links {
            let want = matches!(
                (active_id, href.as_deref()),
                (Some(id), Some(h)) if h.strip_prefix('#') == Some(id)
            );
            dom::set_class_if_changed(link, "active", want);
        }
    }
}

pub fn init(
    document: &web::Document,
    fade: Option<web::IntersectionObserver>,
) -> anyhow::Result<()> {
    // Reveal animation for the elements already present at load; content
    // loaders re-attach it to what they render later.
    if let Some(obs) = &fade {
        observer::observe_hidden(document, obs, REVEAL_SELECTOR);
    }

    let system = Rc::new(RefCell::new(ScrollSystem::new(document)));
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    // Coalesced scroll handling: many events per frame, one recompute.
    let coalescer = Rc::new(RefCell::new(FrameCoalescer::new()));
    let recompute: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let system = system.clone();
        let coalescer = coalescer.clone();
        *recompute.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let scroll_y = coalescer.borrow_mut().take();
            system.borrow().recompute(scroll_y);
        }) as Box<dyn FnMut()>));
    }
    {
        let coalescer = coalescer.clone();
        let recompute = recompute.clone();
        dom::listen0(&window, "scroll", move || {
            if coalescer.borrow_mut().push(dom::scroll_y()) {
                if let Some(cb) = recompute.borrow().as_ref() {
                    let _ = dom::request_frame(cb);
                }
            }
        });
    }

    // Rebuild the layout cache after a quiet resize period.
    {
        let system = system.clone();
        let on_resize = dom::debounced(RESIZE_DEBOUNCE_MS, move || {
            system.borrow_mut().rebuild_cache();
        });
        dom::listen0(&window, "resize", on_resize);
    }

    init_smooth_anchors(document);
    Ok(())
}

/// In-page anchors scroll smoothly to their target, offset by the live header
/// height (the cache may be stale right after content loads).
fn init_smooth_anchors(document: &web::Document) {
    for link in dom::query_all(document, r##"a[href^="#"]"##) {
        let document = document.clone();
        let link_ref = link.clone();
        dom::listen(&link, "click", move |ev| {
            let Some(href) = link_ref.get_attribute("href") else {
                return;
            };
            let Some(target_id) = href.strip_prefix('#') else {
                return;
            };
            if target_id.is_empty() {
                return;
            }
            ev.prevent_default();
            let Some(target) = document
                .get_element_by_id(target_id)
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            let header_height = document
                .query_selector(".header")
                .ok()
                .flatten()
                .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);
            if let Some(window) = web::window() {
                let opts = web::ScrollToOptions::new();
                opts.set_top(target.offset_top() as f64 - header_height);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
        });
    }
}
