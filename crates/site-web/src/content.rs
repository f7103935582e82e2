//! Fetch-and-render of the three content sections, plus the animated
//! about-section stats. Each loader is fire-and-forget: a failed fetch logs
//! and renders a placeholder without touching any other subsystem.

use crate::{dom, observer};
use gloo_net::http::Request;
use site_core::constants::STAT_COUNT_DURATION_MS;
use site_core::content::{self, Project};
use site_core::render;
use site_core::stats;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn init(document: &web::Document, fade: Option<web::IntersectionObserver>) {
    load_projects(document, fade.clone());
    load_skills(document, fade.clone());
    load_journey(document, fade);
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| anyhow::anyhow!("GET {url}: {e}"))?;
    if !resp.ok() {
        anyhow::bail!("GET {url}: status {}", resp.status());
    }
    resp.text()
        .await
        .map_err(|e| anyhow::anyhow!("GET {url}: {e}"))
}

fn load_projects(document: &web::Document, fade: Option<web::IntersectionObserver>) {
    let Some(grid) = document.query_selector(".projects-grid").ok().flatten() else {
        return;
    };
    let document = document.clone();
    spawn_local(async move {
        let projects = match fetch_text("projects.json")
            .await
            .and_then(|text| Ok(content::parse_projects(&text)?))
        {
            Ok(projects) => projects,
            Err(e) => {
                log::error!("loading projects failed: {e:#}");
                grid.set_inner_html(render::placeholder_html());
                return;
            }
        };
        grid.set_inner_html(&render::project_cards_html(&projects));
        attach_card_handlers(&document, Rc::new(projects));
        if let Some(obs) = &fade {
            observer::observe_hidden(&document, obs, ".project-card");
        }
    });
}

fn load_skills(document: &web::Document, fade: Option<web::IntersectionObserver>) {
    let Some(grid) = document.query_selector(".skills-grid").ok().flatten() else {
        return;
    };
    let document = document.clone();
    spawn_local(async move {
        let skills = match fetch_text("skills.json")
            .await
            .and_then(|text| Ok(content::parse_skills(&text)?))
        {
            Ok(skills) => skills,
            Err(e) => {
                log::error!("loading skills failed: {e:#}");
                grid.set_inner_html(render::placeholder_html());
                return;
            }
        };
        grid.set_inner_html(&render::skills_html(&skills));
        if let Some(obs) = &fade {
            observer::observe_hidden(&document, obs, ".skill-item");
        }
        // Stats read the rendered skill count, so they start here.
        init_stats(&document);
    });
}

fn load_journey(document: &web::Document, fade: Option<web::IntersectionObserver>) {
    let Some(timeline) = document.query_selector(".journey-timeline").ok().flatten() else {
        return;
    };
    let document = document.clone();
    spawn_local(async move {
        let journey = match fetch_text("journey.json")
            .await
            .and_then(|text| Ok(content::parse_journey(&text)?))
        {
            Ok(journey) => journey,
            Err(e) => {
                log::error!("loading journey failed: {e:#}");
                timeline.set_inner_html(render::placeholder_html());
                return;
            }
        };
        timeline.set_inner_html(&render::journey_html(&journey));
        if let Some(obs) = &fade {
            observer::observe_hidden(&document, obs, ".journey-stage");
        }
    });
}

/// Clicking a card (outside its button row) opens the project modal with the
/// matching record.
fn attach_card_handlers(document: &web::Document, projects: Rc<Vec<Project>>) {
    let Some(modal) = document.get_element_by_id("projectModal") else {
        return;
    };
    let Some(modal_body) = modal.query_selector(".modal-body").ok().flatten() else {
        return;
    };
    for card in dom::query_all(document, ".project-card") {
        let card_ref = card.clone();
        let projects = projects.clone();
        let modal = modal.clone();
        let modal_body = modal_body.clone();
        dom::listen(&card, "click", move |ev| {
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok()) {
                // Button clicks navigate; they never open the modal.
                if target.closest(".project-buttons").ok().flatten().is_some() {
                    return;
                }
            }
            let Some(id) = card_ref
                .get_attribute("data-project-id")
                .and_then(|s| s.parse::<u32>().ok())
            else {
                return;
            };
            let Some(project) = projects.iter().find(|p| p.id == id) else {
                return;
            };
            modal_body.set_inner_html(&render::project_modal_html(project));
            let _ = modal.class_list().add_1("active");
        });
    }
}

/// Counters start when half-visible and not yet counted; values come from the
/// loaded content (skill and card counts) and the fixed experience start date.
fn init_stats(document: &web::Document) {
    let stat_els = dom::query_all(document, ".stat-number");
    if stat_els.is_empty() {
        return;
    }
    let years = stats::experience_years(js_sys::Date::now());

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if target.class_list().contains("counted") {
                    continue;
                }
                let _ = target.class_list().add_1("counted");
                let Some(document) = dom::window_document() else {
                    continue;
                };
                let kind = target.get_attribute("data-type").unwrap_or_default();
                let (end, decimal) = match kind.as_str() {
                    "experience" => (years, true),
                    "technologies" => {
                        let n = dom::query_all(&document, ".skill-item").len();
                        (if n == 0 { 8.0 } else { n as f64 }, false)
                    }
                    "projects" => (dom::query_all(&document, ".project-card").len() as f64, false),
                    _ => (0.0, false),
                };
                animate_counter(target, end, decimal);
                observer.unobserve(&entry.target());
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.5));
    if let Ok(observer) =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        for el in &stat_els {
            observer.observe(el);
        }
    }
    callback.forget();
}

/// Count from 0 to `end` over the raf clock, then pin the exact end value.
fn animate_counter(el: web::Element, end: f64, decimal: bool) {
    let started_at = Rc::new(Cell::new(None::<f64>));
    let step: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let step_clone = step.clone();
    *step.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let t0 = match started_at.get() {
            Some(t0) => t0,
            None => {
                started_at.set(Some(timestamp));
                timestamp
            }
        };
        let progress = ((timestamp - t0) / STAT_COUNT_DURATION_MS).min(1.0);
        if progress < 1.0 {
            let value = stats::counter_value(0.0, end, progress);
            el.set_text_content(Some(&stats::counter_text(value, decimal)));
            if let (Some(window), Some(cb)) = (web::window(), step_clone.borrow().as_ref()) {
                let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        } else {
            el.set_text_content(Some(&stats::counter_text(end, decimal)));
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(window), Some(cb)) = (web::window(), step.borrow().as_ref()) {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
