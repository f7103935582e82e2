//! Falling-leaf canvas: owns the requestAnimationFrame loop and paints the
//! core particle field onto the 2D context.

use crate::dom;
use site_core::constants::RESIZE_DEBOUNCE_MS;
use site_core::particles::{Particle, ParticleField};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "jungleCanvas";
const ELLIPSE_STRETCH: f64 = 1.5; // vertical radius relative to the base size

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(el) = document.get_element_by_id(CANVAS_ID) else {
        // Decorative only; the page works without it.
        log::debug!("no #{CANVAS_ID}; particle field disabled");
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("#{CANVAS_ID} is not a canvas: {e:?}"))?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?;

    let (width, height) = dom::viewport_size();
    canvas.set_width(width.max(1.0) as u32);
    canvas.set_height(height.max(1.0) as u32);

    let field = Rc::new(RefCell::new(ParticleField::new(
        width as f32,
        height as f32,
        js_sys::Date::now() as u64,
    )));
    log::info!("particle field running with {} particles", field.borrow().len());

    let raf_id = Rc::new(Cell::new(None::<i32>));
    let running = Rc::new(Cell::new(true));

    // Persistent tick closure; re-requests itself while running.
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let tick_clone = tick.clone();
        let field = field.clone();
        let raf_id = raf_id.clone();
        let running = running.clone();
        let canvas = canvas.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            let mut f = field.borrow_mut();
            f.step();
            draw(&ctx, &canvas, f.particles());
            drop(f);
            if let Some(cb) = tick_clone.borrow().as_ref() {
                raf_id.set(dom::request_frame(cb));
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(dom::request_frame(cb));
    }

    // Pause while the tab is hidden, resume when it becomes visible again.
    // The running flag keeps a resume from ever starting a second loop.
    {
        let tick = tick.clone();
        let raf_id = raf_id.clone();
        let running = running.clone();
        let doc = document.clone();
        dom::listen0(document, "visibilitychange", move || {
            if doc.hidden() {
                running.set(false);
                if let Some(id) = raf_id.take() {
                    dom::cancel_frame(id);
                }
            } else if !running.get() {
                running.set(true);
                if let Some(cb) = tick.borrow().as_ref() {
                    raf_id.set(dom::request_frame(cb));
                }
            }
        });
    }

    // Debounced resize: resync the backing size; particles keep their spots.
    {
        let canvas = canvas.clone();
        let on_resize = dom::debounced(RESIZE_DEBOUNCE_MS, move || {
            let (w, h) = dom::viewport_size();
            canvas.set_width(w.max(1.0) as u32);
            canvas.set_height(h.max(1.0) as u32);
            field.borrow_mut().resize(w as f32, h as f32);
        });
        if let Some(window) = web::window() {
            dom::listen0(&window, "resize", on_resize);
        }
    }

    Ok(())
}

fn draw(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement, particles: &[Particle]) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    for p in particles {
        ctx.save();
        let _ = ctx.translate(p.pos.x as f64, p.pos.y as f64);
        let _ = ctx.rotate(p.angle as f64);
        ctx.set_fill_style_str(&p.fill_style);
        ctx.begin_path();
        let _ = ctx.ellipse(
            0.0,
            0.0,
            p.size as f64,
            p.size as f64 * ELLIPSE_STRETCH,
            0.0,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
        ctx.restore();
    }
}
