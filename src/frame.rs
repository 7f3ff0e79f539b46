use crate::constants::CANVAS_ID;
use crate::core::{paint_frame, ParticleConfig, ParticleField, Rgb};
use crate::dom;
use crate::render::CanvasSurface;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: ParticleField,
    pub surface: CanvasSurface,
    pub color: Rgb,
}

impl FrameContext {
    pub fn frame(&mut self) {
        paint_frame(&mut self.surface, &mut self.field, self.color);
    }
}

/// Find the drawing surface, size it to the viewport, and start the
/// particle network. Resizes rebuild the field from scratch.
pub fn init_particle_field(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;

    let (w, h) = dom::sync_canvas_to_viewport(&canvas, window);
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let field = ParticleField::new(ParticleConfig::default(), w as f32, h as f32, seed);
    log::info!(
        "[particles] {} particles on {}x{}",
        field.particles().len(),
        w,
        h
    );

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        field,
        surface: CanvasSurface { ctx },
        color: Rgb::ACCENT,
    }));

    let resize_ctx = frame_ctx.clone();
    dom::add_resize_listener(move |win| {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas, win);
        resize_ctx
            .borrow_mut()
            .field
            .reinitialize(w as f32, h as f32);
    });

    start_loop(frame_ctx);
    Ok(())
}

/// Drive `frame` once per display refresh via `requestAnimationFrame`.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = tick.borrow();
    let Some(cb) = tick.as_ref() else {
        return;
    };
    if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("[particles] requestAnimationFrame failed: {:?}", e);
    }
}
