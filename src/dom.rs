use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// First element matching `selector`; an invalid selector counts as absent.
#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// All elements under `root` matching `selector`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

/// Same as [`query_all`], searching the whole document.
pub fn query_all_in_document(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(collect_elements)
        .unwrap_or_default()
}

fn collect_elements(list: web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listen for window resizes for the rest of the page's life.
pub fn add_resize_listener(mut handler: impl FnMut(&web::Window) + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || handler(&win)) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// `innerWidth x innerHeight` in CSS pixels, zero when unavailable.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Size the canvas backing store to the viewport and return the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement, window: &web::Window) -> (u32, u32) {
    let (w, h) = viewport_size(window);
    let (w_px, h_px) = (w.max(0.0) as u32, h.max(0.0) as u32);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}

/// Run `f` once after `delay_ms`. Each call gets its own timer.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms,
    ) {
        log::warn!("setTimeout failed: {:?}", e);
    }
}
