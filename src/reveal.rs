use crate::constants::{
    REVEALED_CLASS, REVEAL_CANDIDATE_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use crate::core::{RevealDecision, RevealTargets};
use crate::dom;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observation of one candidate element; disposing it stops the observer
/// from reporting on that element again.
struct RevealSubscription {
    observer: web::IntersectionObserver,
    element: web::Element,
}

impl RevealSubscription {
    fn dispose(self) {
        self.observer.unobserve(&self.element);
    }
}

/// Mark every reveal candidate as shown the first time it scrolls into view.
pub fn init_reveal(document: &web::Document) -> anyhow::Result<()> {
    let candidates = dom::query_all_in_document(document, REVEAL_CANDIDATE_SELECTOR);
    if candidates.is_empty() {
        log::info!("[reveal] no {} elements", REVEAL_CANDIDATE_SELECTOR);
        return Ok(());
    }

    let targets = Rc::new(RefCell::new(RevealTargets::<web::Element>::new()));
    let targets_cb = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let element = entry.target();
                let mut targets = targets_cb.borrow_mut();
                let Some(key) = targets.key_of(&element) else {
                    continue;
                };
                let decision = targets.on_visibility(key, entry.is_intersecting());
                drop(targets);
                if decision == RevealDecision::Reveal {
                    _ = element.class_list().add_1(REVEALED_CLASS);
                    RevealSubscription {
                        observer: observer.clone(),
                        element,
                    }
                    .dispose();
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    for element in &candidates {
        targets.borrow_mut().watch(element.clone());
        observer.observe(element);
    }
    log::info!("[reveal] watching {} elements", candidates.len());
    Ok(())
}
