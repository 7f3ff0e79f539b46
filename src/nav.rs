use crate::constants::{HAMBURGER_SELECTOR, NAV_OPEN_CLASS, NAV_PANEL_SELECTOR};
use crate::core::NavState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mobile navigation: the hamburger control plus the links panel it opens.
struct NavToggle {
    state: NavState,
    control: web::Element,
    panel: web::Element,
}

impl NavToggle {
    /// Write the state into the panel class and the control's `aria-expanded`.
    fn sync(&self) {
        let classes = self.panel.class_list();
        _ = if self.state.is_open() {
            classes.add_1(NAV_OPEN_CLASS)
        } else {
            classes.remove_1(NAV_OPEN_CLASS)
        };
        _ = self
            .control
            .set_attribute("aria-expanded", self.state.aria_expanded());
    }
}

pub fn init_nav(document: &web::Document) {
    let (Some(control), Some(panel)) = (
        dom::query(document, HAMBURGER_SELECTOR),
        dom::query(document, NAV_PANEL_SELECTOR),
    ) else {
        log::info!("[nav] no hamburger/panel pair; nav toggle disabled");
        return;
    };
    _ = control.set_attribute("role", "button");

    let nav = Rc::new(RefCell::new(NavToggle {
        state: NavState::default(),
        control: control.clone(),
        panel: panel.clone(),
    }));
    nav.borrow().sync();

    let on_click = nav.clone();
    dom::add_click_listener(&control, move || {
        let mut nav = on_click.borrow_mut();
        let open = nav.state.toggle();
        nav.sync();
        log::debug!("[nav] open={}", open);
    });

    let links = dom::query_all(&panel, "a");
    for link in &links {
        let on_link = nav.clone();
        dom::add_click_listener(link, move || {
            let mut nav = on_link.borrow_mut();
            nav.state.close();
            nav.sync();
        });
    }

    let on_resize = nav.clone();
    dom::add_resize_listener(move |win| {
        let (width, _) = dom::viewport_size(win);
        let mut nav = on_resize.borrow_mut();
        if nav.state.on_resize(width) {
            nav.sync();
        }
    });

    log::info!("[nav] toggle wired ({} links)", links.len());
}
