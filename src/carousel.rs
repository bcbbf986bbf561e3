use crate::constants::{CAROUSEL_SELECTOR, CURSOR_AUTO, CURSOR_GRAB};
use crate::core::carousel::{local_x, DragState};
use crate::core::Lifecycle;
use crate::dom;
use crate::error::FxError;
use crate::events::pointer;
use gloo::events::{EventListener, EventListenerOptions};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Click-and-drag scrolling for every `.carousel-wrapper` on the page.
pub struct CarouselController {
    sensitivity: f64,
    lifecycle: Lifecycle,
    listeners: Vec<EventListener>,
}

impl CarouselController {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            sensitivity,
            lifecycle: Lifecycle::new("carousel"),
            listeners: Vec::new(),
        }
    }

    pub fn init(&mut self, document: &web::Document) -> Result<(), FxError> {
        if !self.lifecycle.begin() {
            return Ok(());
        }
        let wrappers = dom::query_all(document, CAROUSEL_SELECTOR)?;
        if wrappers.is_empty() {
            log::info!("[carousel] no '{}' elements on page", CAROUSEL_SELECTOR);
        }
        for wrapper in &wrappers {
            self.wire(wrapper);
        }
        self.lifecycle.mark_ready();
        log::info!("[carousel] wired {} carousels", wrappers.len());
        Ok(())
    }

    fn wire(&mut self, wrapper: &web::HtmlElement) {
        let drag = Rc::new(RefCell::new(DragState::with_sensitivity(self.sensitivity)));

        let (el, state) = (wrapper.clone(), drag.clone());
        self.listeners
            .push(EventListener::new(wrapper, "mousedown", move |event| {
                let Some(ev) = pointer::as_mouse(event) else {
                    return;
                };
                let x = local_x(ev.page_x() as f64, el.offset_left() as f64);
                state.borrow_mut().begin(x, el.scroll_left() as f64);
            }));

        let state = drag.clone();
        self.listeners
            .push(EventListener::new(wrapper, "mouseup", move |_event| {
                state.borrow_mut().end();
            }));

        let (el, state) = (wrapper.clone(), drag.clone());
        self.listeners
            .push(EventListener::new(wrapper, "mouseleave", move |_event| {
                state.borrow_mut().end();
                dom::set_style(&el, "cursor", CURSOR_AUTO);
            }));

        let el = wrapper.clone();
        self.listeners
            .push(EventListener::new(wrapper, "mouseenter", move |_event| {
                dom::set_style(&el, "cursor", CURSOR_GRAB);
            }));

        let (el, state) = (wrapper.clone(), drag);
        self.listeners.push(EventListener::new_with_options(
            wrapper,
            "mousemove",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let Some(ev) = pointer::as_mouse(event) else {
                    return;
                };
                let x = local_x(ev.page_x() as f64, el.offset_left() as f64);
                let Some(scroll) = state.borrow().scroll_for(x) else {
                    return;
                };
                event.prevent_default();
                el.set_scroll_left(scroll.round() as i32);
            },
        ));
    }

    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.lifecycle.reset();
    }
}
