use crate::constants::CUSTOM_CURSOR_ID;
use crate::core::Lifecycle;
use crate::dom;
use crate::error::FxError;
use crate::events::pointer;
use gloo::events::EventListener;
use web_sys as web;

/// Pins `#custom-cursor` to the pointer's page coordinates.
pub struct CursorFollower {
    lifecycle: Lifecycle,
    listener: Option<EventListener>,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            lifecycle: Lifecycle::new("cursor"),
            listener: None,
        }
    }
}

impl CursorFollower {
    pub fn init(&mut self, document: &web::Document) -> Result<(), FxError> {
        if !self.lifecycle.begin() {
            return Ok(());
        }
        let [cursor] = dom::require_elements(document, [CUSTOM_CURSOR_ID])?;
        self.listener = Some(EventListener::new(document, "mousemove", move |event| {
            if let Some(ev) = pointer::as_mouse(event) {
                let (x, y) = pointer::page_pos(ev);
                dom::set_style(&cursor, "left", &dom::px(x));
                dom::set_style(&cursor, "top", &dom::px(y));
            }
        }));
        self.lifecycle.mark_ready();
        Ok(())
    }

    pub fn destroy(&mut self) {
        self.listener = None;
        self.lifecycle.reset();
    }
}
