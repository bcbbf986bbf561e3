use crate::constants::{CLOSE_MODAL_ID, HERO_TV_ID, MODAL_VIDEO_ID, VIDEO_MODAL_ID};
use crate::core::modal::{ModalInput, ModalState};
use crate::core::Lifecycle;
use crate::dom;
use crate::error::FxError;
use crate::events::pointer;
use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct ModalView {
    modal: web::HtmlElement,
    iframe: web::HtmlIFrameElement,
    video_url: Rc<str>,
    state: Rc<Cell<ModalState>>,
}

impl ModalView {
    fn dispatch(&self, input: ModalInput) {
        let Some(next) = self.state.get().next(input) else {
            return;
        };
        self.state.set(next);
        dom::set_style(&self.modal, "display", next.display());
        self.iframe.set_src(next.embed_src(&self.video_url));
        log::debug!("[modal] {:?} -> {:?}", input, next);
    }
}

/// Video modal opened from the hero TV.
pub struct ModalController {
    video_url: Rc<str>,
    lifecycle: Lifecycle,
    view: Option<ModalView>,
    listeners: Vec<EventListener>,
}

impl ModalController {
    pub fn new(video_url: &str) -> Self {
        Self {
            video_url: Rc::from(video_url),
            lifecycle: Lifecycle::new("modal"),
            view: None,
            listeners: Vec::new(),
        }
    }

    pub fn init(&mut self, document: &web::Document) -> Result<(), FxError> {
        if !self.lifecycle.begin() {
            return Ok(());
        }
        let [tv, modal, close, iframe] = dom::require_elements(
            document,
            [HERO_TV_ID, VIDEO_MODAL_ID, CLOSE_MODAL_ID, MODAL_VIDEO_ID],
        )?;
        let iframe = iframe
            .dyn_into::<web::HtmlIFrameElement>()
            .map_err(|_| FxError::Js(format!("#{} is not an iframe", MODAL_VIDEO_ID)))?;

        let display = modal.style().get_property_value("display").unwrap_or_default();
        let view = ModalView {
            modal: modal.clone(),
            iframe,
            video_url: self.video_url.clone(),
            state: Rc::new(Cell::new(ModalState::from_display(&display))),
        };

        let v = view.clone();
        self.listeners.push(EventListener::new(&tv, "click", move |_event| {
            v.dispatch(ModalInput::Trigger);
        }));

        let v = view.clone();
        self.listeners.push(EventListener::new(&close, "click", move |_event| {
            v.dispatch(ModalInput::Close);
        }));

        let v = view.clone();
        let backdrop = modal.clone();
        self.listeners.push(EventListener::new(&modal, "click", move |event| {
            let on_backdrop = pointer::targets_exactly(event, &backdrop);
            v.dispatch(ModalInput::Click { on_backdrop });
        }));

        self.view = Some(view);
        self.lifecycle.mark_ready();
        log::info!("[modal] initialized");
        Ok(())
    }

    pub fn state(&self) -> ModalState {
        self.view
            .as_ref()
            .map_or(ModalState::Closed, |v| v.state.get())
    }

    pub fn destroy(&mut self) {
        if let Some(view) = self.view.take() {
            view.dispatch(ModalInput::Close);
        }
        self.listeners.clear();
        self.lifecycle.reset();
    }
}
