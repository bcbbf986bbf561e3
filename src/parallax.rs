use crate::constants::HERO_CONTAINER_ID;
use crate::core::parallax::{
    attach_layers, pointer_offset, ContainerRect, LayerKind, LayerSpec, ParallaxRegistry,
};
use crate::core::Lifecycle;
use crate::dom;
use crate::error::FxError;
use crate::events::pointer;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type Registry = Rc<RefCell<ParallaxRegistry<web::HtmlElement>>>;

pub struct ParallaxController {
    lifecycle: Lifecycle,
    registry: Registry,
    listener: Option<EventListener>,
}

impl Default for ParallaxController {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallaxController {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::new("parallax"),
            registry: Rc::new(RefCell::new(ParallaxRegistry::new())),
            listener: None,
        }
    }

    /// Skips (with a warning) ids that are not in the document.
    pub fn register_element(
        &self,
        document: &web::Document,
        id: &str,
        multiplier: f32,
        kind: LayerKind,
    ) {
        self.registry.borrow_mut().register(
            id,
            dom::html_element(document, id),
            multiplier,
            kind,
        );
    }

    /// Registers `layers` once the container is found, then follows the
    /// pointer over the whole window.
    pub fn init(
        &mut self,
        document: &web::Document,
        layers: &[LayerSpec],
    ) -> Result<(), FxError> {
        if !self.lifecycle.begin() {
            return Ok(());
        }
        let window = web::window().ok_or(FxError::NoDocument)?;
        let container = attach_layers(
            &mut self.registry.borrow_mut(),
            dom::html_element(document, HERO_CONTAINER_ID),
            layers,
            |id| dom::html_element(document, id),
        )?;
        if self.registry.borrow().is_empty() {
            log::warn!("[parallax] no layers registered");
        }

        let registry = self.registry.clone();
        self.listener = Some(EventListener::new(&window, "mousemove", move |event| {
            let Some(ev) = pointer::as_mouse(event) else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            let rect = ContainerRect {
                left: rect.left() as f32,
                top: rect.top() as f32,
                width: rect.width() as f32,
                height: rect.height() as f32,
            };
            let offset = pointer_offset(rect, pointer::client_pos(ev));
            for (el, transform) in registry.borrow().frame(offset) {
                dom::set_style(el, "transform", &transform);
            }
        }));

        self.lifecycle.mark_ready();
        log::info!(
            "[parallax] initialized with {} elements",
            self.registry.borrow().len()
        );
        Ok(())
    }

    pub fn destroy(&mut self) {
        self.listener = None;
        self.registry.borrow_mut().clear();
        self.lifecycle.reset();
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().len()
    }
}
