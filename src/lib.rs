#![cfg(target_arch = "wasm32")]
use crate::core::parallax::LayerKind;
use crate::core::FxConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod animation;
mod carousel;
mod constants;
mod core;
mod cursor;
mod dom;
mod error;
mod events;
mod modal;
mod parallax;
mod timer;

use animation::AnimationController;
use carousel::CarouselController;
use cursor::CursorFollower;
use error::FxError;
use modal::ModalController;
use parallax::ParallaxController;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-fx starting");
    Ok(())
}

/// Build a page with the default configuration and attach it.
#[wasm_bindgen]
pub fn mount() -> Result<LandingPage, JsValue> {
    let mut page = LandingPage::new();
    page.init()?;
    Ok(page)
}

/// Owns one of each controller. The host keeps the instance alive and calls
/// `destroy` to detach everything.
#[wasm_bindgen]
pub struct LandingPage {
    config: FxConfig,
    animation: AnimationController,
    parallax: ParallaxController,
    carousels: CarouselController,
    cursor: CursorFollower,
    modal: ModalController,
}

impl LandingPage {
    fn from_config(config: FxConfig) -> Self {
        Self {
            animation: AnimationController::new(config.spark),
            parallax: ParallaxController::new(),
            carousels: CarouselController::new(config.drag_sensitivity),
            cursor: CursorFollower::default(),
            modal: ModalController::new(&config.video_url),
            config,
        }
    }

    fn document() -> Result<web::Document, FxError> {
        dom::window_document().ok_or(FxError::NoDocument)
    }
}

impl From<FxError> for JsValue {
    fn from(e: FxError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

fn report(component: &str, result: Result<(), FxError>) {
    if let Err(e) = result {
        log::error!("[{}] failed to initialize: {}", component, e);
    }
}

#[wasm_bindgen]
impl LandingPage {
    #[wasm_bindgen(constructor)]
    pub fn new() -> LandingPage {
        Self::from_config(FxConfig::default())
    }

    #[wasm_bindgen(js_name = withVideoUrl)]
    pub fn with_video_url(url: String) -> LandingPage {
        Self::from_config(FxConfig::default().with_video_url(url))
    }

    /// Attach every controller. A controller whose elements are missing is
    /// logged and skipped; only a missing document is an error.
    pub fn init(&mut self) -> Result<(), JsValue> {
        let document = Self::document()?;

        report("animation", self.animation.init(&document));

        report("parallax", self.parallax.init(&document, &self.config.layers));
        report("carousel", self.carousels.init(&document));
        report("cursor", self.cursor.init(&document));
        report("modal", self.modal.init(&document));
        Ok(())
    }

    pub fn destroy(&mut self) {
        self.animation.destroy();
        self.parallax.destroy();
        self.carousels.destroy();
        self.cursor.destroy();
        self.modal.destroy();
        log::info!("hero-fx destroyed");
    }

    #[wasm_bindgen(js_name = pauseSparkLoop)]
    pub fn pause_spark_loop(&self) {
        self.animation.pause();
    }

    #[wasm_bindgen(js_name = resumeSparkLoop)]
    pub fn resume_spark_loop(&self) {
        self.animation.resume();
    }

    #[wasm_bindgen(js_name = manualSpark)]
    pub fn manual_spark(&self) {
        self.animation.manual_spark();
    }

    #[wasm_bindgen(getter = sparkLoopRunning)]
    pub fn spark_loop_running(&self) -> bool {
        self.animation.is_running()
    }

    #[wasm_bindgen(getter = modalOpen)]
    pub fn modal_open(&self) -> bool {
        self.modal.state() == crate::core::modal::ModalState::Open
    }

    #[wasm_bindgen(getter = parallaxLayers)]
    pub fn parallax_layers(&self) -> usize {
        self.parallax.len()
    }

    /// `kind` is one of `default`, `earth` or `container`.
    #[wasm_bindgen(js_name = registerParallaxElement)]
    pub fn register_parallax_element(
        &self,
        id: &str,
        multiplier: f32,
        kind: &str,
    ) -> Result<(), JsValue> {
        let kind: LayerKind = kind.parse()?;
        let document = Self::document()?;
        self.parallax.register_element(&document, id, multiplier, kind);
        Ok(())
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}
