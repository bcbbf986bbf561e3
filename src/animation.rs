use crate::constants::{
    HERO_HAND_ID, HERO_SPARK_ID, HERO_TV_ID, SPARK_EFFECT_CLASS, SPARK_HIDDEN_CLASS,
};
use crate::core::spark::{SparkLoop, SparkTarget, SparkTiming};
use crate::core::Lifecycle;
use crate::dom;
use crate::error::FxError;
use crate::events::visibility;
use crate::timer::WebScheduler;
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys as web;

/// Spark overlay driven through its class list.
struct SparkElement(web::HtmlElement);

impl SparkTarget for SparkElement {
    fn show(&self) {
        let cl = self.0.class_list();
        _ = cl.remove_1(SPARK_HIDDEN_CLASS);
        _ = cl.add_1(SPARK_EFFECT_CLASS);
    }

    fn hide(&self) {
        let cl = self.0.class_list();
        _ = cl.add_1(SPARK_HIDDEN_CLASS);
        _ = cl.remove_1(SPARK_EFFECT_CLASS);
    }
}

struct Attached {
    sparks: Rc<SparkLoop<WebScheduler>>,
    _visibility: EventListener,
}

pub struct AnimationController {
    timing: SparkTiming,
    lifecycle: Lifecycle,
    attached: Option<Attached>,
}

impl AnimationController {
    pub fn new(timing: SparkTiming) -> Self {
        Self {
            timing,
            lifecycle: Lifecycle::new("animation"),
            attached: None,
        }
    }

    pub fn init(&mut self, document: &web::Document) -> Result<(), FxError> {
        if !self.lifecycle.begin() {
            return Ok(());
        }
        // hand and tv are only checked; the CSS animates them
        let [_hand, _tv, spark] =
            dom::require_elements(document, [HERO_HAND_ID, HERO_TV_ID, HERO_SPARK_ID])?;

        let sparks = Rc::new(SparkLoop::new(
            WebScheduler::default(),
            Rc::new(SparkElement(spark)),
            self.timing,
        ));
        sparks.start();

        let weak = Rc::downgrade(&sparks);
        let listener = visibility::on_visibility_change(document, move |hidden| {
            if let Some(sparks) = weak.upgrade() {
                sparks.on_visibility(hidden);
            }
        });

        self.attached = Some(Attached {
            sparks,
            _visibility: listener,
        });
        self.lifecycle.mark_ready();
        log::info!("[animation] initialized");
        Ok(())
    }

    pub fn destroy(&mut self) {
        if let Some(attached) = self.attached.take() {
            attached.sparks.stop();
            log::info!("[animation] destroyed");
        }
        self.lifecycle.reset();
    }

    pub fn pause(&self) {
        if let Some(a) = &self.attached {
            a.sparks.stop();
        }
    }

    /// No-op unless initialized.
    pub fn resume(&self) {
        if let Some(a) = &self.attached {
            a.sparks.resume(&self.lifecycle);
        }
    }

    pub fn manual_spark(&self) {
        if let Some(a) = &self.attached {
            a.sparks.trigger();
        }
    }

    pub fn is_running(&self) -> bool {
        self.attached.as_ref().is_some_and(|a| a.sparks.is_running())
    }
}
