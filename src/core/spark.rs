use crate::core::constants::{HAND_ANIMATION_DURATION_MS, IMPACT_DELAY_MS, SPARK_DURATION_MS};
use crate::core::lifecycle::Lifecycle;
use crate::core::scheduler::Scheduler;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Something that can show and hide the spark overlay.
pub trait SparkTarget {
    fn show(&self);
    fn hide(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SparkTiming {
    /// Delay from loop start to the first impact.
    pub impact_delay_ms: u32,
    /// Hand animation cycle; one spark per period.
    pub period_ms: u32,
    /// Time between showing a spark and hiding it again.
    pub flash_ms: u32,
}

impl Default for SparkTiming {
    fn default() -> Self {
        Self {
            impact_delay_ms: IMPACT_DELAY_MS,
            period_ms: HAND_ANIMATION_DURATION_MS,
            flash_ms: SPARK_DURATION_MS,
        }
    }
}

/// At most one running loop per instance; `start` replaces the previous one.
pub struct SparkLoop<S: Scheduler> {
    scheduler: Rc<RefCell<S>>,
    spark: Rc<dyn SparkTarget>,
    timing: SparkTiming,
}

impl<S: Scheduler + 'static> SparkLoop<S> {
    pub fn new(scheduler: S, spark: Rc<dyn SparkTarget>, timing: SparkTiming) -> Self {
        Self {
            scheduler: Rc::new(RefCell::new(scheduler)),
            spark,
            timing,
        }
    }

    pub fn start(&self) {
        let weak: Weak<RefCell<S>> = Rc::downgrade(&self.scheduler);
        let spark = self.spark.clone();
        let flash_ms = self.timing.flash_ms;
        let mut scheduler = self.scheduler.borrow_mut();
        scheduler.stop();
        scheduler.start(
            self.timing.impact_delay_ms,
            self.timing.period_ms,
            Box::new(move || {
                if let Some(scheduler) = weak.upgrade() {
                    flash(&scheduler, &spark, flash_ms);
                }
            }),
        );
    }

    pub fn stop(&self) {
        self.scheduler.borrow_mut().stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.borrow().is_running()
    }

    /// Hidden pages stop the loop; becoming visible restarts it, so the next
    /// spark lands one impact delay later.
    pub fn on_visibility(&self, hidden: bool) {
        if hidden {
            log::debug!("[animation] page hidden, pausing sparks");
            self.stop();
        } else {
            self.start();
        }
    }

    /// Restarts the loop only once `lifecycle` is initialized. Returns
    /// whether it restarted.
    pub fn resume(&self, lifecycle: &Lifecycle) -> bool {
        if !lifecycle.is_initialized() {
            return false;
        }
        self.start();
        true
    }

    /// Show the spark now and hide it after the flash duration.
    pub fn trigger(&self) {
        flash(&self.scheduler, &self.spark, self.timing.flash_ms);
    }
}

fn flash<S: Scheduler>(scheduler: &RefCell<S>, spark: &Rc<dyn SparkTarget>, flash_ms: u32) {
    spark.show();
    let spark = spark.clone();
    scheduler
        .borrow_mut()
        .defer(flash_ms, Box::new(move || spark.hide()));
}
