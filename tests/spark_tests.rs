// Host-side tests for the spark loop, driven by a virtual clock.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod core {
    pub mod carousel {
        include!("../src/core/carousel.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod lifecycle {
        include!("../src/core/lifecycle.rs");
    }
    pub mod modal {
        include!("../src/core/modal.rs");
    }
    pub mod parallax {
        include!("../src/core/parallax.rs");
    }
    pub mod scheduler {
        include!("../src/core/scheduler.rs");
    }
    pub mod spark {
        include!("../src/core/spark.rs");
    }
}

use crate::core::lifecycle::Lifecycle;
use crate::core::scheduler::{OnceTask, Scheduler, Task};
use crate::core::spark::{SparkLoop, SparkTarget, SparkTiming};
use std::cell::RefCell;
use std::rc::Rc;

struct Repeating {
    next_due: u32,
    period: u32,
    task: Rc<RefCell<Task>>,
}

#[derive(Default)]
struct Clock {
    now: u32,
    repeating: Option<Repeating>,
    once: Vec<(u32, OnceTask)>,
}

enum Due {
    Once(usize),
    Repeat,
}

/// Virtual-time scheduler; clones share one clock.
#[derive(Clone, Default)]
struct ManualScheduler(Rc<RefCell<Clock>>);

impl ManualScheduler {
    fn now(&self) -> u32 {
        self.0.borrow().now
    }

    fn next_due(&self, until: u32) -> Option<(u32, Due)> {
        let clock = self.0.borrow();
        let mut best: Option<(u32, Due)> = None;
        for (i, (due, _)) in clock.once.iter().enumerate() {
            if *due <= until && best.as_ref().map_or(true, |(b, _)| due < b) {
                best = Some((*due, Due::Once(i)));
            }
        }
        if let Some(r) = &clock.repeating {
            if r.next_due <= until && best.as_ref().map_or(true, |(b, _)| r.next_due < *b) {
                best = Some((r.next_due, Due::Repeat));
            }
        }
        best
    }

    /// Run everything due within the next `ms`, never holding the clock
    /// borrowed while a task runs.
    fn advance(&self, ms: u32) {
        let until = self.now() + ms;
        while let Some((at, due)) = self.next_due(until) {
            match due {
                Due::Once(i) => {
                    let task = {
                        let mut clock = self.0.borrow_mut();
                        clock.now = at;
                        clock.once.remove(i).1
                    };
                    task();
                }
                Due::Repeat => {
                    let task = {
                        let mut clock = self.0.borrow_mut();
                        clock.now = at;
                        let r = clock.repeating.as_mut().unwrap();
                        r.next_due += r.period;
                        r.task.clone()
                    };
                    (*task.borrow_mut())();
                }
            }
        }
        self.0.borrow_mut().now = until;
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, delay_ms: u32, period_ms: u32, task: Task) {
        let mut clock = self.0.borrow_mut();
        let next_due = clock.now + delay_ms;
        clock.repeating = Some(Repeating {
            next_due,
            period: period_ms,
            task: Rc::new(RefCell::new(task)),
        });
    }

    fn stop(&mut self) {
        self.0.borrow_mut().repeating = None;
    }

    fn is_running(&self) -> bool {
        self.0.borrow().repeating.is_some()
    }

    fn defer(&mut self, delay_ms: u32, task: OnceTask) {
        let mut clock = self.0.borrow_mut();
        let due = clock.now + delay_ms;
        clock.once.push((due, task));
    }
}

struct Recorder {
    clock: ManualScheduler,
    events: RefCell<Vec<(u32, &'static str)>>,
}

impl SparkTarget for Recorder {
    fn show(&self) {
        self.events.borrow_mut().push((self.clock.now(), "show"));
    }

    fn hide(&self) {
        self.events.borrow_mut().push((self.clock.now(), "hide"));
    }
}

fn setup() -> (ManualScheduler, Rc<Recorder>, SparkLoop<ManualScheduler>) {
    let clock = ManualScheduler::default();
    let recorder = Rc::new(Recorder {
        clock: clock.clone(),
        events: RefCell::new(Vec::new()),
    });
    let sparks = SparkLoop::new(clock.clone(), recorder.clone(), SparkTiming::default());
    (clock, recorder, sparks)
}

fn shows(recorder: &Recorder) -> Vec<u32> {
    recorder
        .events
        .borrow()
        .iter()
        .filter(|(_, e)| *e == "show")
        .map(|(t, _)| *t)
        .collect()
}

#[test]
fn default_timing_matches_hand_animation() {
    let t = SparkTiming::default();
    assert_eq!(t.impact_delay_ms, 800);
    assert_eq!(t.period_ms, 2500);
    assert_eq!(t.flash_ms, 750);
}

#[test]
fn first_spark_fires_after_impact_delay() {
    let (clock, recorder, sparks) = setup();
    sparks.start();
    assert!(sparks.is_running());

    clock.advance(799);
    assert!(recorder.events.borrow().is_empty());

    clock.advance(1);
    assert_eq!(*recorder.events.borrow(), vec![(800, "show")]);

    clock.advance(750);
    assert_eq!(*recorder.events.borrow(), vec![(800, "show"), (1550, "hide")]);
}

#[test]
fn one_spark_per_period_with_fixed_flash() {
    let (clock, recorder, sparks) = setup();
    sparks.start();
    clock.advance(800 + 2500 * 4 + 1000);

    assert_eq!(shows(&recorder), vec![800, 3300, 5800, 8300, 10800]);

    let events = recorder.events.borrow();
    assert_eq!(events.len(), 10);
    for pair in events.chunks(2) {
        assert_eq!(pair[0].1, "show");
        assert_eq!(pair[1].1, "hide");
        assert_eq!(pair[1].0 - pair[0].0, 750);
    }
}

#[test]
fn pausing_stops_future_sparks() {
    let (clock, recorder, sparks) = setup();
    sparks.start();
    clock.advance(900);
    sparks.stop();
    assert!(!sparks.is_running());

    clock.advance(20_000);
    // the in-flight flash still hides
    assert_eq!(*recorder.events.borrow(), vec![(800, "show"), (1550, "hide")]);
}

#[test]
fn resuming_waits_for_the_next_impact() {
    let (clock, recorder, sparks) = setup();
    sparks.start();
    clock.advance(900);
    sparks.stop();
    clock.advance(5000);

    sparks.start();
    clock.advance(800);
    assert_eq!(shows(&recorder), vec![800, 6700]);
}

#[test]
fn stop_cancels_a_pending_first_spark() {
    let (clock, recorder, sparks) = setup();
    sparks.start();
    clock.advance(500);
    sparks.stop();
    clock.advance(10_000);
    assert!(recorder.events.borrow().is_empty());
}

#[test]
fn restarting_keeps_a_single_loop() {
    let (clock, recorder, sparks) = setup();
    sparks.start();
    sparks.start();
    clock.advance(800 + 2500);
    assert_eq!(shows(&recorder), vec![800, 3300]);
}

#[test]
fn manual_trigger_flashes_once() {
    let (clock, recorder, sparks) = setup();
    sparks.trigger();
    assert!(!sparks.is_running());
    clock.advance(10_000);
    assert_eq!(*recorder.events.borrow(), vec![(0, "show"), (750, "hide")]);
}

#[test]
fn dropped_loop_no_longer_flashes() {
    let (clock, recorder, sparks) = setup();
    sparks.start();
    drop(sparks);
    clock.advance(10_000);
    assert!(recorder.events.borrow().is_empty());
}

#[test]
fn lifecycle_refuses_second_init() {
    let mut lifecycle = Lifecycle::new("animation");
    assert!(!lifecycle.is_initialized());
    assert!(lifecycle.begin());
    lifecycle.mark_ready();
    assert!(!lifecycle.begin());
    assert!(lifecycle.is_initialized());

    lifecycle.reset();
    assert!(lifecycle.begin());
}

#[test]
fn hidden_page_stops_sparks_until_visible_again() {
    let (clock, recorder, sparks) = setup();
    sparks.start();
    clock.advance(1000);

    sparks.on_visibility(true);
    assert!(!sparks.is_running());
    clock.advance(9000);
    assert_eq!(shows(&recorder), vec![800]);

    // visible again at t=10000: next impact one delay later
    sparks.on_visibility(false);
    assert!(sparks.is_running());
    clock.advance(799);
    assert_eq!(shows(&recorder), vec![800]);
    clock.advance(1);
    assert_eq!(shows(&recorder), vec![800, 10_800]);
}

#[test]
fn resume_before_init_stays_idle() {
    let (clock, recorder, sparks) = setup();
    let mut lifecycle = Lifecycle::new("animation");

    assert!(!sparks.resume(&lifecycle));
    assert!(!sparks.is_running());
    clock.advance(10_000);
    assert!(recorder.events.borrow().is_empty());

    lifecycle.mark_ready();
    assert!(sparks.resume(&lifecycle));
    clock.advance(800);
    assert_eq!(shows(&recorder), vec![10_800]);
}
