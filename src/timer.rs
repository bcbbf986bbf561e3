use crate::core::scheduler::{OnceTask, Scheduler, Task};
use gloo::timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;

/// [`Scheduler`] on browser timers: a `setTimeout` for the first run that then
/// hands over to a `setInterval`. Dropping a gloo handle clears the timer.
#[derive(Default)]
pub struct WebScheduler {
    state: Rc<RefCell<TimerState>>,
}

#[derive(Default)]
struct TimerState {
    kickoff: Option<Timeout>,
    interval: Option<Interval>,
    pending: bool,
}

impl Scheduler for WebScheduler {
    fn start(&mut self, delay_ms: u32, period_ms: u32, task: Task) {
        self.stop();
        let task = Rc::new(RefCell::new(task));
        let state = Rc::downgrade(&self.state);
        let kickoff = Timeout::new(delay_ms, move || {
            (*task.borrow_mut())();
            let Some(state) = state.upgrade() else {
                return;
            };
            let every = task.clone();
            let interval = Interval::new(period_ms, move || (*every.borrow_mut())());
            // the fired kickoff handle stays in place; it is dropped on stop
            let mut st = state.borrow_mut();
            st.pending = false;
            st.interval = Some(interval);
        });
        let mut st = self.state.borrow_mut();
        st.kickoff = Some(kickoff);
        st.pending = true;
    }

    fn stop(&mut self) {
        let (kickoff, interval) = {
            let mut st = self.state.borrow_mut();
            st.pending = false;
            (st.kickoff.take(), st.interval.take())
        };
        drop(kickoff);
        drop(interval);
    }

    fn is_running(&self) -> bool {
        let st = self.state.borrow();
        st.pending || st.interval.is_some()
    }

    fn defer(&mut self, delay_ms: u32, task: OnceTask) {
        _ = Timeout::new(delay_ms, task).forget();
    }
}

impl Drop for WebScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
