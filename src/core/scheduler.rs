/// Repeating task run by a [`Scheduler`].
pub type Task = Box<dyn FnMut()>;

/// One-shot task run by [`Scheduler::defer`].
pub type OnceTask = Box<dyn FnOnce()>;

/// Timer abstraction behind the spark loop.
///
/// The browser implementation sits on `setTimeout`/`setInterval`; tests drive
/// a virtual clock instead. Implementations must not hold internal borrows
/// while running a task, since tasks schedule further work.
pub trait Scheduler {
    /// Run `task` once after `delay_ms`, then every `period_ms` until
    /// [`stop`](Scheduler::stop). Replaces a loop that is already running.
    fn start(&mut self, delay_ms: u32, period_ms: u32, task: Task);

    /// Cancel the loop, including a first run that has not fired yet.
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Fire-and-forget timeout; not affected by `stop`.
    fn defer(&mut self, delay_ms: u32, task: OnceTask);
}
