//! Trailing-edge debounce.
//!
//! Each call drops the pending timer handle (which cancels it) and schedules
//! a fresh one carrying the latest arguments, so the wrapped function runs
//! once, `wait_ms` after the last call in a burst.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Runs a task after a delay. Dropping the returned handle cancels it.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// A debounced callable; see [`Debounced::call`].
pub struct Debounced<A, S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: RefCell<Option<S::Handle>>,
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    pub fn new(scheduler: S, wait_ms: u32, callback: impl Fn(A) + 'static) -> Self {
        Self { scheduler, wait_ms, callback: Rc::new(callback), pending: RefCell::new(None) }
    }

    /// Cancel any pending run and schedule one with `args`.
    pub fn call(&self, args: A) {
        drop(self.pending.borrow_mut().take());
        let callback = Rc::clone(&self.callback);
        let handle = self.scheduler.schedule(self.wait_ms, Box::new(move || callback(args)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Cancel the pending run, if any.
    pub fn cancel(&self) {
        drop(self.pending.borrow_mut().take());
    }
}

/// `setTimeout`-backed scheduler.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "browser")]
impl Scheduler for TimeoutScheduler {
    type Handle = gloo_timers::callback::Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        gloo_timers::callback::Timeout::new(delay_ms, task)
    }
}

/// Debounce `callback` by `wait_ms` on the browser event loop.
#[cfg(feature = "browser")]
pub fn debounce<A: 'static>(callback: impl Fn(A) + 'static, wait_ms: u32) -> Debounced<A, TimeoutScheduler> {
    Debounced::new(TimeoutScheduler, wait_ms, callback)
}
