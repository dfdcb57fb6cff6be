use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

struct Task {
    due: u64,
    cancelled: Rc<Cell<bool>>,
    run: Box<dyn FnOnce()>,
}

/// Manual clock: tasks run only when `advance` passes their due time.
#[derive(Clone, Default)]
struct ManualScheduler {
    now: Rc<Cell<u64>>,
    tasks: Rc<RefCell<Vec<Task>>>,
}

struct ManualHandle(Rc<Cell<bool>>);

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.tasks.borrow_mut().push(Task {
            due: self.now.get() + u64::from(delay_ms),
            cancelled: Rc::clone(&cancelled),
            run: task,
        });
        ManualHandle(cancelled)
    }
}

impl ManualScheduler {
    fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            let next = {
                let mut tasks = self.tasks.borrow_mut();
                tasks.retain(|t| !t.cancelled.get());
                let idx = tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| t.due)
                    .map(|(i, _)| i);
                idx.map(|i| tasks.remove(i))
            };
            let Some(task) = next else {
                break;
            };
            self.now.set(task.due);
            (task.run)();
        }
        self.now.set(target);
    }
}

fn recorder() -> (Rc<RefCell<Vec<(u64, u32)>>>, impl Fn((u64, u32)) + 'static) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    (calls, move |entry| sink.borrow_mut().push(entry))
}

#[test]
fn burst_runs_once_after_last_call_with_last_args() {
    let scheduler = ManualScheduler::default();
    let clock = Rc::clone(&scheduler.now);
    let (calls, sink) = recorder();
    let debounced = Debounced::new(scheduler.clone(), 100, move |arg: u32| sink((clock.get(), arg)));

    for arg in 1..=5 {
        debounced.call(arg);
        scheduler.advance(50);
    }
    // Last call at t=200; nothing has fired yet at t=250.
    assert!(calls.borrow().is_empty());

    scheduler.advance(50);
    assert_eq!(*calls.borrow(), vec![(300, 5)]);

    scheduler.advance(1_000);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn calls_spaced_beyond_wait_each_fire() {
    let scheduler = ManualScheduler::default();
    let (calls, sink) = recorder();
    let debounced = Debounced::new(scheduler.clone(), 100, move |arg: u32| sink((0, arg)));

    debounced.call(1);
    scheduler.advance(150);
    debounced.call(2);
    scheduler.advance(150);

    let args: Vec<u32> = calls.borrow().iter().map(|(_, a)| *a).collect();
    assert_eq!(args, vec![1, 2]);
}

#[test]
fn no_leading_edge_call() {
    let scheduler = ManualScheduler::default();
    let (calls, sink) = recorder();
    let debounced = Debounced::new(scheduler.clone(), 100, move |arg: u32| sink((0, arg)));

    debounced.call(1);
    scheduler.advance(99);

    assert!(calls.borrow().is_empty());
}

#[test]
fn cancel_drops_pending_run() {
    let scheduler = ManualScheduler::default();
    let (calls, sink) = recorder();
    let debounced = Debounced::new(scheduler.clone(), 100, move |arg: u32| sink((0, arg)));

    debounced.call(1);
    debounced.cancel();
    scheduler.advance(500);

    assert!(calls.borrow().is_empty());
}
