//! # Delayed callbacks
//!
//! Toasts and the session-expiry redirect run on timers. [`Scheduler`] hides
//! where those timers come from:
//!
//! - [`BrowserScheduler`] (WASM) sleeps on the page's event loop in a local
//!   task (`gloo-timers` futures), so nothing outlives the callback,
//! - [`ManualScheduler`] keeps a virtual clock that only moves when
//!   [`ManualScheduler::advance`] is called, so tests can step through a
//!   toast's lifetime without sleeping.
//!
//! Callbacks are fire-and-forget. Dropping the returned [`TimerHandle`] leaves
//! the callback scheduled; only [`TimerHandle::cancel`] stops it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// A callback run once by a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + 'static>;

/// Runs callbacks after a delay on the current thread.
pub trait Scheduler {
    fn after(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Handle to a scheduled callback.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Prevent the callback from running if it has not run yet.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle").finish_non_exhaustive()
    }
}

/// Wrap `task` so it does nothing once the returned flag is set.
fn cancellable(task: Task) -> (Rc<Cell<bool>>, Task) {
    let cancelled = Rc::new(Cell::new(false));
    let flag = Rc::clone(&cancelled);
    let guarded: Task = Box::new(move || {
        if !flag.get() {
            task();
        }
    });
    (cancelled, guarded)
}

/// Scheduler on the browser event loop.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(target_arch = "wasm32")]
impl Scheduler for BrowserScheduler {
    fn after(&self, delay: Duration, task: Task) -> TimerHandle {
        let (cancelled, task) = cancellable(task);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            task();
        });
        TimerHandle::new(move || cancelled.set(true))
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    cancelled: Rc<Cell<bool>>,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Virtual-time scheduler for tests and headless use.
///
/// Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of callbacks still waiting to run.
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .pending
            .iter()
            .filter(|p| !p.cancelled.get())
            .count()
    }

    /// Move the clock forward by `by`, running every callback that falls due.
    ///
    /// Callbacks run in due-time order, ties in scheduling order. A callback
    /// scheduled by another callback runs in the same call if it is due before
    /// the new time.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let index = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                match index {
                    Some(i) => {
                        let pending = clock.pending.remove(i);
                        clock.now = pending.due;
                        Some(pending)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            // The clock must not be borrowed while a callback runs.
            match next {
                Some(pending) => (pending.task)(),
                None => break,
            }
        }
    }

    /// Run everything currently scheduled, however far in the future.
    pub fn run_all(&self) {
        let last_due = self.clock.borrow().pending.iter().map(|p| p.due).max();
        if let Some(due) = last_due {
            let now = self.now();
            self.advance(due.saturating_sub(now));
            // Callbacks may have scheduled more work.
            if self.pending() > 0 {
                self.run_all();
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: Task) -> TimerHandle {
        let (cancelled, task) = cancellable(task);
        let mut clock = self.clock.borrow_mut();
        let seq = clock.next_seq;
        clock.next_seq += 1;
        let due = clock.now + delay;
        clock.pending.push(Pending {
            due,
            seq,
            cancelled: Rc::clone(&cancelled),
            task,
        });
        TimerHandle::new(move || cancelled.set(true))
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}
