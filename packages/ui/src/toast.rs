//! # Toast notifications
//!
//! A toast is a short message shown in a corner of the page that dismisses
//! itself. Every [`Notifier::notify`] call adds one new element to the
//! notification container and drives it through its lifecycle:
//!
//! | Time after `notify` | Phase | Element |
//! |---------------------|-------|---------|
//! | 0 | [`ToastPhase::Created`] | appended with classes `toast toast-<severity>` |
//! | `show_delay` (10 ms) | [`ToastPhase::Shown`] | gains `show`, the CSS transition runs |
//! | `visible` (3000 ms) | [`ToastPhase::Hiding`] | loses `show`, fades out |
//! | `visible + fade` (3300 ms) | [`ToastPhase::Removed`] | removed from the container |
//!
//! Concurrent toasts stack in call order with independent timers. There is no
//! deduplication, no rate limit and no cancellation.
//!
//! ## Sinks
//!
//! The container is a [`NotificationSink`] created once at startup and handed
//! to the [`Notifier`]:
//!
//! - `DomSink` (WASM) writes real DOM nodes under `#toast-container`,
//! - [`crate::SignalSink`] feeds a Dioxus signal rendered by [`crate::ToastHost`],
//! - [`MemorySink`] records toasts for tests.
//!
//! Sink operations on an element that no longer exists return `false` and do
//! nothing.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use store::ToastConfig;

use crate::scheduler::Scheduler;

/// DOM id of the notification container.
pub const CONTAINER_ID: &str = "toast-container";
/// Class toggled to trigger the show/hide transition.
pub const SHOW_CLASS: &str = "show";

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Severity-specific class, e.g. `toast-error`.
    pub fn class_name(&self) -> &'static str {
        match self {
            Severity::Success => "toast-success",
            Severity::Error => "toast-error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Created,
    Shown,
    Hiding,
    Removed,
}

/// Identifies a toast within its notifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn new(id: ToastId, message: &str, severity: Severity) -> Self {
        Self {
            id,
            message: message.to_string(),
            severity,
            phase: ToastPhase::Created,
        }
    }

    /// Full class attribute for the element in its current phase.
    pub fn class_name(&self) -> String {
        match self.phase {
            ToastPhase::Shown => format!("toast {} {}", self.severity.class_name(), SHOW_CLASS),
            _ => format!("toast {}", self.severity.class_name()),
        }
    }

    pub fn is_shown(&self) -> bool {
        self.phase == ToastPhase::Shown
    }
}

/// The container toasts are rendered into.
pub trait NotificationSink {
    /// Append a new element after any existing ones.
    fn append(&self, toast: &Toast);

    /// Move an element to `phase`. Returns `false` if it is gone.
    fn update(&self, id: ToastId, phase: ToastPhase) -> bool;

    /// Remove an element. Returns `false` if it is already gone.
    fn remove(&self, id: ToastId) -> bool;
}

impl<K: NotificationSink + ?Sized> NotificationSink for Rc<K> {
    fn append(&self, toast: &Toast) {
        (**self).append(toast)
    }

    fn update(&self, id: ToastId, phase: ToastPhase) -> bool {
        (**self).update(id, phase)
    }

    fn remove(&self, id: ToastId) -> bool {
        (**self).remove(id)
    }
}

/// Move the toast `id` in `list` to `phase`. Returns `false` if it is absent.
pub fn set_phase(list: &mut [Toast], id: ToastId, phase: ToastPhase) -> bool {
    match list.iter_mut().find(|t| t.id == id) {
        Some(toast) => {
            toast.phase = phase;
            true
        }
        None => false,
    }
}

/// Drop the toast `id` from `list`, keeping the order of the rest. Returns
/// `false` if it was absent.
pub fn remove_toast(list: &mut Vec<Toast>, id: ToastId) -> bool {
    let before = list.len();
    list.retain(|t| t.id != id);
    list.len() != before
}

/// Shows toasts on a sink, timing them with a scheduler.
pub struct Notifier<K, T> {
    sink: Rc<K>,
    scheduler: Rc<T>,
    timings: ToastConfig,
    next_id: Rc<Cell<u64>>,
}

impl<K, T> Clone for Notifier<K, T> {
    fn clone(&self) -> Self {
        Self {
            sink: Rc::clone(&self.sink),
            scheduler: Rc::clone(&self.scheduler),
            timings: self.timings,
            next_id: Rc::clone(&self.next_id),
        }
    }
}

impl<K, T> Notifier<K, T>
where
    K: NotificationSink + 'static,
    T: Scheduler + 'static,
{
    pub fn new(sink: K, scheduler: T) -> Self {
        Self {
            sink: Rc::new(sink),
            scheduler: Rc::new(scheduler),
            timings: ToastConfig::default(),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    /// Builder method to replace the default timings.
    pub fn with_timings(mut self, timings: ToastConfig) -> Self {
        self.timings = timings;
        self
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn scheduler(&self) -> &Rc<T> {
        &self.scheduler
    }

    pub fn success(&self, message: &str) {
        self.notify(message, Severity::Success);
    }

    pub fn error(&self, message: &str) {
        self.notify(message, Severity::Error);
    }

    /// Show `message` as a new toast and schedule its reveal and removal.
    pub fn notify(&self, message: &str, severity: Severity) {
        let id = ToastId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        self.sink.append(&Toast::new(id, message, severity));
        tracing::debug!("{} ({}) created: {}", id, severity.as_str(), message);

        let sink = Rc::clone(&self.sink);
        self.scheduler.after(
            self.timings.show_delay(),
            Box::new(move || {
                if !sink.update(id, ToastPhase::Shown) {
                    tracing::trace!("{} gone before it was shown", id);
                }
            }),
        );

        let sink = Rc::clone(&self.sink);
        let scheduler = Rc::clone(&self.scheduler);
        let fade = self.timings.fade();
        self.scheduler.after(
            self.timings.visible(),
            Box::new(move || {
                if !sink.update(id, ToastPhase::Hiding) {
                    tracing::trace!("{} gone before it was hidden", id);
                }
                scheduler.after(
                    fade,
                    Box::new(move || {
                        if sink.remove(id) {
                            tracing::debug!("{} removed", id);
                        } else {
                            tracing::trace!("{} already removed", id);
                        }
                    }),
                );
            }),
        );
    }
}

/// Recording sink for tests and headless use. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    live: Rc<RefCell<Vec<Toast>>>,
    appended: Rc<RefCell<Vec<Toast>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts currently in the container, oldest first.
    pub fn toasts(&self) -> Vec<Toast> {
        self.live.borrow().clone()
    }

    /// Every toast ever appended, as it was at creation.
    pub fn appended(&self) -> Vec<Toast> {
        self.appended.borrow().clone()
    }

    /// Drop every element, as if the container had been torn down.
    pub fn clear(&self) {
        self.live.borrow_mut().clear();
    }
}

impl NotificationSink for MemorySink {
    fn append(&self, toast: &Toast) {
        self.live.borrow_mut().push(toast.clone());
        self.appended.borrow_mut().push(toast.clone());
    }

    fn update(&self, id: ToastId, phase: ToastPhase) -> bool {
        set_phase(&mut self.live.borrow_mut(), id, phase)
    }

    fn remove(&self, id: ToastId) -> bool {
        remove_toast(&mut self.live.borrow_mut(), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::time::Duration;

    fn setup() -> (Notifier<MemorySink, ManualScheduler>, MemorySink, ManualScheduler) {
        let sink = MemorySink::new();
        let scheduler = ManualScheduler::new();
        let notifier = Notifier::new(sink.clone(), scheduler.clone());
        (notifier, sink, scheduler)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_toast_lifecycle() {
        let (notifier, sink, scheduler) = setup();

        notifier.success("Report submitted");
        let toasts = sink.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Report submitted");
        assert_eq!(toasts[0].phase, ToastPhase::Created);
        assert_eq!(toasts[0].class_name(), "toast toast-success");

        scheduler.advance(ms(10));
        assert!(sink.toasts()[0].is_shown());
        assert_eq!(sink.toasts()[0].class_name(), "toast toast-success show");

        scheduler.advance(ms(2990));
        assert_eq!(sink.toasts()[0].phase, ToastPhase::Hiding);
        assert_eq!(sink.toasts()[0].class_name(), "toast toast-success");

        scheduler.advance(ms(299));
        assert_eq!(sink.toasts().len(), 1);

        scheduler.advance(ms(1));
        assert!(sink.toasts().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_toasts_stack_in_call_order() {
        let (notifier, sink, scheduler) = setup();

        notifier.success("first");
        scheduler.advance(ms(1000));
        notifier.error("second");
        notifier.error("second");

        let toasts = sink.toasts();
        assert_eq!(toasts.len(), 3);
        assert_eq!(toasts[0].message, "first");
        assert_eq!(toasts[1].severity, Severity::Error);
        assert_eq!(toasts[1].class_name(), "toast toast-error");
        assert_ne!(toasts[1].id, toasts[2].id);

        // First one expires on its own schedule
        scheduler.advance(ms(2300));
        let toasts = sink.toasts();
        assert_eq!(toasts.len(), 2);
        assert!(toasts.iter().all(|t| t.message == "second"));

        scheduler.advance(ms(1000));
        assert!(sink.toasts().is_empty());
        assert_eq!(sink.appended().len(), 3);
    }

    #[test]
    fn test_torn_down_container_is_tolerated() {
        let (notifier, sink, scheduler) = setup();

        notifier.error("Network error");
        sink.clear();

        scheduler.run_all();
        assert!(sink.toasts().is_empty());
        assert_eq!(sink.appended().len(), 1);
    }

    #[test]
    fn test_custom_timings() {
        let (notifier, sink, scheduler) = setup();
        let notifier = notifier.with_timings(ToastConfig {
            show_delay_ms: 0,
            visible_ms: 100,
            fade_ms: 50,
        });

        notifier.notify("quick", Severity::Success);
        scheduler.advance(ms(0));
        assert!(sink.toasts()[0].is_shown());

        scheduler.advance(ms(150));
        assert!(sink.toasts().is_empty());
    }

    #[test]
    fn test_default_severity_is_success() {
        assert_eq!(Severity::default(), Severity::Success);
        assert_eq!(Severity::Error.as_str(), "error");
        assert_eq!(ToastId(7).to_string(), "toast-7");
    }

    #[test]
    fn test_list_helpers() {
        let mut list = vec![
            Toast::new(ToastId(0), "saved", Severity::Success),
            Toast::new(ToastId(1), "rejected", Severity::Error),
            Toast::new(ToastId(2), "saved again", Severity::Success),
        ];

        assert!(set_phase(&mut list, ToastId(1), ToastPhase::Shown));
        assert!(list[1].is_shown());
        assert!(!set_phase(&mut list, ToastId(9), ToastPhase::Shown));

        assert!(remove_toast(&mut list, ToastId(1)));
        assert!(!remove_toast(&mut list, ToastId(1)));
        let ids: Vec<ToastId> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![ToastId(0), ToastId(2)]);
        assert!(!set_phase(&mut list, ToastId(1), ToastPhase::Hiding));
    }
}
