//! Toast container for Dioxus-rendered pages.

use dioxus::prelude::*;

use crate::toast::{
    remove_toast, set_phase, NotificationSink, Toast, ToastId, ToastPhase, CONTAINER_ID,
};

/// Sink that keeps toasts in a signal rendered by [`ToastHost`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalSink {
    toasts: Signal<Vec<Toast>>,
}

impl SignalSink {
    pub fn new(toasts: Signal<Vec<Toast>>) -> Self {
        Self { toasts }
    }

    /// Current toasts, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.read().clone()
    }
}

impl NotificationSink for SignalSink {
    fn append(&self, toast: &Toast) {
        let mut toasts = self.toasts;
        toasts.write().push(toast.clone());
    }

    fn update(&self, id: ToastId, phase: ToastPhase) -> bool {
        let mut toasts = self.toasts;
        let mut list = toasts.write();
        set_phase(&mut list, id, phase)
    }

    fn remove(&self, id: ToastId) -> bool {
        let mut toasts = self.toasts;
        let mut list = toasts.write();
        remove_toast(&mut list, id)
    }
}

/// Create the signal-backed sink for the current component.
pub fn use_toast_sink() -> SignalSink {
    let toasts = use_signal(Vec::new);
    SignalSink::new(toasts)
}

/// Renders the toasts of `sink` inside `#toast-container`.
#[component]
pub fn ToastHost(sink: SignalSink) -> Element {
    let toasts = sink.snapshot();

    rsx! {
        div {
            id: CONTAINER_ID,
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "{toast.class_name()}",
                    "{toast.message}"
                }
            }
        }
    }
}
