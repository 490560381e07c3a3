//! This crate contains the browser-side helpers shared by every page:
//! toasts, navigation, timers and the authenticated request wrapper.

pub mod client;
pub mod navigation;
pub mod scheduler;
pub mod toast;

mod toast_host;
pub use toast_host::{use_toast_sink, SignalSink, ToastHost};

#[cfg(target_arch = "wasm32")]
mod dom_sink;
#[cfg(target_arch = "wasm32")]
pub use dom_sink::DomSink;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod platform;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use platform::{
    browser_client, browser_device_id, browser_notifier, BrowserAuthClient, BrowserNotifier,
};

pub use client::AuthClient;
pub use navigation::{Navigator, RecordingNavigator};
#[cfg(target_arch = "wasm32")]
pub use navigation::BrowserNavigator;
pub use scheduler::{ManualScheduler, Scheduler, Task, TimerHandle};
#[cfg(target_arch = "wasm32")]
pub use scheduler::BrowserScheduler;
pub use toast::{MemorySink, NotificationSink, Notifier, Severity, Toast, ToastId, ToastPhase};
