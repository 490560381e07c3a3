//! Browser wiring of the client helpers.
//!
//! Builds the [`AuthClient`] and [`Notifier`] a page uses, backed by
//! `localStorage`, real DOM nodes, the page's event loop and
//! `window.location`.

use api::{AuthSession, ReqwestClient};
use store::{ClientConfig, LocalStorageStore};

use crate::client::AuthClient;
use crate::dom_sink::DomSink;
use crate::navigation::BrowserNavigator;
use crate::scheduler::BrowserScheduler;
use crate::toast::Notifier;

pub type BrowserNotifier = Notifier<DomSink, BrowserScheduler>;

pub type BrowserAuthClient =
    AuthClient<ReqwestClient, LocalStorageStore, DomSink, BrowserScheduler, BrowserNavigator>;

/// Notifier rendering into the page's `#toast-container`.
pub fn browser_notifier(config: &ClientConfig) -> BrowserNotifier {
    Notifier::new(DomSink::new(), BrowserScheduler).with_timings(config.toast)
}

/// Authenticated client for the current page.
///
/// `base_url` is prepended to relative request URLs. Without one, the page's
/// own origin is used.
pub fn browser_client(config: &ClientConfig, base_url: Option<&str>) -> BrowserAuthClient {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    let http = match base_url.map(str::to_string).or(origin) {
        Some(base) => ReqwestClient::new().with_base_url(base),
        None => ReqwestClient::new(),
    };
    let session = AuthSession::with_keys(LocalStorageStore::new(), config.storage.clone());
    AuthClient::new(http, session, browser_notifier(config), BrowserNavigator)
        .with_config(config.auth.clone())
}

/// The page's device id, created on first call.
pub fn browser_device_id(config: &ClientConfig) -> String {
    store::device::get_or_create_device_id_at(&LocalStorageStore::new(), &config.storage.device_id)
}
