//! # localStorage key/value store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. It reads and writes the window's `localStorage` through
//! [`web_sys::Storage`], so values survive reloads and are scoped to the page's
//! origin.
//!
//! ## Key scoping
//!
//! An optional prefix namespaces every key (`"<prefix>:<key>"`). The default
//! store uses no prefix, which keeps the plain `device_id` / `auth_token` /
//! `user_role` / `user_id` keys other pages of the same origin read.
//!
//! ## Error handling
//!
//! `localStorage` may be missing (privacy modes, sandboxed iframes) and writes
//! may hit the quota. Reads degrade to `None`; failed writes are logged and
//! dropped.

use web_sys::Storage;

use crate::kv::{scoped_key, KeyValueStore};

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore {
    prefix: Option<String>,
}

impl LocalStorageStore {
    /// Unprefixed store over the origin's `localStorage`.
    pub fn new() -> Self {
        Self::with_prefix(None)
    }

    /// Store whose keys are namespaced by `prefix`.
    ///
    /// - `Some("tenant-a")` → key `"tenant-a:auth_token"`
    /// - `None` → key `"auth_token"`
    pub fn with_prefix(prefix: Option<&str>) -> Self {
        Self {
            prefix: prefix.map(str::to_string),
        }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn scoped(&self, key: &str) -> String {
        scoped_key(self.prefix.as_deref(), key)
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(&self.scoped(key)).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, dropping write of {}", key);
            return;
        };
        if storage.set_item(&self.scoped(key), value).is_err() {
            tracing::warn!("localStorage rejected write of {}", key);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        if storage.remove_item(&self.scoped(key)).is_err() {
            tracing::warn!("localStorage rejected removal of {}", key);
        }
    }
}
