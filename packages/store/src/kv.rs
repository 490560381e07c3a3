//! # Key/value storage abstraction
//!
//! Everything the client persists (device id, auth token, role, user id) is a
//! string value under a string key. [`KeyValueStore`] is the seam between that
//! logic and the actual persistence layer, so the same helpers run against the
//! browser's `localStorage` ([`crate::LocalStorageStore`]), a directory on disk
//! ([`crate::FileStore`]) or an in-memory map ([`crate::MemoryStore`]).
//!
//! Operations are single-key only. There is no transaction spanning several
//! keys, so callers that touch more than one key (e.g. clearing a session) can
//! be observed half-way through.
//!
//! Backends never fail loudly: a read that cannot be served is `None`, a write
//! that cannot be performed is logged and dropped.

/// Key under which `key` is stored when a backend is namespaced by `prefix`.
///
/// - `Some("tenant-a")` → `"tenant-a:auth_token"`
/// - `None` → `"auth_token"`
pub fn scoped_key(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}:{key}"),
        None => key.to_string(),
    }
}

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);

    /// Whether a value is stored under `key`.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_key() {
        assert_eq!(scoped_key(Some("tenant-a"), "auth_token"), "tenant-a:auth_token");
        assert_eq!(scoped_key(None, "auth_token"), "auth_token");
    }
}
