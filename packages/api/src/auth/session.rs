//! # Auth session helpers
//!
//! The client session is three independent storage entries: the bearer token,
//! the user's role and the user's id. [`AuthSession`] is a set of plain
//! accessors over them; it holds no state of its own.
//!
//! Clearing removes the entries one at a time. It is not atomic, so a reader
//! running between two removals can see a half-cleared session. Only the token
//! decides whether the user is logged in.

use store::{KeyValueStore, StorageKeys};

use crate::models::LoginResponse;

/// Accessors for the persisted auth session.
#[derive(Clone, Debug)]
pub struct AuthSession<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> AuthSession<S> {
    /// Session over `store` with the default key names.
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Overwrite the stored token.
    pub fn set_token(&self, token: &str) {
        self.store.set(&self.keys.auth_token, token);
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(&self.keys.auth_token)
    }

    pub fn role(&self) -> Option<String> {
        self.store.get(&self.keys.user_role)
    }

    pub fn user_id(&self) -> Option<String> {
        self.store.get(&self.keys.user_id)
    }

    /// True iff a non-empty token is stored. The token itself is not checked.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Persist the outcome of a successful login.
    pub fn establish(&self, login: &LoginResponse) {
        self.set_token(&login.token);
        self.store.set(&self.keys.user_role, &login.role);
        self.store.set(&self.keys.user_id, &login.user_id);
        tracing::info!("Session established for {} ({})", login.user_id, login.role);
    }

    /// Remove token, role and user id.
    pub fn clear(&self) {
        self.store.remove(&self.keys.auth_token);
        self.store.remove(&self.keys.user_role);
        self.store.remove(&self.keys.user_id);
        tracing::info!("Session cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    fn login() -> LoginResponse {
        LoginResponse {
            message: Some("Logged in".to_string()),
            token: "jwt-token".to_string(),
            role: "Admin".to_string(),
            user_id: "admin@example.com".to_string(),
        }
    }

    #[test]
    fn test_logged_in_follows_token() {
        let session = AuthSession::new(MemoryStore::new());
        assert!(!session.is_logged_in());

        session.set_token("x");
        assert!(session.is_logged_in());
        assert_eq!(session.token().as_deref(), Some("x"));

        session.clear();
        assert!(!session.is_logged_in());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_set_token_overwrites() {
        let session = AuthSession::new(MemoryStore::new());
        session.set_token("first");
        session.set_token("second");
        assert_eq!(session.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_empty_token_is_not_logged_in() {
        let session = AuthSession::new(MemoryStore::new());
        session.set_token("");
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_establish_and_clear_all_fields() {
        let store = MemoryStore::new();
        store.set("device_id", "device_abc_1");
        let session = AuthSession::new(store.clone());

        session.establish(&login());
        assert_eq!(store.get("auth_token").as_deref(), Some("jwt-token"));
        assert_eq!(session.role().as_deref(), Some("Admin"));
        assert_eq!(session.user_id().as_deref(), Some("admin@example.com"));

        session.clear();
        assert!(session.role().is_none());
        assert!(session.user_id().is_none());

        // Device identity survives a logout
        assert_eq!(store.get("device_id").as_deref(), Some("device_abc_1"));
    }

    #[test]
    fn test_custom_keys() {
        let store = MemoryStore::new();
        let keys = StorageKeys {
            auth_token: "portal_token".to_string(),
            ..StorageKeys::default()
        };
        let session = AuthSession::with_keys(store.clone(), keys);

        session.set_token("abc");
        assert_eq!(store.get("portal_token").as_deref(), Some("abc"));
        assert!(store.get("auth_token").is_none());
    }
}
