//! # Client configuration
//!
//! [`ClientConfig`] gathers every knob of the client helpers: which storage
//! keys hold the device id and session, how long a toast lives, and where the
//! browser goes when the session expires. It can be embedded in a page as TOML
//! or built in code; a missing or empty document is equivalent to the default
//! configuration.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! device_id = "device_id"
//! auth_token = "auth_token"
//! user_role = "user_role"
//! user_id = "user_id"
//!
//! [toast]
//! show_delay_ms = 10     # delay before the "show" class is added
//! visible_ms = 3000      # time spent shown
//! fade_ms = 300          # fade-out before removal
//!
//! [auth]
//! login_page = "login.html"
//! redirect_delay_ms = 1500
//! session_expired_message = "Session expired. Please login again."
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Storage key of the persisted device identifier.
pub const DEVICE_ID_KEY: &str = "device_id";
/// Storage key of the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key of the logged-in user's role.
pub const USER_ROLE_KEY: &str = "user_role";
/// Storage key of the logged-in user's id.
pub const USER_ID_KEY: &str = "user_id";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize client config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub storage: StorageKeys,
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Names of the storage entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub device_id: String,
    pub auth_token: String,
    pub user_role: String,
    pub user_id: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            device_id: DEVICE_ID_KEY.to_string(),
            auth_token: AUTH_TOKEN_KEY.to_string(),
            user_role: USER_ROLE_KEY.to_string(),
            user_id: USER_ID_KEY.to_string(),
        }
    }
}

/// Toast timings, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub show_delay_ms: u64,
    pub visible_ms: u64,
    pub fade_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 10,
            visible_ms: 3000,
            fade_ms: 300,
        }
    }
}

impl ToastConfig {
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    pub fn visible(&self) -> Duration {
        Duration::from_millis(self.visible_ms)
    }

    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Time from creation until the element is removed.
    pub fn lifetime(&self) -> Duration {
        self.visible() + self.fade()
    }
}

/// Session-expiry behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Page the browser is sent to once the session has expired.
    pub login_page: String,
    pub redirect_delay_ms: u64,
    pub session_expired_message: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_page: "login.html".to_string(),
            redirect_delay_ms: 1500,
            session_expired_message: "Session expired. Please login again.".to_string(),
        }
    }
}

impl AuthConfig {
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

impl ClientConfig {
    /// Builder method to change the login page.
    pub fn with_login_page(mut self, page: impl Into<String>) -> Self {
        self.auth.login_page = page.into();
        self
    }

    /// Builder method to replace the toast timings.
    pub fn with_toast_timings(mut self, toast: ToastConfig) -> Self {
        self.toast = toast;
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
