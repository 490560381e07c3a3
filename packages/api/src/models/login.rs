//! # Login payloads
//!
//! The backend's `/login` endpoint takes a [`LoginRequest`] and, on success,
//! answers with a [`LoginResponse`] carrying a JWT plus the user's role and id.
//! The `device_hash` sent with the request is the client's persisted device id;
//! the server refuses logins from a device other than the one registered.
//!
//! [`login_request`] builds the ready-to-send POST options so callers only
//! have to supply the endpoint URL.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::request::RequestOptions;

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
    pub device_hash: String,
}

/// Successful answer of `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub token: String,
    pub role: String,
    pub user_id: String,
}

/// Build the options of a login request for `user_id` from `device_id`.
pub fn login_request(
    user_id: &str,
    password: &str,
    device_id: &str,
) -> Result<RequestOptions, FetchError> {
    RequestOptions::post().json(&LoginRequest {
        user_id: user_id.to_string(),
        password: password.to_string(),
        device_hash: device_id.to_string(),
    })
}
