//! # Authenticated fetch — the pure half
//!
//! Performing an authenticated request has two halves. This module holds the
//! side-effect free one:
//!
//! - [`with_bearer`] merges `Authorization: Bearer <token>` into the request
//!   options when a token is present,
//! - [`classify_status`] maps a response status to an [`AuthDecision`].
//!
//! The effectful half (toast, session clear, delayed redirect) lives in the UI
//! crate's `AuthClient`, which drives an [`HttpClient`] and acts on the
//! decision. Only HTTP 401 is special-cased; every other status, 403 and 5xx
//! included, is handed back to the caller untouched.

use std::future::Future;

use crate::error::FetchError;
use crate::request::{RequestOptions, Response};

pub const AUTHORIZATION: &str = "Authorization";

/// Async trait for the network primitive.
pub trait HttpClient {
    /// Perform one request. Any response, whatever its status, is `Ok`.
    fn send(
        &self,
        url: &str,
        options: RequestOptions,
    ) -> impl Future<Output = Result<Response, FetchError>>;
}

/// What the auth layer should do with a response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthDecision {
    /// Hand the response to the caller as-is.
    PassThrough,
    /// The held credential is no longer valid.
    SessionExpired,
}

/// Decide how a response with `status` is handled.
pub fn classify_status(status: u16) -> AuthDecision {
    if status == 401 {
        AuthDecision::SessionExpired
    } else {
        AuthDecision::PassThrough
    }
}

/// Attach the bearer token to `options` if there is one.
pub fn with_bearer(mut options: RequestOptions, token: Option<&str>) -> RequestOptions {
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        options.set_header(AUTHORIZATION, format!("Bearer {token}"));
    }
    options
}
