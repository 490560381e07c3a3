//! # API crate — talking to the FieldReport backend
//!
//! Everything the browser client needs to make requests on behalf of a logged-in
//! user, minus the UI side effects.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | — | [`AuthSession`]: token, role and user id accessors over a [`store::KeyValueStore`] |
//! | [`fetch`] | — | [`HttpClient`] trait, bearer header merge, 401 classification |
//! | [`http`] | `http` | [`ReqwestClient`], the production [`HttpClient`] |
//! | [`models`] | — | Login request/response payloads |
//! | [`request`] | — | [`RequestOptions`] and [`Response`] |
//!
//! The effectful wrapper that toasts, clears the session and redirects on a
//! 401 is `ui::AuthClient`, built on top of this crate.

pub mod auth;
mod error;
pub mod fetch;
#[cfg(feature = "http")]
pub mod http;
pub mod models;
pub mod request;

pub use auth::AuthSession;
pub use error::FetchError;
pub use fetch::{classify_status, with_bearer, AuthDecision, HttpClient};
#[cfg(feature = "http")]
pub use http::ReqwestClient;
pub use models::{login_request, LoginRequest, LoginResponse};
pub use request::{Method, RequestOptions, Response};
