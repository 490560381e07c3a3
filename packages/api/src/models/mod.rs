//! Wire payloads exchanged with the backend.

mod login;

pub use login::{login_request, LoginRequest, LoginResponse};
