//! Client-side authentication state.

mod session;

pub use session::AuthSession;
