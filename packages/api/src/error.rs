/// Failure outcomes of a request made through this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered 401. The session has already been cleared and no
    /// usable response exists.
    #[error("Unauthorized")]
    Unauthorized,
    /// The request never produced a response (network, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    #[error("cannot encode request body: {0}")]
    Encode(String),
    #[error("cannot decode response body: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FetchError::Unauthorized)
    }
}
