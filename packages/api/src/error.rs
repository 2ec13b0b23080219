//! Errors surfaced by the fetch layer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// No session token cookie; nothing was sent.
    #[error("not signed in: no session token cookie")]
    Unauthenticated,

    /// The server answered 401 and the browser has already been sent to the login page.
    #[error("session expired")]
    SessionExpired,

    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success status from one of the typed client calls.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}
