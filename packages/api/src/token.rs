//! Leftovers of the token-based session interface.
//!
//! Sessions now live in an http-only cookie that client code cannot read, so
//! there is no token to hand out. These functions keep their old signatures for
//! callers that still import them and do nothing.

/// Always `None`.
#[deprecated(note = "the session cookie is http-only; use `CredentialedFetch`")]
pub fn get_auth_token() -> Option<String> {
    None
}

/// Does nothing.
#[deprecated(note = "the session cookie is set by the server")]
pub fn set_auth_token(_token: &str) {}

/// Does nothing.
#[deprecated(note = "the session cookie is cleared by `/api/auth/logout`")]
pub fn clear_auth_token() {}
