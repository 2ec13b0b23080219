use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use super::{CookieSource, Credentials, FetchOptions, FetchResponse, Transport};
use crate::error::FetchError;

/// Name of the readable cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "tw_token";

/// Fetch wrapper for the readable-cookie session.
///
/// Caller headers are kept; `Authorization` and `Content-Type` are always
/// overwritten. Status codes, 401 included, are left to the caller.
#[derive(Clone, Debug)]
pub struct BearerFetch<T, C> {
    transport: T,
    cookies: C,
    cookie_name: String,
}

impl<T: Transport, C: CookieSource> BearerFetch<T, C> {
    pub fn new(transport: T, cookies: C) -> Self {
        Self {
            transport,
            cookies,
            cookie_name: TOKEN_COOKIE.to_string(),
        }
    }

    /// Read the token from a different cookie.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub async fn fetch(
        &self,
        url: &str,
        options: FetchOptions,
    ) -> Result<FetchResponse, FetchError> {
        let Some(token) = self
            .cookies
            .cookie(&self.cookie_name)
            .filter(|t| !t.is_empty())
        else {
            tracing::warn!("No {} cookie; not calling {url}", self.cookie_name);
            return Err(FetchError::Unauthenticated);
        };

        // A token that is not a valid header value cannot authenticate anything.
        let authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| FetchError::Unauthenticated)?;

        let mut request = options.into_request(url, Credentials::SameOrigin);
        request.headers.insert(AUTHORIZATION, authorization);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        self.transport.send(request).await
    }
}
