//! # Fetch layer
//!
//! Two wrappers sit on top of a [`Transport`], one per session strategy:
//!
//! | Wrapper | Session | On 401 |
//! |---------|---------|--------|
//! | [`CredentialedFetch`] | http-only cookie, sent by the browser with `credentials: include` | redirects to `/login?expired=1`, returns [`FetchError::SessionExpired`] |
//! | [`BearerFetch`] | readable `tw_token` cookie, sent as `Authorization: Bearer` | returns the response to the caller |
//!
//! They are independent. Neither falls back to the other.
//!
//! The side effects a browser would perform go through small seams so the
//! wrappers can be exercised off-browser:
//!
//! - [`Transport`] sends a [`FetchRequest`]. [`HttpTransport`] is the `reqwest`
//!   implementation (`fetch` on wasm).
//! - [`CookieSource`] reads a cookie by name. [`DocumentCookies`] reads
//!   `document.cookie`; [`StaticCookies`] parses a fixed `Cookie` header.
//! - [`Redirector`] sends the user somewhere else. [`BrowserRedirect`] sets
//!   `window.location`.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::FetchError;

mod bearer;
mod browser;
mod credentialed;
mod http;

pub use bearer::BearerFetch;
pub use browser::{BrowserRedirect, DocumentCookies, StaticCookies};
pub use credentialed::CredentialedFetch;
pub use http::HttpTransport;

/// Whether the browser attaches ambient cookies to a request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Credentials {
    #[default]
    SameOrigin,
    Include,
}

/// A fully-assembled request, as handed to a [`Transport`].
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub method: Method,
    /// Absolute URL or a path resolved against the transport's origin.
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<String>,
    pub credentials: Credentials,
}

/// Caller-supplied part of a request.
#[derive(Clone, Debug, Default)]
pub struct FetchOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl FetchOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self {
            method: Method::POST,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON body.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.body = Some(serde_json::to_string(value)?);
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(self)
    }

    pub(crate) fn into_request(self, url: &str, credentials: Credentials) -> FetchRequest {
        FetchRequest {
            method: self.method,
            url: url.to_string(),
            headers: self.headers,
            body: self.body,
            credentials,
        }
    }
}

/// A response with its body already read.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl FetchResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone()).map_err(|e| FetchError::Decode(e.to_string()))
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Turn a non-2xx response into [`FetchError::Status`].
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Status {
                status: self.status.as_u16(),
                body: String::from_utf8_lossy(&self.body).into_owned(),
            })
        }
    }
}

/// Sends requests over the network.
pub trait Transport {
    fn send(
        &self,
        request: FetchRequest,
    ) -> impl Future<Output = Result<FetchResponse, FetchError>>;
}

/// Read access to the ambient cookie jar.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Performs top-level navigation.
pub trait Redirector {
    fn redirect(&self, location: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory stand-ins for the browser seams.

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use super::*;

    /// Records every request and answers from a queue (200 `{}` once empty).
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        pub sent: Rc<RefCell<Vec<FetchRequest>>>,
        replies: Rc<RefCell<VecDeque<Result<FetchResponse, FetchError>>>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(&self, status: StatusCode, body: &str) -> &Self {
            self.replies
                .borrow_mut()
                .push_back(Ok(FetchResponse::new(status, body.as_bytes())));
            self
        }

        pub fn fail(&self, error: FetchError) -> &Self {
            self.replies.borrow_mut().push_back(Err(error));
            self
        }

        pub fn calls(&self) -> usize {
            self.sent.borrow().len()
        }

        pub fn last(&self) -> FetchRequest {
            self.sent.borrow().last().cloned().expect("no request sent")
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(FetchResponse::new(StatusCode::OK, "{}")))
        }
    }

    #[derive(Clone, Default)]
    pub struct RecordingRedirect {
        pub locations: Rc<RefCell<Vec<String>>>,
    }

    impl Redirector for RecordingRedirect {
        fn redirect(&self, location: &str) {
            self.locations.borrow_mut().push(location.to_string());
        }
    }
}
