use reqwest::StatusCode;

use super::{Credentials, FetchOptions, FetchResponse, Redirector, Transport};
use crate::error::FetchError;
use crate::routes;

/// Fetch wrapper for the http-only cookie session.
///
/// Every request is sent with `credentials: include`. A 401 never reaches the
/// caller: the browser is sent to the login page with the expired marker and the
/// call fails with [`FetchError::SessionExpired`].
#[derive(Clone, Debug)]
pub struct CredentialedFetch<T, R> {
    transport: T,
    redirector: R,
    expired_location: String,
}

impl<T: Transport, R: Redirector> CredentialedFetch<T, R> {
    pub fn new(transport: T, redirector: R) -> Self {
        Self {
            transport,
            redirector,
            expired_location: routes::session_expired_url(routes::LOGIN_PATH),
        }
    }

    /// Use a different login page for the expired redirect.
    pub fn with_login_path(mut self, login_path: &str) -> Self {
        self.expired_location = routes::session_expired_url(login_path);
        self
    }

    pub async fn fetch(
        &self,
        target: &str,
        options: FetchOptions,
    ) -> Result<FetchResponse, FetchError> {
        let request = options.into_request(target, Credentials::Include);
        let response = self.transport.send(request).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!("Session expired calling {target}; redirecting to login");
            self.redirector.redirect(&self.expired_location);
            return Err(FetchError::SessionExpired);
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::testing::{FakeTransport, RecordingRedirect};

    fn wrapper() -> (
        CredentialedFetch<FakeTransport, RecordingRedirect>,
        FakeTransport,
        RecordingRedirect,
    ) {
        let transport = FakeTransport::new();
        let redirect = RecordingRedirect::default();
        (
            CredentialedFetch::new(transport.clone(), redirect.clone()),
            transport,
            redirect,
        )
    }

    #[tokio::test]
    async fn test_unauthorized_redirects_once_and_fails() {
        let (fetch, transport, redirect) = wrapper();
        transport.reply(StatusCode::UNAUTHORIZED, r#"{"error":"unauthorized"}"#);

        let result = fetch.fetch("/api/payroll/employees", FetchOptions::get()).await;

        assert_eq!(result.unwrap_err(), FetchError::SessionExpired);
        assert_eq!(*redirect.locations.borrow(), vec!["/login?expired=1".to_string()]);
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let (fetch, transport, redirect) = wrapper();
        transport.reply(StatusCode::OK, r#"[{"name":"Jane"}]"#);

        let response = fetch
            .fetch("/api/payroll/employees", FetchOptions::get())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.bytes(), br#"[{"name":"Jane"}]"#);
        assert!(redirect.locations.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_other_errors_are_returned() {
        let (fetch, transport, redirect) = wrapper();
        transport
            .reply(StatusCode::FORBIDDEN, "forbidden")
            .reply(StatusCode::INTERNAL_SERVER_ERROR, "boom");

        let forbidden = fetch.fetch("/api/a", FetchOptions::get()).await.unwrap();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
        let failed = fetch.fetch("/api/b", FetchOptions::get()).await.unwrap();
        assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(redirect.locations.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_requests_include_credentials() {
        let (fetch, transport, _) = wrapper();
        fetch
            .fetch("/api/auth/logout", FetchOptions::post())
            .await
            .unwrap();

        let sent = transport.last();
        assert_eq!(sent.credentials, Credentials::Include);
        assert_eq!(sent.method, reqwest::Method::POST);
        assert_eq!(sent.url, "/api/auth/logout");
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let (fetch, transport, redirect) = wrapper();
        transport.fail(FetchError::Transport("connection refused".to_string()));

        let err = fetch.fetch("/api/a", FetchOptions::get()).await.unwrap_err();
        assert_eq!(err, FetchError::Transport("connection refused".to_string()));
        assert!(redirect.locations.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_custom_login_path() {
        let (fetch, transport, redirect) = wrapper();
        let fetch = fetch.with_login_path("/signin");
        transport.reply(StatusCode::UNAUTHORIZED, "");

        assert!(fetch.fetch("/api/a", FetchOptions::get()).await.is_err());
        assert_eq!(*redirect.locations.borrow(), vec!["/signin?expired=1".to_string()]);
    }
}
