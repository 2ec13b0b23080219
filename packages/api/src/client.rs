//! Typed calls to the TimeWise backend.
//!
//! Session-scoped calls (profile, logout, payroll) go through the
//! [`CredentialedFetch`] wrapper; kiosk punches go through [`BearerFetch`].

use reqwest::StatusCode;

use store::{ClientConfig, ClockAction, ClockPunch, EmployeePayroll, PunchRequest, UserProfile};

use crate::error::FetchError;
use crate::fetch::{
    BearerFetch, BrowserRedirect, CookieSource, CredentialedFetch, DocumentCookies, FetchOptions,
    HttpTransport, Redirector, Transport,
};

/// The client the browser app uses.
pub type BrowserClient = TimewiseClient<HttpTransport, BrowserRedirect, DocumentCookies>;

#[derive(Clone, Debug)]
pub struct TimewiseClient<T, R, C> {
    config: ClientConfig,
    session: CredentialedFetch<T, R>,
    kiosk: BearerFetch<T, C>,
}

impl BrowserClient {
    pub fn browser(config: ClientConfig) -> Self {
        let transport = HttpTransport::from_config(&config);
        Self::new(config, transport, BrowserRedirect, DocumentCookies)
    }
}

impl<T, R, C> TimewiseClient<T, R, C>
where
    T: Transport + Clone,
    R: Redirector,
    C: CookieSource,
{
    pub fn new(config: ClientConfig, transport: T, redirector: R, cookies: C) -> Self {
        let session = CredentialedFetch::new(transport.clone(), redirector)
            .with_login_path(&config.session.login_path);
        let kiosk =
            BearerFetch::new(transport, cookies).with_cookie_name(config.session.token_cookie.clone());
        Self {
            config,
            session,
            kiosk,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The signed-in user, or `None` when the server has no session.
    pub async fn current_user(&self) -> Result<Option<UserProfile>, FetchError> {
        let url = self.config.api_path("auth/me");
        let response = self.session.fetch(&url, FetchOptions::get()).await?;
        match response.status() {
            StatusCode::NO_CONTENT | StatusCode::NOT_FOUND => Ok(None),
            _ => Ok(Some(response.error_for_status()?.json()?)),
        }
    }

    /// End the server session.
    pub async fn logout(&self) -> Result<(), FetchError> {
        let url = self.config.api_path("auth/logout");
        self.session
            .fetch(&url, FetchOptions::post())
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn payroll_employees(&self) -> Result<Vec<EmployeePayroll>, FetchError> {
        let url = self.config.api_path("payroll/employees");
        self.session
            .fetch(&url, FetchOptions::get())
            .await?
            .error_for_status()?
            .json()
    }

    /// Record a kiosk clock-in or clock-out.
    pub async fn punch(
        &self,
        employee_id: &str,
        action: ClockAction,
    ) -> Result<ClockPunch, FetchError> {
        let url = self.config.api_path("kiosk/punch");
        let body = PunchRequest {
            employee_id: employee_id.trim().to_string(),
            action,
        };
        self.kiosk
            .fetch(&url, FetchOptions::post().json(&body)?)
            .await?
            .error_for_status()?
            .json()
    }
}
