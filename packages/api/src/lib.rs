//! # API crate — how the TimeWise frontend talks to its backend
//!
//! The backend is an external HTTP service reached through the `/api` prefix.
//! This crate holds everything between a view and that service.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`fetch`] | Transport seam plus the two session wrappers, [`CredentialedFetch`] (http-only cookie, 401 → login redirect) and [`BearerFetch`] (readable `tw_token` cookie → `Authorization` header) |
//! | [`client`] | [`TimewiseClient`]: typed profile, logout, payroll and kiosk calls |
//! | [`routes`] | Client paths shared with the router (`/login?expired=1`, `/kiosk`, `/clock`) |
//! | [`token`] | Inert, deprecated accessors from the old token-based session |
//! | [`error`] | [`FetchError`] |

pub mod client;
pub mod error;
pub mod fetch;
pub mod routes;
pub mod token;

pub use client::{BrowserClient, TimewiseClient};
pub use error::FetchError;
pub use fetch::{
    BearerFetch, BrowserRedirect, CookieSource, CredentialedFetch, Credentials, DocumentCookies,
    FetchOptions, FetchRequest, FetchResponse, HttpTransport, Redirector, StaticCookies, Transport,
};

pub use store::{ClientConfig, ClockAction, ClockPunch, EmployeePayroll, Role, UserProfile};
