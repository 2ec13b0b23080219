//! # Client configuration — `timewise.toml`
//!
//! The web crate embeds a `timewise.toml` next to its manifest and parses it at
//! startup. Every key is optional; an empty file is the default configuration.
//!
//! ```toml
//! [api]
//! base_path = "/api"     # prefix the reverse proxy forwards to the backend
//! origin = ""            # absolute origin for non-browser builds
//!
//! [session]
//! token_cookie = "tw_token"
//! login_path = "/login"
//! ```
//!
//! Kiosk paths are fixed routes, not configuration.

use serde::Deserialize;

/// Top-level configuration stored in `timewise.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Path prefix of every backend call.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Origin requests are resolved against when there is no page origin.
    /// Empty means "use the page's origin".
    #[serde(default)]
    pub origin: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionConfig {
    /// Readable cookie carrying the bearer token.
    #[serde(default = "default_token_cookie")]
    pub token_cookie: String,
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_base_path() -> String {
    "/api".to_string()
}

fn default_token_cookie() -> String {
    "tw_token".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            origin: String::new(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_cookie: default_token_cookie(),
            login_path: default_login_path(),
        }
    }
}

impl ClientConfig {
    /// The conventional filename.
    pub fn filename() -> &'static str {
        "timewise.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Parse embedded TOML, falling back to the defaults when it is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("Invalid {}: {e}; using defaults", Self::filename());
            Self::default()
        })
    }

    /// Builder method to set the backend origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.api.origin = origin.into();
        self
    }

    /// Join an endpoint path onto the API base path.
    pub fn api_path(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.api.base_path.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.session.token_cookie, "tw_token");
        assert_eq!(config.session.login_path, "/login");
    }

    #[test]
    fn test_partial_sections() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_path = "/backend/"

            [session]
            token_cookie = "other"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_path, "/backend/");
        assert_eq!(config.api.origin, "");
        assert_eq!(config.session.token_cookie, "other");
        assert_eq!(config.session.login_path, "/login");
        assert_eq!(config.api_path("/payroll/employees"), "/backend/payroll/employees");
    }

    #[test]
    fn test_invalid_falls_back() {
        let config = ClientConfig::from_toml_or_default("[api\nbase_path = 3");
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_kiosk_section_is_not_configuration() {
        let config = ClientConfig::from_toml(
            r#"
            [kiosk]
            path = "/elsewhere"
            legacy_path = "/old"
            "#,
        )
        .unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_with_origin() {
        let config = ClientConfig::default().with_origin("http://localhost:4000");
        assert_eq!(config.api.origin, "http://localhost:4000");
        assert_eq!(config.api.base_path, "/api");
    }
}
