use reqwest::Url;

use store::ClientConfig;

use super::{Credentials, FetchRequest, FetchResponse, Transport};
use crate::error::FetchError;

/// [`Transport`] backed by `reqwest`. On wasm this is the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    origin: Option<Url>,
}

impl HttpTransport {
    /// A transport resolving relative paths against `origin`.
    pub fn new(origin: Option<Url>) -> Self {
        Self {
            client: build_client(),
            origin,
        }
    }

    /// Origin from the config, then `TIMEWISE_API_ORIGIN` at build time, then
    /// the page's own origin.
    pub fn from_config(config: &ClientConfig) -> Self {
        let configured = Some(config.api.origin.as_str())
            .filter(|o| !o.is_empty())
            .or(option_env!("TIMEWISE_API_ORIGIN"));

        let origin = match configured {
            Some(origin) => match Url::parse(origin) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::warn!("Ignoring invalid API origin {origin}: {e}");
                    page_origin()
                }
            },
            None => page_origin(),
        };

        Self::new(origin)
    }

    pub fn origin(&self) -> Option<&Url> {
        self.origin.as_ref()
    }

    fn resolve(&self, target: &str) -> Result<Url, FetchError> {
        if let Ok(url) = Url::parse(target) {
            return Ok(url);
        }
        let origin = self
            .origin
            .as_ref()
            .ok_or_else(|| FetchError::InvalidUrl(format!("{target} (no origin to resolve against)")))?;
        origin
            .join(target)
            .map_err(|e| FetchError::InvalidUrl(format!("{target}: {e}")))
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        let url = self.resolve(&request.url)?;
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        builder = with_credentials(builder, request.credentials);

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(FetchResponse::new(status, body.to_vec()).with_headers(headers))
    }
}

#[cfg(target_arch = "wasm32")]
fn build_client() -> reqwest::Client {
    reqwest::Client::new()
}

// Off-browser there is no ambient cookie jar, so the client keeps its own.
#[cfg(not(target_arch = "wasm32"))]
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            tracing::error!("Failed to build HTTP client: {e}");
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(
    builder: reqwest::RequestBuilder,
    credentials: Credentials,
) -> reqwest::RequestBuilder {
    match credentials {
        Credentials::Include => builder.fetch_credentials_include(),
        Credentials::SameOrigin => builder.fetch_credentials_same_origin(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(
    builder: reqwest::RequestBuilder,
    _credentials: Credentials,
) -> reqwest::RequestBuilder {
    builder
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<Url> {
    let origin = web_sys::window()?.location().origin().ok()?;
    Url::parse(&origin).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<Url> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_paths() {
        let transport = HttpTransport::new(Some(Url::parse("https://tw.example.com").unwrap()));
        assert_eq!(
            transport.resolve("/api/auth/me").unwrap().as_str(),
            "https://tw.example.com/api/auth/me"
        );
        assert_eq!(
            transport.resolve("https://other.example.com/x").unwrap().as_str(),
            "https://other.example.com/x"
        );
    }

    #[test]
    fn test_resolve_without_origin() {
        let transport = HttpTransport::new(None);
        assert!(matches!(
            transport.resolve("/api/auth/me"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_origin_from_config() {
        let config = ClientConfig::default().with_origin("http://localhost:4000");
        let transport = HttpTransport::from_config(&config);
        assert_eq!(
            transport.origin().map(Url::as_str),
            Some("http://localhost:4000/")
        );
    }
}
