use cookie::Cookie;

use super::{CookieSource, Redirector};

/// Reads `document.cookie`. Outside a browser there are no cookies.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    #[cfg(target_arch = "wasm32")]
    fn cookie(&self, name: &str) -> Option<String> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let header = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
        find_cookie(&header, name)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn cookie(&self, _name: &str) -> Option<String> {
        None
    }
}

/// A fixed `Cookie` header, e.g. `"tw_token=abc123; theme=dark"`.
#[derive(Clone, Debug, Default)]
pub struct StaticCookies(pub String);

impl StaticCookies {
    pub fn new(header: impl Into<String>) -> Self {
        Self(header.into())
    }
}

impl CookieSource for StaticCookies {
    fn cookie(&self, name: &str) -> Option<String> {
        find_cookie(&self.0, name)
    }
}

fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

/// Navigates the current tab via `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRedirect;

impl Redirector for BrowserRedirect {
    fn redirect(&self, location: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(location) {
                    tracing::error!("Failed to redirect to {location}: {e:?}");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            tracing::warn!("No browser to redirect to {location}");
        }
    }
}
