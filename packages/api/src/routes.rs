//! Fixed client-side paths the fetch layer and the router agree on.

/// Login page.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter the login page reads to show the "session expired" banner.
pub const EXPIRED_PARAM: &str = "expired";

/// Canonical kiosk clock-in page.
pub const KIOSK_PATH: &str = "/kiosk";

/// Old kiosk address, kept only to forward to [`KIOSK_PATH`].
pub const LEGACY_KIOSK_PATH: &str = "/clock";

/// Login URL carrying the session-expired marker, e.g. `/login?expired=1`.
pub fn session_expired_url(login_path: &str) -> String {
    format!("{login_path}?{EXPIRED_PARAM}=1")
}

/// Whether the login page's `expired` query value asks for the banner.
pub fn is_session_expired(value: &str) -> bool {
    value == "1"
}

/// Where a visit to the legacy kiosk address goes. The request is not inspected.
pub fn kiosk_redirect_target() -> &'static str {
    KIOSK_PATH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expired_url() {
        assert_eq!(session_expired_url(LOGIN_PATH), "/login?expired=1");
        assert!(is_session_expired("1"));
        assert!(!is_session_expired(""));
        assert!(!is_session_expired("0"));
    }

    #[test]
    fn test_kiosk_redirect_target() {
        assert_eq!(kiosk_redirect_target(), KIOSK_PATH);
        assert_ne!(kiosk_redirect_target(), LEGACY_KIOSK_PATH);
    }
}
