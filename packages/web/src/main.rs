use dioxus::prelude::*;

use store::ClientConfig;
use ui::UserProvider;
use views::{Dashboard, Kiosk, KioskRedirect, Login, NotFound, Payroll, SidebarLayout};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login?:expired")]
    Login { expired: String },
    #[route("/kiosk")]
    Kiosk {},
    #[route("/clock")]
    KioskRedirect {},
    #[layout(SidebarLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/payroll")]
        Payroll {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../timewise.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClientConfig::from_toml_or_default(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Stylesheet { href: ui::TAILWIND_CSS }

        UserProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the kiosk
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Kiosk {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_kiosk_route_ignores_query() {
        for path in [
            "/clock",
            "/clock?employee=42",
            "/clock?next=/payroll&expired=1",
        ] {
            assert_eq!(path.parse::<Route>().ok(), Some(Route::KioskRedirect {}), "{path}");
        }
    }

    #[test]
    fn test_kiosk_redirect_target_is_kiosk_route() {
        assert_eq!(
            api::routes::kiosk_redirect_target().parse::<Route>().ok(),
            Some(Route::Kiosk {})
        );
    }

    #[test]
    fn test_login_expired_marker() {
        assert_eq!(
            "/login?expired=1".parse::<Route>().ok(),
            Some(Route::Login {
                expired: "1".to_string()
            })
        );
    }

    #[test]
    fn test_embedded_config_parses() {
        assert!(ClientConfig::from_toml(CONFIG_TOML).is_ok());
    }
}
