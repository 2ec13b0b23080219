use dioxus::prelude::*;

use crate::Route;

/// Legacy kiosk address. Always replaces itself with the canonical kiosk page;
/// nothing from the request is looked at.
#[component]
pub fn KioskRedirect() -> Element {
    let nav = use_navigator();
    let target = api::routes::kiosk_redirect_target()
        .parse::<Route>()
        .unwrap_or(Route::Kiosk {});
    nav.replace(target);
    rsx! {}
}
