use dioxus::prelude::*;
use ui::{use_current_user, AppSidebar};

use crate::Route;

#[component]
pub fn SidebarLayout() -> Element {
    let nav = use_navigator();
    let user = use_current_user();
    let route = use_route::<Route>();

    let on_navigate = move |href: String| match href.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::warn!("No route for {href}: {e}"),
    };

    rsx! {
        div {
            class: "flex h-screen",
            AppSidebar {
                user: user().user,
                active_href: route.to_string(),
                on_navigate: on_navigate,
            }
            main {
                class: "flex-1 overflow-y-auto",
                Outlet::<Route> {}
            }
        }
    }
}
