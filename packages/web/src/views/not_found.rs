use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "flex min-h-screen flex-col items-center justify-center gap-3 p-8",
            h1 { class: "text-xl font-semibold text-neutral-800", "Page not found" }
            p { class: "text-sm text-neutral-500", "/{path}" }
            Link {
                class: "text-sm text-emerald-700 underline",
                to: Route::Kiosk {},
                "Go to the kiosk"
            }
        }
    }
}
