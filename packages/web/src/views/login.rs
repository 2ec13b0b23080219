//! Login page. Shows a banner when sent here by an expired session.

use dioxus::prelude::*;
use ui::{use_api, use_current_user};

use crate::Route;

#[component]
pub fn Login(expired: String) -> Element {
    let user = use_current_user();
    let client = use_api();
    let nav = use_navigator();
    let session_expired = api::routes::is_session_expired(&expired);
    let action = client.config().api_path("auth/login");

    // If already logged in, go to the dashboard
    if !user().loading && user().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        div {
            class: "flex min-h-screen flex-col items-center justify-center bg-white p-8",

            h1 {
                class: "mb-2 text-[1.75rem] font-bold text-neutral-800",
                "TimeWise"
            }

            p {
                class: "mb-8 text-[0.9375rem] text-neutral-600",
                "Sign in to manage time and payroll"
            }

            if session_expired {
                div {
                    role: "alert",
                    class: "mb-4 w-full max-w-[320px] rounded border border-amber-200 bg-amber-50 px-2.5 py-2.5 text-[0.8125rem] text-amber-800",
                    "Your session has expired. Please sign in again."
                }
            }

            // The backend sets the http-only session cookie and redirects back.
            form {
                class: "flex w-full max-w-[320px] flex-col gap-3",
                action: "{action}",
                method: "post",

                input {
                    class: "h-9 rounded-md border border-neutral-300 px-3 text-sm",
                    r#type: "email",
                    name: "email",
                    placeholder: "Email",
                    required: true,
                }
                input {
                    class: "h-9 rounded-md border border-neutral-300 px-3 text-sm",
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    required: true,
                }
                button {
                    class: "h-9 rounded-md bg-emerald-600 text-sm font-medium text-white hover:bg-emerald-700",
                    r#type: "submit",
                    "Sign in"
                }
            }

            Link {
                class: "mt-6 text-sm text-neutral-500 underline",
                to: Route::Kiosk {},
                "Open the clock-in kiosk"
            }
        }
    }
}
