use dioxus::prelude::*;
use store::Role;
use ui::{use_current_user, RoleGate};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RoleGate {
            allowed: Role::PRECEDENCE.to_vec(),
            DashboardBody {}
        }
    }
}

#[component]
fn DashboardBody() -> Element {
    let state = use_current_user()();
    let Some(user) = state.user else {
        return rsx! {};
    };
    let can_see_payroll = store::has_role(user.role, &[Role::Admin, Role::Manager]);

    rsx! {
        div {
            class: "p-8",
            h1 {
                class: "mb-1 text-xl font-semibold text-neutral-800 dark:text-neutral-100",
                "Welcome, {user.display_name()}"
            }
            p {
                class: "mb-6 text-sm text-neutral-500",
                "Organization {user.organization_id}"
            }
            div {
                class: "flex gap-3",
                Link {
                    class: "rounded-md border border-neutral-300 px-4 py-2 text-sm hover:bg-neutral-100",
                    to: Route::Kiosk {},
                    "Open kiosk"
                }
                if can_see_payroll {
                    Link {
                        class: "rounded-md border border-neutral-300 px-4 py-2 text-sm hover:bg-neutral-100",
                        to: Route::Payroll {},
                        "Review payroll"
                    }
                }
            }
        }
    }
}
