use dioxus::prelude::*;
use store::{has_role, Role, UserProfile};

use crate::auth::LogoutButton;
use crate::components::Tooltip;
use crate::icons::{FaChartLine, FaClock, FaMoneyBillWave, FaRightFromBracket};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Clock,
    Dashboard,
    Payroll,
}

/// A sidebar entry. An empty `allowed` list means everyone, signed in or not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
    pub allowed: &'static [Role],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Kiosk",
        href: api::routes::KIOSK_PATH,
        icon: NavIcon::Clock,
        allowed: &[],
    },
    NavItem {
        label: "Dashboard",
        href: "/dashboard",
        icon: NavIcon::Dashboard,
        allowed: &Role::PRECEDENCE,
    },
    NavItem {
        label: "Payroll",
        href: "/payroll",
        icon: NavIcon::Payroll,
        allowed: &[Role::Admin, Role::Manager],
    },
];

/// Entries a user with `role` may see, in menu order.
pub fn visible_nav_items(role: Option<Role>) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.allowed.is_empty() || has_role(role, item.allowed))
        .copied()
        .collect()
}

#[component]
pub fn AppSidebar(
    user: Option<UserProfile>,
    active_href: String,
    on_navigate: EventHandler<String>,
) -> Element {
    let role = user.as_ref().and_then(|u| u.role);
    let items = visible_nav_items(role);

    rsx! {
        nav {
            class: "flex h-full w-60 shrink-0 flex-col border-r border-neutral-200 bg-neutral-50 dark:border-neutral-700 dark:bg-neutral-900",

            // User header
            div {
                class: "flex items-center gap-2 px-4 py-4",
                span {
                    class: "text-base font-semibold text-neutral-800 dark:text-neutral-100",
                    "TimeWise"
                }
                if let Some(ref u) = user {
                    Tooltip {
                        content: u.email.clone(),
                        span {
                            class: "truncate text-sm text-neutral-500",
                            "{u.display_name()}"
                        }
                    }
                    if let Some(role) = role {
                        span {
                            class: "rounded bg-emerald-100 px-1.5 py-0.5 text-[0.6875rem] font-medium text-emerald-800",
                            "{role.label()}"
                        }
                    }
                }
            }

            ul {
                class: "flex-1 space-y-1 px-2",
                for item in items {
                    li {
                        key: "{item.href}",
                        button {
                            class: if item.href == active_href {
                                "flex w-full items-center gap-2 rounded px-3 py-2 text-sm bg-neutral-200 font-medium dark:bg-neutral-800"
                            } else {
                                "flex w-full items-center gap-2 rounded px-3 py-2 text-sm hover:bg-neutral-100 dark:hover:bg-neutral-800"
                            },
                            onclick: move |_| on_navigate.call(item.href.to_string()),
                            NavItemIcon { icon: item.icon }
                            "{item.label}"
                        }
                    }
                }
            }

            if user.is_some() {
                div {
                    class: "flex items-center gap-2 border-t border-neutral-200 px-4 py-3 text-sm dark:border-neutral-700",
                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                    LogoutButton { class: "text-neutral-600 hover:text-neutral-900 dark:text-neutral-300" }
                }
            }
        }
    }
}

#[component]
fn NavItemIcon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Clock => rsx! { Icon { icon: FaClock, width: 14, height: 14 } },
        NavIcon::Dashboard => rsx! { Icon { icon: FaChartLine, width: 14, height: 14 } },
        NavIcon::Payroll => rsx! { Icon { icon: FaMoneyBillWave, width: 14, height: 14 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Option<Role>) -> Vec<&'static str> {
        visible_nav_items(role).iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_anonymous_sees_only_public_items() {
        assert_eq!(labels(None), vec!["Kiosk"]);
    }

    #[test]
    fn test_items_by_role() {
        assert_eq!(labels(Some(Role::Admin)), vec!["Kiosk", "Dashboard", "Payroll"]);
        assert_eq!(labels(Some(Role::Manager)), vec!["Kiosk", "Dashboard", "Payroll"]);
        assert_eq!(labels(Some(Role::Supervisor)), vec!["Kiosk", "Dashboard"]);
    }
}
