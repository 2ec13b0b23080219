//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod auth;
pub use auth::{use_api, use_current_user, LogoutButton, RoleGate, UserProvider, UserState};

mod sidebar;
pub use sidebar::{visible_nav_items, AppSidebar, NavIcon, NavItem, NAV_ITEMS};

mod payroll_row;
pub use payroll_row::{payroll_rows, PayrollRow, PayrollSort, PayrollTable};
