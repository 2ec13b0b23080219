pub mod config;
pub mod models;
pub mod role;
pub mod user_store;

pub use config::ClientConfig;
pub use models::{
    ClockAction, ClockPunch, EmployeePayroll, PayrollRowView, PunchRequest, UserProfile,
};
pub use role::{has_role, Role};
pub use user_store::{current_user, set_user, Subscription, UserStore};
