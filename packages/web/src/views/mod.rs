mod login;
pub use login::Login;

mod kiosk;
pub use kiosk::Kiosk;

mod kiosk_redirect;
pub use kiosk_redirect::KioskRedirect;

mod dashboard;
pub use dashboard::Dashboard;

mod payroll;
pub use payroll::Payroll;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayout;

mod not_found;
pub use not_found::NotFound;
