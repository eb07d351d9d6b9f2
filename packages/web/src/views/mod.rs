mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod admin_layout;
pub use admin_layout::AdminLayout;
