pub mod admin_panel;
pub mod notification;
pub mod site;
pub mod debug;

pub use admin_panel::AdminPanel;
pub use debug::{layout_report, log_layout_diagnostics};
pub use notification::{show_notification, show_notification_for};
pub use site::mount_site;
