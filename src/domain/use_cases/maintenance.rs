use serde::Serialize;

use crate::constants::{ADMIN_PATH, LOGIN_PATH};

/// Show the maintenance view iff the flag is on, nobody is signed in and
/// the path is neither the dashboard nor the login page.
pub fn should_show_maintenance(maintenance_flag: bool, has_session: bool, current_path: &str) -> bool {
    maintenance_flag && !has_session && !is_exempt_path(current_path)
}

pub fn is_exempt_path(path: &str) -> bool {
    is_admin_path(path) || is_login_path(path)
}

pub fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PATH || path.starts_with(&format!("{}/", ADMIN_PATH))
}

pub fn is_login_path(path: &str) -> bool {
    path == LOGIN_PATH || path.starts_with(&format!("{}/", LOGIN_PATH))
}

#[derive(Debug, Serialize)]
pub struct MaintenanceView {
    pub status: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
}

impl MaintenanceView {
    pub fn new(site_title: Option<String>) -> Self {
        MaintenanceView {
            status: "maintenance",
            title: "System Upgrade",
            message: "We are upgrading the site to give you a better experience. Please check back soon.",
            site_title,
        }
    }
}
