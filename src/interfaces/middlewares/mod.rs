pub mod auth;
pub mod maintenance;
