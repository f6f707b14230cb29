pub mod admin;
pub mod auth;
pub mod chat;
pub mod contact;
pub mod content;
pub mod home;
pub mod json_error;
pub mod system;
pub mod uploads;
