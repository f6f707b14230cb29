pub mod admin_form;
pub mod certificate;
pub mod chat;
pub mod fields;
pub mod message;
pub mod option_fields;
pub mod project;
pub mod samples;
pub mod session;
pub mod site_settings;
