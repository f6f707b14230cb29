pub mod auth_provider;
pub mod language_model;
pub mod storage_backend;
