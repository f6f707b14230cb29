pub mod auth;
pub mod client;
pub mod rest;
pub mod storage;

pub use auth::SupabaseAuth;
pub use client::SupabaseClient;
pub use rest::RemoteBackend;
