pub mod ai;
pub mod demo;
pub mod supabase;
pub mod utils;
