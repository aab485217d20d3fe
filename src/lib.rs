pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod seo;
pub mod session;
pub mod state;
