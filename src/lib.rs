// src/lib.rs
pub mod config;
pub mod error;
pub mod types;
pub mod client;
pub mod tool;
pub mod tools;
pub mod server;

// Optional re-exports
pub use client::MessariClient;
pub use config::MessariConfig;
pub use error::MessariError;
pub use server::{cors_handler, handle_mcp_request, health_check, AppState};
