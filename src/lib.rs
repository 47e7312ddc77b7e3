//! Mock Gateway Library
//!
//! An HTTP service that mimics an "add and earn" payment provider and a
//! bank scraper provider, so downstream services can be developed and
//! tested without calling the real ones.

pub mod api;
pub mod auth;
pub mod core;

// Re-export commonly used types
pub use api::ApiServer;
pub use crate::core::{Config, GatewayError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
