//! Core module
//!
//! This module provides the ambient application layer:
//! - Configuration management
//! - Structured logging system
//! - Error handling and type system

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{ErrorResponse, GatewayError, Result};
pub use logging::Logger;
