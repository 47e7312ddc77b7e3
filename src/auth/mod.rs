//! Authentication module
//!
//! This module provides:
//! - Session token generation and validation
//! - The credential validator behind the authentication gate
//! - Authentication middleware and the `Principal` extractor
//! - The mock login handler

pub mod credential;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod models;

pub use credential::{Credential, CredentialValidator, Principal, Role};
pub use handlers::login;
pub use jwt::{generate_token, validate_token, SessionClaims};
pub use middleware::authenticate;
